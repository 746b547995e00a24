use freight_routing::Graph;

pub struct AppState {
    pub graph: Graph,
}
