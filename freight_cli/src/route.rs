use clap::Args;
use comfy_table::Table;
use freight_routing::{
    Graph, RoutingError, RoutingPath,
    routing::route_summary::RouteSummary,
};
use tracing::{error, info, warn};

use crate::dataset_args::DatasetArgs;

#[derive(Args)]
pub struct RouteArgs {
    #[command(flatten)]
    dataset: DatasetArgs,

    /// Source city
    from: String,

    /// Destination city
    to: String,

    /// Print every leg of the route
    #[arg(short, long)]
    legs: bool,
}

pub fn run(args: RouteArgs) -> anyhow::Result<()> {
    let graph = args.dataset.load_graph()?;

    match graph.route(&args.from, &args.to) {
        Ok(path) => {
            let summary = RouteSummary::new(&graph, &path);
            info!("{}", summary.headline());
            println!("{}", summary);

            if args.legs {
                println!("{}", legs_table(&graph, &path));
            }
        }
        // Query errors are reported, the dataset was fine
        Err(RoutingError::InvalidQuery(reason)) => warn!("{}", reason),
        Err(no_path @ RoutingError::NoPathFound { .. }) => error!("{}", no_path),
    }

    Ok(())
}

fn legs_table(graph: &Graph, path: &RoutingPath) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["From", "To", "Distance (km)", "Cost"]);

    for leg in path.legs() {
        table.add_row(vec![
            graph.city(leg.from()).name().to_string(),
            graph.city(leg.to()).name().to_string(),
            format!("{:.0}", leg.distance()),
            format!("{:.2}", leg.cost()),
        ]);
    }

    table
}
