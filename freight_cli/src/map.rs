use std::{fs::File, io::BufWriter, path::PathBuf};

use clap::Args;
use freight_routing::{Graph, RoutingPath, map::MapGeometry};
use tracing::{info, warn};

use crate::dataset_args::DatasetArgs;

#[derive(Args)]
pub struct MapArgs {
    #[command(flatten)]
    dataset: DatasetArgs,

    /// Highlight the route starting at this city
    #[arg(long, requires = "to")]
    from: Option<String>,

    /// Highlight the route ending at this city
    #[arg(long, requires = "from")]
    to: Option<String>,

    /// Output GeoJSON file, stdout when omitted
    #[arg(long, short = 'o')]
    out: Option<PathBuf>,
}

pub fn run(args: MapArgs) -> anyhow::Result<()> {
    let graph = args.dataset.load_graph()?;

    let path = highlighted_route(&graph, args.from.as_deref(), args.to.as_deref());
    let geojson = MapGeometry::from_graph(&graph, path.as_ref()).to_geojson();

    match args.out {
        Some(out) => {
            serde_json::to_writer_pretty(BufWriter::new(File::create(&out)?), &geojson)?;
            info!("Map written to {}", out.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&geojson)?),
    }

    Ok(())
}

/// The map is still useful without the route, so query errors only warn.
fn highlighted_route(graph: &Graph, from: Option<&str>, to: Option<&str>) -> Option<RoutingPath> {
    let (from, to) = from.zip(to)?;

    graph
        .route(from, to)
        .inspect_err(|error| warn!("{}", error))
        .ok()
}
