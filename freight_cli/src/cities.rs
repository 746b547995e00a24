use clap::Args;
use comfy_table::Table;

use crate::dataset_args::DatasetArgs;

#[derive(Args)]
pub struct CitiesArgs {
    #[command(flatten)]
    dataset: DatasetArgs,
}

pub fn run(args: CitiesArgs) -> anyhow::Result<()> {
    let graph = args.dataset.load_graph()?;

    let mut table = Table::new();
    table.set_header(vec!["City", "Hub", "Latitude", "Longitude", "Routes"]);

    for name in graph.city_names_sorted() {
        let Some(node) = graph.node_id(name) else {
            continue;
        };
        let city = graph.city(node);

        table.add_row(vec![
            city.name().to_string(),
            if city.is_hub() { "yes" } else { "" }.to_string(),
            format!("{:.4}", city.coords().lat()),
            format!("{:.4}", city.coords().lng()),
            graph.node_edges(node).len().to_string(),
        ]);
    }

    println!("{table}");

    Ok(())
}
