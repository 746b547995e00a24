use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use freight_routing::{Dataset, Graph};

#[derive(Args)]
pub struct DatasetArgs {
    /// Dataset file listing countries, cities and routes
    #[arg(short = 'd', long, default_value = "./data/data.json")]
    pub data: PathBuf,
}

impl DatasetArgs {
    pub fn load_graph(&self) -> anyhow::Result<Graph> {
        let dataset = Dataset::from_file(&self.data)
            .with_context(|| format!("Cannot load dataset {}", self.data.display()))?;

        Graph::from_dataset(&dataset)
            .with_context(|| format!("Cannot build graph from {}", self.data.display()))
    }
}
