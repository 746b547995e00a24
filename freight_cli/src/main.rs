use clap::{Parser, Subcommand};

use mimalloc::MiMalloc;

use crate::{cities::CitiesArgs, map::MapArgs, route::RouteArgs};

mod cities;
mod dataset_args;
mod map;
mod route;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find the cheapest route between two cities
    #[command(visible_alias = "r")]
    Route {
        #[command(flatten)]
        args: RouteArgs,
    },
    /// List the cities of the dataset
    Cities {
        #[command(flatten)]
        args: CitiesArgs,
    },
    /// Export the network, and optionally a route, as GeoJSON
    Map {
        #[command(flatten)]
        args: MapArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Commands::Route { args } => route::run(args)?,
        Commands::Cities { args } => cities::run(args)?,
        Commands::Map { args } => map::run(args)?,
    }

    Ok(())
}
