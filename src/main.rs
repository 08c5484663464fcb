//! orbitgraph - 3D graph viewer with an idle orbit camera

use clap::Parser;
use tracing_subscriber::EnvFilter;

use orbitgraph::cli::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let app = App::parse();

    // RUST_LOG wins over --verbose
    let default_filter = if app.verbose { "orbitgraph=debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    app.run()
}
