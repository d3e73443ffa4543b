use std::path::PathBuf;

use clap::Parser;
use texview_serve::{Roots, ServeOptions};

#[derive(Parser)]
#[command(
    name = "texview-serve",
    version,
    about = "Serve the texview viewer and project directories for local use"
)]
struct Cli {
    /// Directory holding `projects/<id>/`
    #[arg(long, default_value = "public")]
    root: PathBuf,

    /// Trunk output directory with the built viewer
    #[arg(long, default_value = "dist")]
    dist: PathBuf,

    /// Address to bind
    #[arg(short, long, default_value = "0.0.0.0")]
    bind: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8001)]
    port: u16,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    texview_serve::run(&ServeOptions {
        bind: cli.bind,
        port: cli.port,
        roots: Roots::new(cli.root, cli.dist),
    })
}
