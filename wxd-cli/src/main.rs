//! wxd - serve and query the weather dashboard.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "wxd",
    version,
    about = "Weather dashboard server and reading store toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: wxd_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();
    log::debug!("wxd {} starting", env!("CARGO_PKG_VERSION"));
    wxd_cmd::run(cli.command).await
}
