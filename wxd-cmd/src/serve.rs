//! `wxd serve`

use anyhow::Context;
use std::path::PathBuf;
use wxd_server::ServerConfig;

pub async fn run_serve(
    host: String,
    port: u16,
    db_path: PathBuf,
    static_dir: PathBuf,
) -> anyhow::Result<()> {
    if !static_dir.is_dir() {
        log::warn!(
            "static directory {} does not exist; only the API will be served",
            static_dir.display()
        );
    }
    let config = ServerConfig {
        host,
        port,
        db_path,
        static_dir,
    };
    wxd_server::serve(config)
        .await
        .context("HTTP server stopped")
}
