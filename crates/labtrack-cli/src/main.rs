use labtrack_cli::{build_cli, init_tracing, resolve_config, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();
    let config = resolve_config(&matches)?;
    init_tracing(&config);
    tracing::debug!(data_dir = %config.data_dir.display(), "configuration resolved");

    run(&matches, &config).await
}
