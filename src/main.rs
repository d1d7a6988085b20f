use std::process::exit;

use clap::Parser;
use elo_ranking::{args::Args, model::renderer::RankingTableRenderer, output};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .with_writer(std::io::stderr)
        .init();

    let source = match args.data_source() {
        Ok(source) => source,
        Err(e) => {
            error!("Invalid data source configuration: {}", e);
            exit(2);
        }
    };

    // Both documents or nothing
    let (teams, stats) = match source.fetch_all().await {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load ranking data: {}", e);
            exit(1);
        }
    };

    let renderer = RankingTableRenderer::new(args.flag_style, args.timestamp_policy());
    let table = match renderer.render(&teams, &stats) {
        Ok(table) => table,
        Err(e) => {
            error!("Failed to render ranking table: {}", e);
            exit(1);
        }
    };

    if let Err(e) = output::write(&table, args.format, args.output.as_deref()) {
        error!("{}", e);
        exit(1);
    }

    info!("Rendered {} teams, last update {}", table.rows.len(), table.last_update);
}
