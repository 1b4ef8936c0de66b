use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use statepop::{
    export::EXPORT_FILE_NAME, select, App, Config, DataProvider, HttpProvider, StaticProvider,
};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

/// Look up US state populations from DataUSA and export them to CSV.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// API endpoint to fetch from
    #[arg(long)]
    url: Option<String>,

    /// Read a saved API response from this file instead of fetching
    #[arg(long)]
    input: Option<PathBuf>,

    /// Print every dropdown label
    #[arg(long)]
    list: bool,

    /// Print labels containing this text (case-insensitive)
    #[arg(long)]
    search: Option<String>,

    /// Show population and year for this state name
    #[arg(long)]
    state: Option<String>,

    /// Write the dataset to export.csv
    #[arg(long)]
    export: bool,

    /// Directory for export.csv
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Warnings and errors only
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let cfg = Config::from_parts(
        args.url.as_deref(),
        args.input.clone(),
        args.out_dir.clone(),
        args.verbose,
        args.quiet,
    )?;

    // ─── 1) init logging ─────────────────────────────────────────────
    let env =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log_filter));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    info!("startup");

    // ─── 2) load the dataset once ───────────────────────────────────
    let provider: Box<dyn DataProvider> = match &cfg.input {
        Some(path) => match StaticProvider::from_file(path) {
            Ok(p) => Box::new(p),
            Err(e) => {
                error!(error = %format!("{:#}", e), "cannot read input");
                return Ok(());
            }
        },
        None => Box::new(HttpProvider::new(Client::new(), cfg.api_url.clone())),
    };
    let mut app = App::new();
    app.load(provider.as_ref()).await;

    // ─── 3) dropdown ────────────────────────────────────────────────
    let options = app.options();
    if args.list {
        for opt in &options {
            println!("{}", opt.label);
        }
    }
    if let Some(query) = &args.search {
        for opt in select::search(&options, query) {
            println!("{}", opt.label);
        }
    }

    // ─── 4) info panel ──────────────────────────────────────────────
    if let Some(name) = &args.state {
        app.select(name);
        if let Some(panel) = app.info_panel() {
            println!("{}", panel);
        }
    }

    // ─── 5) export ──────────────────────────────────────────────────
    if args.export {
        if let Some(path) = app.export(&cfg.out_dir) {
            println!("{}", path.display());
        } else {
            info!(file = EXPORT_FILE_NAME, "export skipped");
        }
    }

    info!("all done");
    Ok(())
}
