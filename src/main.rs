use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use phonelist::config::Config;
use phonelist::detail::DetailView;
use phonelist::fetch::{HttpSource, RecordSource};
use phonelist::logging::init_tracing;
use phonelist::model::RecordId;
use phonelist::session::{ListSession, ListView};
use phonelist::shared::AppContext;

/// Fetch the phones list once, search it, and optionally open a record.
#[derive(Debug, Parser)]
#[command(name = "phonelist", version)]
struct Args {
    /// Config file (default: ~/.config/phonelist/config.toml).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the list endpoint.
    #[arg(long)]
    endpoint: Option<String>,

    /// Case-insensitive phone number search.
    #[arg(long, short)]
    query: Option<String>,

    /// Record id to open in the detail view.
    #[arg(long)]
    select: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    if let Some(endpoint) = args.endpoint {
        config.source.endpoint = endpoint;
        config.validate().context("validating --endpoint")?;
    }

    let source: Arc<dyn RecordSource> =
        Arc::new(HttpSource::new(&config.source).context("building HTTP client")?);
    let ctx = AppContext::new();
    let mut session = ListSession::new(source, ctx.clone());

    session.on_activate();
    let fetched = session.next_update().await;

    if let Some(query) = &args.query {
        session.on_query_change(query);
    }

    print_list(&session.view());

    if let Some(Err(error)) = fetched {
        anyhow::bail!(error);
    }

    if let Some(raw_id) = &args.select {
        session
            .on_item_select(&RecordId::parse(raw_id))
            .context("selecting record")?;
        let detail = DetailView::from_context(&ctx)?;
        println!();
        for line in detail.lines() {
            println!("{}", line);
        }
    }

    Ok(())
}

fn print_list(view: &ListView) {
    if let Some(message) = view.error_message {
        println!("{}", message);
    }
    for record in &view.displayed {
        println!("{} - {}", record.name, record.phone);
    }
    println!("Records: {}", view.result_count);
}
