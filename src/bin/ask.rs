use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ourbooks::{
    GeminiClient, KeyPool, ServiceArgs, SnapshotStore, StudyAssistant, Taxonomy, RETRY_NOTICE,
};

#[derive(Parser, Debug)]
#[command(
    name = "ourbooks-ask",
    about = "Ask the Our Books study assistant a question"
)]
struct AskCli {
    /// Question to ask
    question: String,

    #[command(flatten)]
    service: ServiceArgs,
}

fn main() -> Result<()> {
    let cli = AskCli::parse();
    init_tracing(cli.service.debug);

    let config = cli.service.build_config();
    if config.api_keys().is_empty() {
        bail!("no API keys configured; pass --api-keys or set OURBOOKS_API_KEYS");
    }

    let pool = KeyPool::new(config.api_keys().to_vec(), config.max_requests_per_key());
    let client = GeminiClient::new(config.model(), pool)?
        .with_request_logging(config.log_api_requests());
    let store = SnapshotStore::open(&cli.service.data_dir).with_context(|| {
        format!(
            "failed to open data directory {}",
            cli.service.data_dir.display()
        )
    })?;

    let mut assistant = StudyAssistant::with_store(Taxonomy::builtin(), client, &config, store);
    match assistant.ask(&cli.question) {
        Ok(answer) => {
            println!("{answer}");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %err, "failed to answer question");
            eprintln!("{RETRY_NOTICE}");
            std::process::exit(1);
        }
    }
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
