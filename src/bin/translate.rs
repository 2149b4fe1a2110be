use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ourbooks::{
    GeminiClient, KeyPool, PageDocument, PageTranslator, ServiceArgs, SnapshotStore, Taxonomy,
    TranslationOutcome, TRANSLATION_FAILED_NOTICE,
};

#[derive(Parser, Debug)]
#[command(
    name = "ourbooks-translate",
    about = "Translate a chapter page to Urdu, reusing the persistent cache"
)]
struct TranslateCli {
    /// Chapter HTML file to translate (reads stdin when omitted)
    page: Option<PathBuf>,

    /// Cache key for the page; defaults to the file path
    #[arg(long)]
    route: Option<String>,

    /// Write translated markup here instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    service: ServiceArgs,
}

fn main() -> Result<()> {
    let cli = TranslateCli::parse();
    init_tracing(cli.service.debug);

    let config = cli.service.build_config();
    if config.api_keys().is_empty() {
        bail!("no API keys configured; pass --api-keys or set OURBOOKS_API_KEYS");
    }

    let markup = match &cli.page {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read page markup from stdin")?;
            buf
        }
    };

    let route = cli
        .route
        .clone()
        .or_else(|| {
            cli.page
                .as_ref()
                .map(|path| path.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "stdin".to_string());

    if let Some(shelf) = Taxonomy::builtin().shelf_for_route(&route) {
        tracing::info!(
            subject = shelf.subject.name(),
            level = shelf.level.numeral(),
            route = %route,
            "translating shelf page"
        );
    }

    let pool = KeyPool::new(config.api_keys().to_vec(), config.max_requests_per_key());
    let mut client = GeminiClient::new(config.translation_model(), pool)?
        .with_request_logging(config.log_api_requests());
    let store = SnapshotStore::open(&cli.service.data_dir).with_context(|| {
        format!(
            "failed to open data directory {}",
            cli.service.data_dir.display()
        )
    })?;

    let mut translator = PageTranslator::with_store(store);
    let mut doc = PageDocument::new(route, markup);

    match translator.translate_with(&mut doc, &mut client) {
        Ok(TranslationOutcome::Cached) => tracing::info!("translation loaded from cache"),
        Ok(TranslationOutcome::Remote) => tracing::info!("translation completed"),
        Err(err) => {
            tracing::error!(error = %err, "translation failed");
            eprintln!("{TRANSLATION_FAILED_NOTICE}");
            std::process::exit(1);
        }
    }

    match &cli.output {
        Some(path) => fs::write(path, doc.markup())
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => println!("{}", doc.markup()),
    }
    Ok(())
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
