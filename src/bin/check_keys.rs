use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use ourbooks::{
    GeminiClient, GenerationParams, KeyPool, ServiceArgs, TextGenerator, FALLBACK_ANSWER,
};

#[derive(Parser, Debug)]
#[command(
    name = "ourbooks-check-keys",
    about = "Probe each configured API key against the generation service"
)]
struct CheckKeysCli {
    #[command(flatten)]
    service: ServiceArgs,
}

fn main() -> Result<()> {
    let cli = CheckKeysCli::parse();
    init_tracing(cli.service.debug);

    let config = cli.service.build_config();
    if config.api_keys().is_empty() {
        bail!("no API keys configured; pass --api-keys or set OURBOOKS_API_KEYS");
    }

    let params = GenerationParams {
        temperature: 0.3,
        top_k: 40,
        top_p: 0.95,
        max_output_tokens: 100,
    };

    let mut working = 0usize;
    for (index, key) in config.api_keys().iter().enumerate() {
        let label = format!("key {} (...{})", index + 1, key_suffix(key));
        // One-request pool so a single probe charges the key exactly once.
        let pool = KeyPool::new(vec![key.clone()], 1);
        let mut client = GeminiClient::new(config.model(), pool)?
            .with_request_logging(config.log_api_requests());
        match client.generate("Reply with a single word: ready.", &params) {
            Ok(answer) if answer != FALLBACK_ANSWER => {
                println!("{label}: ok");
                working += 1;
            }
            Ok(_) => println!("{label}: empty response"),
            Err(err) => println!("{label}: {err}"),
        }
    }

    println!("{working}/{} keys working", config.api_keys().len());
    if working == 0 {
        bail!("no working API keys");
    }
    Ok(())
}

fn key_suffix(key: &str) -> &str {
    let start = key
        .char_indices()
        .rev()
        .nth(3)
        .map(|(index, _)| index)
        .unwrap_or(0);
    &key[start..]
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
