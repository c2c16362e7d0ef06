use std::io::Read;

use anyhow::Result;
use ner_probe::client::PredictClient;
use ner_probe::config::Config;
use ner_probe::output;
use ner_probe::request::{self, RequestInput};
use ner_probe::ui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_cli()?;
    let client = PredictClient::new(config.endpoint.clone());

    if config.ping {
        println!("{}", client.ping()?);
        return Ok(());
    }

    if config.interactive {
        return ui::run_tui(&config, &client);
    }

    // One-shot mode: positional text, or stdin when absent.
    let text = match &config.text {
        Some(t) => t.clone(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let input = RequestInput {
        text,
        extra_sentences: config.extra.clone(),
        raw_tokens: config.tokens.clone(),
        domain: config.domain.clone(),
        multi_mode: config.multi,
        multi_flag: false,
    };
    let Some(built) = request::build_request(&input) else {
        eprintln!("nothing to send: text is empty");
        std::process::exit(2);
    };
    if built.tokens_synthesized {
        tracing::debug!(
            count = built.payload.tokens.len(),
            "tokens synthesized from text"
        );
    }

    let outcome = client.predict(&built.payload);
    print!("{}", output::render(&outcome, config.format)?);
    Ok(())
}
