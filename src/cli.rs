use crate::output::OutputFormat;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "ner-probe")]
#[command(
    about = "Demo client for a NER service: submit text, view the returned \
             entity annotations as JSON, a table, or highlighted text."
)]
pub struct Cli {
    /// Text to annotate. Read from stdin when omitted in one-shot mode.
    pub text: Option<String>,

    /// If set, opens the interactive TUI form.
    #[arg(short = 'i', long = "interactive")]
    pub interactive: bool,

    /// Prediction endpoint to POST to.
    #[arg(
        short = 'e',
        long = "endpoint",
        default_value = "http://127.0.0.1:8000/predict"
    )]
    pub endpoint: String,

    /// Domain tag sent with the request.
    #[arg(short = 'd', long = "domain", default_value = "General")]
    pub domain: String,

    /// Extra sentences appended to the text in multi-sentence mode.
    #[arg(short = 'x', long = "extra", default_value = "")]
    pub extra: String,

    /// Enable multi-sentence mode.
    #[arg(short = 'm', long = "multi")]
    pub multi: bool,

    /// Token list as a JSON array of strings; invalid input silently
    /// falls back to whitespace tokenization.
    #[arg(short = 't', long = "tokens", default_value = "")]
    pub tokens: String,

    /// Output format for the result.
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Highlight)]
    pub format: OutputFormat,

    /// Check the service's /health route and exit.
    #[arg(long = "ping")]
    pub ping: bool,
}
