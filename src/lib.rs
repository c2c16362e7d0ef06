pub mod cli;
pub mod client;
pub mod config;
pub mod highlight;
pub mod normalize;
pub mod output;
pub mod request;
pub mod tokenizer;
pub mod types;
pub mod ui;

pub use highlight::{Segment, reconcile};
pub use request::{BuiltRequest, RequestInput, build_request};
pub use types::{EntitySpan, PredictOutcome, PredictRequest, PredictResult, RawResponse};
