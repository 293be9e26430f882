//! Digest engine: fetching, decoding, persistence and the sequential run driver.
mod config;
mod decode;
mod engine;
mod fetch;
mod persist;
mod types;

pub use config::{ConfigError, EngineConfig, ItemFailurePolicy};
pub use decode::{decode_html, DecodedHtml};
pub use engine::{DigestRunner, ItemError, ProgressSink, RunError};
pub use fetch::{FetchSettings, Fetcher, ReqwestFetcher};
pub use persist::{ensure_output_dir, AtomicFileSink, PersistError};
pub use types::{DigestEvent, FailureKind, FetchError, FetchMetadata, FetchOutput, RunSummary};
