pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod report;
pub mod response;
pub mod scoring;

pub use error::ScoreError;
pub use response::{RawResponse, Response};
