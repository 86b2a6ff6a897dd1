pub mod data_uri;
pub mod error;
pub mod gemini;
pub mod prompt;
