//! Payload loading from files and URLs.

#[cfg(feature = "download")]
mod fetch;
mod source;

pub use source::{load_payloads, Source};
