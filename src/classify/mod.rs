//! # Remote Classification Service
//!
//! Client and decoder for the third-party bibliographic classification API.
//!
//! The API is treated as an opaque remote dependency: one GET per call,
//! structured XML back. `client` fetches raw bytes, `decode` turns them into
//! typed records.

pub mod client;
pub mod decode;
pub mod errors;

pub use client::{ClassifyClient, CLASSIFY_API_BASE};
pub use decode::{decode_classified_work, decode_search_results, ClassifiedWork, SearchResult};
pub use errors::ClassifyError;
