//! Decoder for classification API responses.
//!
//! The API returns XML with the interesting fields carried as attributes.
//! Two shapes matter here: a summary search (repeated `work` elements under a
//! `works` container) and a single-work detail record (one `work` element
//! plus a `recommendations > ddc > mostPopular` classification).
//!
//! A well-formed document with zero matching elements decodes to an empty
//! list or a zero-valued record; only malformed XML is an error.

use serde::{Deserialize, Serialize};

use super::errors::ClassifyResult;

/// One row of a summary search response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub author: String,
    /// Publication year (`hyr` attribute)
    pub year: String,
    /// Work identifier (`owi` attribute)
    pub owi: String,
}

/// A single work with its most popular classification code
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassifiedWork {
    pub title: String,
    pub author: String,
    pub owi: String,
    /// Most popular DDC code (`sfa` attribute)
    pub classification: String,
}

// ==================
// Wire shapes
// ==================

#[derive(Debug, Default, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    works: WorksElement,
}

#[derive(Debug, Default, Deserialize)]
struct WorksElement {
    #[serde(default, rename = "work")]
    work: Vec<WorkElement>,
}

#[derive(Debug, Default, Deserialize)]
struct WorkElement {
    #[serde(default, rename = "@title")]
    title: String,
    #[serde(default, rename = "@author")]
    author: String,
    #[serde(default, rename = "@hyr")]
    hyr: String,
    #[serde(default, rename = "@owi")]
    owi: String,
}

#[derive(Debug, Default, Deserialize)]
struct WorkEnvelope {
    #[serde(default)]
    work: Option<WorkElement>,
    #[serde(default)]
    recommendations: Option<RecommendationsElement>,
}

#[derive(Debug, Default, Deserialize)]
struct RecommendationsElement {
    #[serde(default)]
    ddc: Option<DdcElement>,
}

#[derive(Debug, Default, Deserialize)]
struct DdcElement {
    // The endpoint may repeat mostPopular; the first one wins.
    #[serde(default, rename = "mostPopular")]
    most_popular: Vec<MostPopularElement>,
}

#[derive(Debug, Default, Deserialize)]
struct MostPopularElement {
    #[serde(default, rename = "@sfa")]
    sfa: String,
}

impl From<WorkElement> for SearchResult {
    fn from(work: WorkElement) -> Self {
        Self {
            title: work.title,
            author: work.author,
            year: work.hyr,
            owi: work.owi,
        }
    }
}

// ==================
// Decoding
// ==================

/// Decode a summary search response into its result rows.
pub fn decode_search_results(bytes: &[u8]) -> ClassifyResult<Vec<SearchResult>> {
    let envelope: SearchEnvelope = quick_xml::de::from_reader(bytes)?;

    Ok(envelope
        .works
        .work
        .into_iter()
        .map(SearchResult::from)
        .collect())
}

/// Decode a single-work detail response.
pub fn decode_classified_work(bytes: &[u8]) -> ClassifyResult<ClassifiedWork> {
    let envelope: WorkEnvelope = quick_xml::de::from_reader(bytes)?;

    let work = envelope.work.unwrap_or_default();
    let classification = envelope
        .recommendations
        .and_then(|r| r.ddc)
        .and_then(|d| d.most_popular.into_iter().next())
        .map(|m| m.sfa)
        .unwrap_or_default();

    Ok(ClassifiedWork {
        title: work.title,
        author: work.author,
        owi: work.owi,
        classification,
    })
}
