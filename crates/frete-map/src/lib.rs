//! Quote-payload analysis.
//!
//! This crate implements the document path of the schema-inference
//! engine: given a deserialized quoting-service response of unknown
//! shape, it discovers where the options array lives, classifies the
//! record fields into semantic roles, suggests a persisted field
//! mapping, and builds normalized previews.
//!
//! # Features
//!
//! - **Structure discovery**: bounded recursive enumeration of
//!   array-of-records locations
//! - **Field-role detection**: ordered two-tier regex rules with
//!   confidence scores
//! - **Candidate scoring**: ranks arrays by detected-role relevance
//! - **Mapping + preview**: builds a [`FieldMapping`] and applies it (or
//!   an operator override of it) to concrete documents
//!
//! # Example
//!
//! ```
//! use frete_map::{analyze_document, parse_document};
//!
//! let document = parse_document(
//!     r#"{"options": [{"name": "PAC", "price": 25.9, "delivery_days": 5}]}"#,
//! )?;
//! let analysis = analyze_document(&document, None);
//! let mapping = analysis.mapping.expect("candidate found");
//! assert_eq!(mapping.options_path, "options");
//! assert_eq!(mapping.price.as_deref(), Some("price"));
//! # Ok::<(), frete_map::DocumentError>(())
//! ```

mod builder;
mod detect;
mod discover;
mod document;
mod error;
mod extract;
mod patterns;
mod score;
mod utils;

// === Error Types ===
pub use error::DocumentError;

// === Document Parsing ===
pub use document::{from_json, parse_document};

// === Discovery & Detection ===
pub use detect::detect_role;
pub use discover::{ARRAY_RECURSE_LIMIT, MAX_DISCOVERY_DEPTH, discover_candidates};
pub use patterns::{EXACT_MATCH_CONFIDENCE, PARTIAL_MATCH_CONFIDENCE};

// === Scoring ===
pub use score::{
    CARRIER_ROLE_BONUS, MULTI_RECORD_BONUS, PRICE_ROLE_BONUS, ROLE_SCORE_WEIGHT, rank_candidates,
    score_candidate,
};

// === Mapping & Preview ===
pub use builder::build_field_mapping;
pub use extract::{MAX_SAMPLE_OPTIONS, PREVIEW_LIMIT, build_preview, resolve_path};

use frete_model::{ArrayCandidate, DocumentValue, FieldMapping, FieldRole, NormalizedOption};

/// Everything one analysis pass produces.
///
/// `mapping` is `None` when the document holds no object-shaped array —
/// a non-fatal condition: the candidate list (empty) and preview (empty)
/// still let the operator inspect what was found.
#[derive(Debug, Clone)]
pub struct DocumentAnalysis {
    /// All discovered candidates, best first.
    pub candidates: Vec<ArrayCandidate>,
    /// The winning candidate, if any.
    pub best: Option<ArrayCandidate>,
    /// Suggested mapping derived from the best candidate.
    pub mapping: Option<FieldMapping>,
    /// Preview built by applying the suggested mapping to the document.
    pub preview: Vec<NormalizedOption>,
}

/// Analyzes a document: discovery, ranking, mapping suggestion, preview.
///
/// `sample_cap` bounds the preview length; defaults to [`PREVIEW_LIMIT`]
/// and is clamped to [`MAX_SAMPLE_OPTIONS`]. Deterministic: the same
/// document yields the same candidates, mapping, and preview every time.
pub fn analyze_document(document: &DocumentValue, sample_cap: Option<usize>) -> DocumentAnalysis {
    let limit = sample_cap.unwrap_or(PREVIEW_LIMIT).min(MAX_SAMPLE_OPTIONS);

    let candidates = rank_candidates(discover_candidates(document));
    let best = candidates.first().cloned();
    let mapping = best.as_ref().map(build_field_mapping);
    let preview = mapping
        .as_ref()
        .map(|mapping| build_preview(document, mapping, limit))
        .unwrap_or_default();

    DocumentAnalysis {
        candidates,
        best,
        mapping,
        preview,
    }
}

/// Returns a copy of `mapping` with one role slot rebound to `key`.
///
/// Previews after an override are recomputed from scratch against the
/// same sample document via [`build_preview`]; nothing is patched in
/// place.
pub fn apply_override(mapping: &FieldMapping, role: FieldRole, key: Option<String>) -> FieldMapping {
    let mut edited = mapping.clone();
    edited.set_slot(role, key);
    edited
}
