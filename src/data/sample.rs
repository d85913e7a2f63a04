//! Embedded sample content.
//!
//! The compiled-in counterpart of an on-disk `data.json`: `pagoda init`
//! writes it into new sites, and tests render against it. One renderer,
//! two producers of the same `SiteData` value.

use super::model::SiteData;

/// The reference site data as shipped with `pagoda init`.
pub const SAMPLE_JSON: &str = include_str!("sample.json");

/// Parse the embedded sample into a `SiteData` value.
///
/// The embedded JSON is validated by tests, so a parse failure here is a
/// build defect rather than a runtime condition.
pub fn sample() -> SiteData {
    serde_json::from_str(SAMPLE_JSON).expect("embedded sample.json is valid")
}
