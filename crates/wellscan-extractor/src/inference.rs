//! Cross-field inference
//!
//! Rules that derive or override one field from another already-resolved
//! field. Every rule is a pure function of its inputs; the registry runs the
//! resolvers that call them in dependency order (well name, county, state).

use crate::config::{CountyState, KeywordOverride};

/// County forced by a token in the resolved well name
///
/// Tokens are separated by single spaces and compared case-insensitively; the first
/// override whose keyword appears wins.
pub fn county_from_well_name(
    well_name: Option<&str>,
    overrides: &[KeywordOverride],
) -> Option<String> {
    let well_name = well_name?;
    overrides
        .iter()
        .find(|o| {
            well_name
                .split(' ')
                .any(|token| token.eq_ignore_ascii_case(&o.keyword))
        })
        .map(|o| o.canonical.clone())
}

/// State pinned by the resolved county
///
/// Only exact matches against the table count; any other county leaves the
/// state to direct pattern matching.
pub fn state_from_county(county: Option<&str>, table: &[CountyState]) -> Option<String> {
    let county = county?;
    table
        .iter()
        .find(|entry| entry.county == county)
        .map(|entry| entry.state.clone())
}
