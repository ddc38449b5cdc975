//! Pattern extraction layer
//!
//! Each field has one pattern family applied to the whole document text.
//! Nothing is filtered here: every match becomes a candidate, in order of
//! appearance, and the resolvers decide what survives.

use regex::{Captures, Regex};

/// Identifier label, non-digit filler, then 2-3-5 digit groups
pub const IDENTIFIER: &str =
    r"(?i)API\s*(Number|No|num|#)[:\s\w-]*?[^\d]*(\d{2})[\s_-]*(\d{3})[\s_-]*(\d{5})";

/// Well or facility name label followed by the rest of the line
pub const WELL_NAME: &str = r"(?i)(Well|Facility)\s*(Name|or Facility Name)\s*[:\s]*([^\n]+)";

/// Operator label followed by the rest of the line
pub const OPERATOR: &str = r"(?i)OPERATOR\s*[:\s]*([^\n]+)";

/// County label followed by text up to a comma or line end
pub const COUNTY: &str = r"(?i)COUNTY(?:/STATE)?\s*[:\s]*([^\n,]+)";

/// Text after the comma of a `County/State` line
pub const STATE: &str = r"(?i)COUNTY(?:/STATE)?\s*[:\s]*[^\n,]+,\s*([^\n]+)";

/// Labeled longitude in degree-minute-second form
pub const LONGITUDE: &str = r"(?i)Longitude:\s*(\d+\s*°\s*\d+\s*'\s*[\d.]+\s*)\s*([EW])";

/// Bare longitude, used when no labeled longitude exists
pub const LONGITUDE_FALLBACK: &str = r#"(?i)(\d{1,3}°\s*\d{2}'\s*[\d.]+\s*"?[EW])"#;

/// Labeled latitude in degree-minute-second form
pub const LATITUDE: &str =
    r"(?i)(?:Site\s+Centre\s+)?Latitude:\s*(\d+\s*°\s*\d+\s*'\s*[\d.]+\s*)\s*([NS])";

/// Bare latitude, used when no labeled latitude exists
pub const LATITUDE_FALLBACK: &str = r#"(?i)(\d{1,3}°\s*\d{1,2}'\s*[\d.]+\s*"?[NS])"#;

/// One raw match: the capture groups in order
///
/// Groups that did not participate in the match are empty strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    groups: Vec<String>,
}

impl Candidate {
    /// Build a candidate from explicit groups
    pub fn new<I, S>(groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            groups: groups.into_iter().map(Into::into).collect(),
        }
    }

    fn from_captures(caps: &Captures<'_>) -> Self {
        let groups = (1..caps.len())
            .map(|i| caps.get(i).map_or("", |m| m.as_str()).to_string())
            .collect();
        Self { groups }
    }

    /// Capture group `idx` (0-based over the capture groups)
    pub fn group(&self, idx: usize) -> &str {
        self.groups.get(idx).map(String::as_str).unwrap_or("")
    }

    /// The last capture group; the value-bearing group for single-value fields
    pub fn last(&self) -> &str {
        self.groups.last().map(String::as_str).unwrap_or("")
    }

    /// All capture groups
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    /// Groups joined with a space and trimmed
    pub fn joined(&self) -> String {
        self.groups.join(" ").trim().to_string()
    }
}

/// A primary pattern and an optional fallback
///
/// The fallback runs only when the primary yields nothing on the same text.
#[derive(Debug, Clone)]
pub struct PatternFamily {
    primary: Regex,
    fallback: Option<Regex>,
}

impl PatternFamily {
    /// Compile a family with only a primary pattern
    pub fn new(primary: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            primary: Regex::new(primary)?,
            fallback: None,
        })
    }

    /// Add a fallback pattern
    pub fn with_fallback(mut self, fallback: &str) -> Result<Self, regex::Error> {
        self.fallback = Some(Regex::new(fallback)?);
        Ok(self)
    }

    /// Whether the primary pattern matches anywhere in `text`
    pub fn is_match(&self, text: &str) -> bool {
        self.primary.is_match(text)
    }

    /// Every match in order of appearance
    pub fn candidates(&self, text: &str) -> Vec<Candidate> {
        let primary = Self::apply(&self.primary, text);
        match &self.fallback {
            Some(fallback) if primary.is_empty() => Self::apply(fallback, text),
            _ => primary,
        }
    }

    fn apply(regex: &Regex, text: &str) -> Vec<Candidate> {
        regex
            .captures_iter(text)
            .map(|caps| Candidate::from_captures(&caps))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_groups() {
        let family = PatternFamily::new(IDENTIFIER).unwrap();
        let found = family.candidates("Well File No.\nAPI Number: 12-345-67890\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].groups()[1..], ["12", "345", "67890"]);
    }

    #[test]
    fn test_identifier_tolerates_wrapped_lines_and_stray_separators() {
        let family = PatternFamily::new(IDENTIFIER).unwrap();
        let found = family.candidates("api #\n  33 _053\n-02102");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].groups()[1..], ["33", "053", "02102"]);
    }

    #[test]
    fn test_candidates_in_text_order() {
        let family = PatternFamily::new(OPERATOR).unwrap();
        let found = family.candidates("Operator: First Co\nsomething\nOPERATOR Second Co\n");
        let values: Vec<&str> = found.iter().map(|c| c.last()).collect();
        assert_eq!(values, ["First Co", "Second Co"]);
    }

    #[test]
    fn test_fallback_only_when_primary_empty() {
        let family = PatternFamily::new(LATITUDE)
            .unwrap()
            .with_fallback(LATITUDE_FALLBACK)
            .unwrap();

        let labeled = family.candidates("Latitude: 48° 3' 22.45 N\nother 47° 59' 1.0 N");
        assert_eq!(labeled.len(), 1);
        assert_eq!(labeled[0].group(1), "N");

        let bare = family.candidates("Surface 47° 59' 1.0\"N");
        assert_eq!(bare.len(), 1);
        assert_eq!(bare[0].joined(), "47° 59' 1.0\"N");
    }

    #[test]
    fn test_county_stops_at_comma() {
        let county = PatternFamily::new(COUNTY).unwrap();
        let state = PatternFamily::new(STATE).unwrap();
        let text = "County/State: McKenzie County, North Dakota\n";
        assert_eq!(county.candidates(text)[0].last(), "McKenzie County");
        assert_eq!(state.candidates(text)[0].last(), "North Dakota");
    }

    #[test]
    fn test_joined_trims() {
        let candidate = Candidate::new(["48° 3' 22.45 ", "N"]);
        assert_eq!(candidate.joined(), "48° 3' 22.45  N");
        assert_eq!(Candidate::new(["", "x"]).joined(), "x");
    }

    #[test]
    fn test_missing_group_reads_empty() {
        let candidate = Candidate::new(["only"]);
        assert_eq!(candidate.group(3), "");
        assert_eq!(Candidate::new(Vec::<String>::new()).last(), "");
    }
}
