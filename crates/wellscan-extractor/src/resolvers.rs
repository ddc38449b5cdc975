//! Field disambiguators
//!
//! One strategy object per field. Each pairs the field's pattern family with
//! the policy that reduces its raw candidates to one canonical value, and
//! declares which already-resolved fields that policy reads.

use crate::config::{CountyState, ExtractorConfig, KeywordOverride};
use crate::inference;
use crate::patterns::{self, Candidate, PatternFamily};
use regex::Regex;
use std::collections::BTreeMap;
use wellscan_domain::Field;

/// Values resolved so far in one extraction pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedFields {
    values: BTreeMap<Field, Option<String>>,
}

impl ResolvedFields {
    /// Resolved value of `field`; `None` when unresolved or not yet run
    pub fn get(&self, field: Field) -> Option<&str> {
        self.values.get(&field).and_then(|v| v.as_deref())
    }

    /// Record the outcome of a resolver
    pub fn insert(&mut self, field: Field, value: Option<String>) {
        self.values.insert(field, value);
    }

    /// Iterate in field order
    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<&str>)> {
        self.values.iter().map(|(f, v)| (*f, v.as_deref()))
    }
}

/// A per-field extraction and resolution strategy
pub trait FieldResolver: Send + Sync {
    /// Field this resolver produces
    fn field(&self) -> Field;

    /// Fields that must be resolved before this one
    fn depends_on(&self) -> &[Field] {
        &[]
    }

    /// Raw candidates from the document text, in order of appearance
    fn candidates(&self, text: &str) -> Vec<Candidate>;

    /// Reduce candidates to one value, reading dependencies from `resolved`
    fn resolve(&self, candidates: &[Candidate], resolved: &ResolvedFields) -> Option<String>;
}

/// First element with the greatest key
///
/// `Iterator::max_by_key` keeps the last of equal maxima; ranking here keeps
/// the earliest candidate on ties.
fn first_max_by_key<T, K, F>(items: impl IntoIterator<Item = T>, mut key: F) -> Option<T>
where
    K: Ord,
    F: FnMut(&T) -> K,
{
    let mut best: Option<(K, T)> = None;
    for item in items {
        let k = key(&item);
        let replace = match &best {
            Some((best_key, _)) => k > *best_key,
            None => true,
        };
        if replace {
            best = Some((k, item));
        }
    }
    best.map(|(_, item)| item)
}

fn has_digit(s: &str) -> bool {
    s.chars().any(char::is_numeric)
}

/// Identifier: all three digit groups, joined with `-`, last occurrence wins
#[derive(Debug, Clone)]
pub struct IdentifierResolver {
    pattern: PatternFamily,
}

impl IdentifierResolver {
    /// Compile the identifier pattern
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: PatternFamily::new(patterns::IDENTIFIER)?,
        })
    }
}

impl FieldResolver for IdentifierResolver {
    fn field(&self) -> Field {
        Field::Identifier
    }

    fn candidates(&self, text: &str) -> Vec<Candidate> {
        self.pattern.candidates(text)
    }

    fn resolve(&self, candidates: &[Candidate], _resolved: &ResolvedFields) -> Option<String> {
        candidates
            .iter()
            .filter_map(|c| {
                let digits = [c.group(1), c.group(2), c.group(3)];
                if digits.iter().any(|g| g.is_empty()) {
                    return None;
                }
                Some(digits.join("-"))
            })
            .last()
    }
}

/// Well name: drop section labels, keep the numbered part, prefer hyphenated
#[derive(Debug, Clone)]
pub struct WellNameResolver {
    pattern: PatternFamily,
    separators: Regex,
    rejects: Vec<String>,
}

impl WellNameResolver {
    /// Build from the configured section-label rejects
    pub fn new(config: &ExtractorConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: PatternFamily::new(patterns::WELL_NAME)?,
            separators: Regex::new(" - |, ")?,
            rejects: config
                .well_name_rejects
                .iter()
                .map(|r| r.to_lowercase())
                .collect(),
        })
    }

    fn is_label(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        lower.trim().starts_with("and")
            || name.contains(':')
            || self.rejects.iter().any(|r| lower.contains(r.as_str()))
    }

    fn numbered_part(&self, name: &str) -> Option<String> {
        let line = name.split('\n').next().unwrap_or("");
        self.separators
            .split(line)
            .find(|part| has_digit(part))
            .map(|part| part.trim().to_string())
    }
}

impl FieldResolver for WellNameResolver {
    fn field(&self) -> Field {
        Field::WellName
    }

    fn candidates(&self, text: &str) -> Vec<Candidate> {
        self.pattern.candidates(text)
    }

    fn resolve(&self, candidates: &[Candidate], _resolved: &ResolvedFields) -> Option<String> {
        let refined: Vec<String> = candidates
            .iter()
            .map(|c| c.group(2))
            .filter(|name| !self.is_label(name))
            .filter_map(|name| self.numbered_part(name))
            .collect();

        first_max_by_key(refined, |name| (name.contains('-'), name.chars().count()))
    }
}

/// Operator: drop boilerplate and dated lines, apply overrides, then rank
#[derive(Debug, Clone)]
pub struct OperatorResolver {
    pattern: PatternFamily,
    rejects: Vec<String>,
    corporate_keywords: Vec<String>,
    overrides: Vec<KeywordOverride>,
}

impl OperatorResolver {
    /// Build from the configured rejects, keywords and overrides
    pub fn new(config: &ExtractorConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: PatternFamily::new(patterns::OPERATOR)?,
            rejects: config.operator_rejects.clone(),
            corporate_keywords: config
                .corporate_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect(),
            overrides: config.operator_overrides.clone(),
        })
    }

    fn is_corporate(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.corporate_keywords.iter().any(|k| lower.contains(k.as_str()))
    }

    /// Canonical name from the last candidate carrying an override token
    fn overridden(&self, names: &[&str]) -> Option<String> {
        let mut best = None;
        for name in names {
            let tokens: Vec<&str> = name.split(' ').collect();
            if let Some(o) = self
                .overrides
                .iter()
                .find(|o| tokens.contains(&o.keyword.as_str()))
            {
                best = Some(o.canonical.clone());
            }
        }
        best
    }
}

impl FieldResolver for OperatorResolver {
    fn field(&self) -> Field {
        Field::Operator
    }

    fn candidates(&self, text: &str) -> Vec<Candidate> {
        self.pattern.candidates(text)
    }

    fn resolve(&self, candidates: &[Candidate], _resolved: &ResolvedFields) -> Option<String> {
        let names: Vec<&str> = candidates
            .iter()
            .map(Candidate::last)
            .filter(|name| !self.rejects.iter().any(|r| name.contains(r.as_str())))
            .filter(|name| {
                !name
                    .split_whitespace()
                    .any(|token| token.chars().all(char::is_numeric))
            })
            .collect();

        if let Some(canonical) = self.overridden(&names) {
            return Some(canonical);
        }

        first_max_by_key(names, |name| (self.is_corporate(name), name.chars().count()))
            .map(str::to_string)
    }
}

/// County: priority keywords first, then the first plausible line, and the
/// well name can override both
#[derive(Debug, Clone)]
pub struct CountyResolver {
    pattern: PatternFamily,
    priority: Vec<KeywordOverride>,
    well_name_overrides: Vec<KeywordOverride>,
}

impl CountyResolver {
    /// Build from the configured priority keywords and well-name overrides
    pub fn new(config: &ExtractorConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: PatternFamily::new(patterns::COUNTY)?,
            priority: config
                .county_priority
                .iter()
                .map(|p| KeywordOverride::new(p.keyword.to_lowercase(), p.canonical.clone()))
                .collect(),
            well_name_overrides: config.well_name_county_overrides.clone(),
        })
    }
}

impl FieldResolver for CountyResolver {
    fn field(&self) -> Field {
        Field::County
    }

    fn depends_on(&self) -> &[Field] {
        &[Field::WellName]
    }

    fn candidates(&self, text: &str) -> Vec<Candidate> {
        self.pattern.candidates(text)
    }

    fn resolve(&self, candidates: &[Candidate], resolved: &ResolvedFields) -> Option<String> {
        if let Some(county) = inference::county_from_well_name(
            resolved.get(Field::WellName),
            &self.well_name_overrides,
        ) {
            return Some(county);
        }

        let priority = candidates.iter().find_map(|c| {
            let lower = c.last().to_lowercase();
            self.priority
                .iter()
                .find(|p| lower.contains(p.keyword.as_str()))
                .map(|p| p.canonical.clone())
        });

        priority.or_else(|| {
            candidates
                .iter()
                .map(Candidate::last)
                .find(|name| name.to_lowercase().contains("county") || has_digit(name))
                .map(str::to_string)
        })
    }
}

/// State: pinned by the resolved county, else the last labeled match
#[derive(Debug, Clone)]
pub struct StateResolver {
    pattern: PatternFamily,
    table: Vec<CountyState>,
}

impl StateResolver {
    /// Build from the configured county-to-state table
    pub fn new(config: &ExtractorConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: PatternFamily::new(patterns::STATE)?,
            table: config.state_by_county.clone(),
        })
    }
}

impl FieldResolver for StateResolver {
    fn field(&self) -> Field {
        Field::State
    }

    fn depends_on(&self) -> &[Field] {
        &[Field::County]
    }

    fn candidates(&self, text: &str) -> Vec<Candidate> {
        self.pattern.candidates(text)
    }

    fn resolve(&self, candidates: &[Candidate], resolved: &ResolvedFields) -> Option<String> {
        inference::state_from_county(resolved.get(Field::County), &self.table)
            .or_else(|| candidates.last().map(Candidate::joined))
    }
}

/// Generic policy: join each match's groups with a space, last one wins
///
/// Coordinates use this with a fallback pattern family. Taking the last
/// restatement in the document is a heuristic, not a documented rule.
#[derive(Debug, Clone)]
pub struct LastMatchResolver {
    field: Field,
    pattern: PatternFamily,
}

impl LastMatchResolver {
    /// Resolver for `field` over an arbitrary pattern family
    pub fn new(field: Field, pattern: PatternFamily) -> Self {
        Self { field, pattern }
    }

    /// Labeled longitude with the bare coordinate fallback
    pub fn longitude() -> Result<Self, regex::Error> {
        let pattern =
            PatternFamily::new(patterns::LONGITUDE)?.with_fallback(patterns::LONGITUDE_FALLBACK)?;
        Ok(Self::new(Field::Longitude, pattern))
    }

    /// Labeled latitude with the bare coordinate fallback
    pub fn latitude() -> Result<Self, regex::Error> {
        let pattern =
            PatternFamily::new(patterns::LATITUDE)?.with_fallback(patterns::LATITUDE_FALLBACK)?;
        Ok(Self::new(Field::Latitude, pattern))
    }
}

impl FieldResolver for LastMatchResolver {
    fn field(&self) -> Field {
        self.field
    }

    fn candidates(&self, text: &str) -> Vec<Candidate> {
        self.pattern.candidates(text)
    }

    fn resolve(&self, candidates: &[Candidate], _resolved: &ResolvedFields) -> Option<String> {
        candidates.last().map(Candidate::joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(resolver: &dyn FieldResolver, text: &str) -> Option<String> {
        let candidates = resolver.candidates(text);
        resolver.resolve(&candidates, &ResolvedFields::default())
    }

    fn operator_of(names: &[&str]) -> Option<String> {
        let resolver = OperatorResolver::new(&ExtractorConfig::default()).unwrap();
        let candidates: Vec<Candidate> = names.iter().map(|n| Candidate::new([*n])).collect();
        resolver.resolve(&candidates, &ResolvedFields::default())
    }

    fn well_name_of(names: &[&str]) -> Option<String> {
        let resolver = WellNameResolver::new(&ExtractorConfig::default()).unwrap();
        let candidates: Vec<Candidate> = names
            .iter()
            .map(|n| Candidate::new(["Well", "Name", *n]))
            .collect();
        resolver.resolve(&candidates, &ResolvedFields::default())
    }

    #[test]
    fn test_first_max_keeps_earliest_tie() {
        let picked = first_max_by_key(vec!["ab", "cd", "e"], |s| s.len());
        assert_eq!(picked, Some("ab"));
        assert_eq!(first_max_by_key(Vec::<&str>::new(), |s| s.len()), None);
    }

    #[test]
    fn test_identifier_round_trip() {
        let resolver = IdentifierResolver::new().unwrap();
        assert_eq!(
            run(&resolver, "API Number: 12-345-67890").as_deref(),
            Some("12-345-67890")
        );
    }

    #[test]
    fn test_identifier_last_occurrence_wins() {
        let resolver = IdentifierResolver::new().unwrap();
        let text = "API No. 33-053-02102\nnotes\nAPI # 33 105 04511\n";
        assert_eq!(run(&resolver, text).as_deref(), Some("33-105-04511"));
    }

    #[test]
    fn test_identifier_absent() {
        let resolver = IdentifierResolver::new().unwrap();
        assert_eq!(run(&resolver, "Well File No. 20197"), None);
    }

    #[test]
    fn test_well_name_rejects_labels() {
        assert_eq!(well_name_of(&["Field: North Dakota"]), None);
        assert_eq!(well_name_of(&["and Number 3"]), None);
        assert_eq!(well_name_of(&["Legal Location 12"]), None);
    }

    #[test]
    fn test_well_name_prefers_numbered_part() {
        assert_eq!(
            well_name_of(&["North Dakota", "Johnson 14-36H - Unit A"]).as_deref(),
            Some("Johnson 14-36H")
        );
    }

    #[test]
    fn test_well_name_prefers_hyphen_then_length() {
        assert_eq!(
            well_name_of(&["Kline Federal 5300 11", "Lewis 2-36H"]).as_deref(),
            Some("Lewis 2-36H")
        );
        assert_eq!(
            well_name_of(&["Lewis 2-36H", "Lewis Federal 2-36H"]).as_deref(),
            Some("Lewis Federal 2-36H")
        );
    }

    #[test]
    fn test_well_name_splits_on_comma() {
        assert_eq!(
            well_name_of(&["Sec. Nine, Chalmers 5301 44-24 4TR"]).as_deref(),
            Some("Chalmers 5301 44-24 4TR")
        );
    }

    #[test]
    fn test_well_name_from_text() {
        let resolver = WellNameResolver::new(&ExtractorConfig::default()).unwrap();
        let text = "Well Name and Number\nField: Baker\nWell Name: Atlanta 14-6H\n";
        assert_eq!(run(&resolver, text).as_deref(), Some("Atlanta 14-6H"));
    }

    #[test]
    fn test_operator_override_beats_ranking() {
        assert_eq!(
            operator_of(&["Big Operator Inc", "Oasis Petroleum ND"]).as_deref(),
            Some("Oasis Petroleum North America LLC")
        );
    }

    #[test]
    fn test_operator_later_override_wins() {
        assert_eq!(
            operator_of(&["Oasis Petroleum", "Continental Resources"]).as_deref(),
            Some("Continental Resources, Inc.")
        );
    }

    #[test]
    fn test_operator_override_tokens_split_on_spaces_only() {
        assert_eq!(
            operator_of(&["Oasis\tPetroleum"]).as_deref(),
            Some("Oasis\tPetroleum")
        );
    }

    #[test]
    fn test_operator_ranking() {
        assert_eq!(
            operator_of(&["Slawson Exploration", "Whiting Oil and Gas Corp"]).as_deref(),
            Some("Whiting Oil and Gas Corp")
        );
        assert_eq!(
            operator_of(&["Short Name", "A Much Longer Name"]).as_deref(),
            Some("A Much Longer Name")
        );
    }

    #[test]
    fn test_operator_filters() {
        assert_eq!(operator_of(&["Operator: Someone"]), None);
        assert_eq!(operator_of(&["Well Operator Name"]), None);
        assert_eq!(operator_of(&["operations shall not commence"]), None);
        assert_eq!(operator_of(&["Hess 2014 Filing"]), None);
        assert_eq!(
            operator_of(&["Hess Bakken 2014B LLC"]).as_deref(),
            Some("Hess Bakken 2014B LLC")
        );
    }

    #[test]
    fn test_county_priority_keyword() {
        let resolver = CountyResolver::new(&ExtractorConfig::default()).unwrap();
        let text = "County: Williams County\nCOUNTY: MCKENZIE\n";
        assert_eq!(run(&resolver, text).as_deref(), Some("McKenzie County"));
    }

    #[test]
    fn test_county_first_plausible() {
        let resolver = CountyResolver::new(&ExtractorConfig::default()).unwrap();
        let text = "County Road access\nCounty: Dunn County\nCounty: Williams County\n";
        assert_eq!(run(&resolver, text).as_deref(), Some("Dunn County"));
    }

    #[test]
    fn test_county_well_name_override() {
        let resolver = CountyResolver::new(&ExtractorConfig::default()).unwrap();
        let mut resolved = ResolvedFields::default();
        resolved.insert(Field::WellName, Some("Atlanta 14-6H".to_string()));

        let candidates = resolver.candidates("County: McKenzie County\n");
        assert_eq!(
            resolver.resolve(&candidates, &resolved).as_deref(),
            Some("Williams & McKenzie")
        );
        assert_eq!(resolver.resolve(&[], &resolved).as_deref(), Some("Williams & McKenzie"));
    }

    #[test]
    fn test_state_from_county_or_last_match() {
        let resolver = StateResolver::new(&ExtractorConfig::default()).unwrap();
        let candidates = resolver.candidates("County/State: Dunn County, ND\nCounty, Montana\n");

        let mut resolved = ResolvedFields::default();
        resolved.insert(Field::County, Some("McKenzie County".to_string()));
        assert_eq!(
            resolver.resolve(&candidates, &resolved).as_deref(),
            Some("North Dakota")
        );

        resolved.insert(Field::County, Some("Dunn County".to_string()));
        assert_eq!(resolver.resolve(&candidates, &resolved).as_deref(), Some("ND"));
    }

    #[test]
    fn test_coordinates_last_restatement() {
        let resolver = LastMatchResolver::longitude().unwrap();
        let text = "Longitude: 103° 36' 40.52 W\nLongitude: 103° 36' 41.10 W\n";
        assert_eq!(run(&resolver, text).as_deref(), Some("103° 36' 41.10  W"));
    }

    #[test]
    fn test_coordinates_fallback() {
        let resolver = LastMatchResolver::latitude().unwrap();
        assert_eq!(run(&resolver, "48° 3' 22.45\"N").as_deref(), Some("48° 3' 22.45\"N"));
        assert_eq!(run(&resolver, "no coordinates"), None);
    }
}
