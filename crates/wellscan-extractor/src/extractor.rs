//! Core Extractor implementation

use crate::config::ExtractorConfig;
use crate::decider::OcrDecider;
use crate::error::ExtractorError;
use crate::registry::ResolverRegistry;
use crate::stimulation::StimulationExtractor;
use crate::types::Extraction;
use tracing::debug;

/// The Extractor turns document text into resolved fields
///
/// It holds no I/O: text goes in, an [`Extraction`] comes out. Driving the
/// collaborators is the job of [`crate::Pipeline`].
pub struct Extractor {
    config: ExtractorConfig,
    registry: ResolverRegistry,
    stimulation: StimulationExtractor,
    decider: OcrDecider,
}

impl Extractor {
    /// Create a new Extractor with the standard resolvers
    pub fn new(config: ExtractorConfig) -> Result<Self, ExtractorError> {
        config.validate().map_err(ExtractorError::Config)?;
        let registry = ResolverRegistry::with_defaults(&config)?;
        Self::with_registry(config, registry)
    }

    /// Create an Extractor around a custom resolver set
    pub fn with_registry(
        config: ExtractorConfig,
        registry: ResolverRegistry,
    ) -> Result<Self, ExtractorError> {
        debug!("Resolution order: {:?}", registry.order());
        Ok(Self {
            config,
            registry,
            stimulation: StimulationExtractor::new()?,
            decider: OcrDecider::new()?,
        })
    }

    /// Create an Extractor with the default configuration
    pub fn default_config() -> Result<Self, ExtractorError> {
        Self::new(ExtractorConfig::default())
    }

    /// The configuration in effect
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Whether `text` should be re-acquired before extracting
    pub fn needs_rescan(&self, text: &str) -> bool {
        self.decider.needs_rescan(text)
    }

    /// Resolve every field and the first stimulation block
    pub fn extract(&self, text: &str) -> Extraction {
        debug!("Extracting from {} chars of text", text.len());
        let fields = self.registry.resolve_all(text);
        let stimulation = self.stimulation.extract(text);
        if stimulation.is_none() {
            debug!("No stimulation block found");
        }
        Extraction {
            fields,
            stimulation,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeywordOverride;
    use wellscan_domain::Field;

    const DOCUMENT: &str = "WELL COMPLETION OR RECOMPLETION REPORT\n\
        Well Name: Johnson 14-36H - Unit A\n\
        Field: North Dakota\n\
        Operator: Big Operator Inc\n\
        Operator: Oasis Petroleum ND\n\
        County: McKenzie\n\
        API Number: 12-345-67890\n\
        Latitude: 47° 59' 1.21 N\n\
        Longitude: 103° 29' 8.53 W\n";

    #[test]
    fn test_extract_document() {
        let extractor = Extractor::default_config().unwrap();
        let extraction = extractor.extract(DOCUMENT);
        let fields = &extraction.fields;

        assert_eq!(extraction.identifier(), Some("12-345-67890"));
        assert_eq!(fields.get(Field::WellName), Some("Johnson 14-36H"));
        assert_eq!(
            fields.get(Field::Operator),
            Some("Oasis Petroleum North America LLC")
        );
        assert_eq!(fields.get(Field::County), Some("McKenzie County"));
        assert_eq!(fields.get(Field::State), Some("North Dakota"));
        assert_eq!(fields.get(Field::Latitude), Some("47° 59' 1.21  N"));
        assert_eq!(fields.get(Field::Longitude), Some("103° 29' 8.53  W"));
        assert!(extraction.stimulation.is_none());
    }

    #[test]
    fn test_well_name_drives_county_and_state() {
        let extractor = Extractor::default_config().unwrap();

        let extraction = extractor.extract(
            "Well Name: Atlanta 14-6H\nCounty/State: Dunn County, ND\nAPI No. 33-053-02102\n",
        );
        assert_eq!(extraction.fields.get(Field::County), Some("Williams & McKenzie"));
        assert_eq!(extraction.fields.get(Field::State), Some("Oklahoma"));

        let extraction = extractor.extract(
            "Well Name: Johnson 14-6H\nCounty/State: Dunn County, ND\nAPI No. 33-053-02102\n",
        );
        assert_eq!(extraction.fields.get(Field::County), Some("Dunn County"));
        assert_eq!(extraction.fields.get(Field::State), Some("ND"));
    }

    #[test]
    fn test_needs_rescan() {
        let extractor = Extractor::default_config().unwrap();
        assert!(!extractor.needs_rescan(DOCUMENT));
        assert!(extractor.needs_rescan("Well Name: Johnson 14-36H"));
    }

    #[test]
    fn test_empty_text_resolves_nothing() {
        let extractor = Extractor::default_config().unwrap();
        let extraction = extractor.extract("");
        assert!(extraction.fields.iter().all(|(_, v)| v.is_none()));
        assert!(extraction.stimulation.is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = ExtractorConfig::default();
        config.operator_overrides.push(KeywordOverride::new("", "Nobody"));
        assert!(matches!(
            Extractor::new(config),
            Err(ExtractorError::Config(_))
        ));
    }

    #[test]
    fn test_custom_override_table() {
        let mut config = ExtractorConfig::default();
        config
            .operator_overrides
            .push(KeywordOverride::new("Whiting", "Whiting Oil and Gas Corporation"));
        let extractor = Extractor::new(config).unwrap();

        let extraction = extractor.extract("Operator: Whiting Oil & Gas\n");
        assert_eq!(
            extraction.fields.get(Field::Operator),
            Some("Whiting Oil and Gas Corporation")
        );
    }
}
