//! Well record module - the unit of output of the engine

use crate::Field;

/// The first stimulation event described in a document
///
/// Every sub-field is independently optional; a block whose layout did not
/// match any sub-pattern yields a record with every field `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StimulationRecord {
    /// Date stimulated, as written (`M/D/YYYY`)
    pub date_stimulated: Option<String>,

    /// Stimulated formation
    pub stimulated_formation: Option<String>,

    /// Top of interval (ft)
    pub top_ft: Option<String>,

    /// Bottom of interval (ft)
    pub bottom_ft: Option<String>,

    /// Stage count
    pub stimulation_stages: Option<String>,

    /// Treatment type
    pub type_treatment: Option<String>,

    /// Proppant weight (lbs)
    pub lbs_proppant: Option<String>,

    /// Maximum treatment pressure (psi)
    pub max_treatment_pressure_psi: Option<String>,

    /// Free-text details following the `Details` label
    pub details: Option<String>,
}

impl StimulationRecord {
    /// True when no sub-field was recovered
    pub fn is_empty(&self) -> bool {
        Field::STIMULATION.iter().all(|f| self.get(*f).is_none())
    }

    /// Read a stimulation field; non-stimulation fields read as `None`
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::DateStimulated => &self.date_stimulated,
            Field::StimulatedFormation => &self.stimulated_formation,
            Field::TopFt => &self.top_ft,
            Field::BottomFt => &self.bottom_ft,
            Field::StimulationStages => &self.stimulation_stages,
            Field::TypeTreatment => &self.type_treatment,
            Field::LbsProppant => &self.lbs_proppant,
            Field::MaxTreatmentPressurePsi => &self.max_treatment_pressure_psi,
            Field::Details => &self.details,
            _ => return None,
        };
        value.as_deref()
    }

    fn slot(&mut self, field: Field) -> Option<&mut Option<String>> {
        match field {
            Field::DateStimulated => Some(&mut self.date_stimulated),
            Field::StimulatedFormation => Some(&mut self.stimulated_formation),
            Field::TopFt => Some(&mut self.top_ft),
            Field::BottomFt => Some(&mut self.bottom_ft),
            Field::StimulationStages => Some(&mut self.stimulation_stages),
            Field::TypeTreatment => Some(&mut self.type_treatment),
            Field::LbsProppant => Some(&mut self.lbs_proppant),
            Field::MaxTreatmentPressurePsi => Some(&mut self.max_treatment_pressure_psi),
            Field::Details => Some(&mut self.details),
            _ => None,
        }
    }
}

/// A normalized well record derived from one source document
///
/// Records are created fresh per document and handed to a sink keyed by
/// `identifier`. A later record with the same identifier replaces every
/// field of the earlier one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WellRecord {
    /// Natural key: `NN-NNN-NNNNN`, or a run-local fallback number
    pub identifier: String,

    /// Originating document name (informational, not unique)
    pub source_name: String,

    /// Well or facility name
    pub well_name: Option<String>,

    /// Operating company
    pub operator: Option<String>,

    /// County
    pub county: Option<String>,

    /// State
    pub state: Option<String>,

    /// Longitude
    pub longitude: Option<String>,

    /// Latitude
    pub latitude: Option<String>,

    /// First stimulation event, if the document has a stimulation section
    pub stimulation: Option<StimulationRecord>,
}

impl WellRecord {
    /// Create an otherwise empty record
    pub fn new(identifier: impl Into<String>, source_name: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            source_name: source_name.into(),
            ..Default::default()
        }
    }

    /// Read any field by name
    ///
    /// # Examples
    ///
    /// ```
    /// use wellscan_domain::{Field, WellRecord};
    ///
    /// let mut record = WellRecord::new("33-053-02102", "W20197.pdf");
    /// record.set(Field::County, Some("McKenzie County".to_string()));
    /// assert_eq!(record.get(Field::County), Some("McKenzie County"));
    /// assert_eq!(record.get(Field::Details), None);
    /// ```
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Identifier => Some(self.identifier.as_str()),
            Field::SourceName => Some(self.source_name.as_str()),
            Field::WellName => self.well_name.as_deref(),
            Field::Operator => self.operator.as_deref(),
            Field::County => self.county.as_deref(),
            Field::State => self.state.as_deref(),
            Field::Longitude => self.longitude.as_deref(),
            Field::Latitude => self.latitude.as_deref(),
            _ => self.stimulation.as_ref().and_then(|s| s.get(field)),
        }
    }

    /// Write any field by name
    ///
    /// Setting `None` on `identifier` or `source_name` clears them to the
    /// empty string. Setting a stimulation field creates the sub-record
    /// on demand.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        match field {
            Field::Identifier => self.identifier = value.unwrap_or_default(),
            Field::SourceName => self.source_name = value.unwrap_or_default(),
            Field::WellName => self.well_name = value,
            Field::Operator => self.operator = value,
            Field::County => self.county = value,
            Field::State => self.state = value,
            Field::Longitude => self.longitude = value,
            Field::Latitude => self.latitude = value,
            _ => {
                if value.is_none() && self.stimulation.is_none() {
                    return;
                }
                let stimulation = self.stimulation.get_or_insert_with(Default::default);
                if let Some(slot) = stimulation.slot(field) {
                    *slot = value;
                }
            }
        }
    }

    /// Flat field-name-to-value view, in storage column order
    pub fn fields(&self) -> Vec<(Field, Option<&str>)> {
        Field::ALL.iter().map(|f| (*f, self.get(*f))).collect()
    }
}
