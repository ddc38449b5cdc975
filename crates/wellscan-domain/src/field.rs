//! The record schema: every column a `WellRecord` can carry

use std::fmt;

/// A named column of the well record schema
///
/// The declaration order is the storage column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Jurisdiction-assigned well identifier (`NN-NNN-NNNNN`), the natural key
    Identifier,
    /// Name of the originating document
    SourceName,
    /// Well or facility name
    WellName,
    /// Operating company
    Operator,
    /// Longitude as written in the document
    Longitude,
    /// Latitude as written in the document
    Latitude,
    /// County
    County,
    /// State
    State,
    /// Date of the first stimulation event
    DateStimulated,
    /// Formation that was stimulated
    StimulatedFormation,
    /// Top of the stimulated interval (ft)
    TopFt,
    /// Bottom of the stimulated interval (ft)
    BottomFt,
    /// Number of stimulation stages
    StimulationStages,
    /// Treatment type
    TypeTreatment,
    /// Proppant weight (lbs)
    LbsProppant,
    /// Maximum treatment pressure (psi)
    MaxTreatmentPressurePsi,
    /// Free-text treatment details
    Details,
}

impl Field {
    /// Every field, in storage column order
    pub const ALL: [Field; 17] = [
        Field::Identifier,
        Field::SourceName,
        Field::WellName,
        Field::Operator,
        Field::Longitude,
        Field::Latitude,
        Field::County,
        Field::State,
        Field::DateStimulated,
        Field::StimulatedFormation,
        Field::TopFt,
        Field::BottomFt,
        Field::StimulationStages,
        Field::TypeTreatment,
        Field::LbsProppant,
        Field::MaxTreatmentPressurePsi,
        Field::Details,
    ];

    /// The stimulation sub-record fields
    pub const STIMULATION: [Field; 9] = [
        Field::DateStimulated,
        Field::StimulatedFormation,
        Field::TopFt,
        Field::BottomFt,
        Field::StimulationStages,
        Field::TypeTreatment,
        Field::LbsProppant,
        Field::MaxTreatmentPressurePsi,
        Field::Details,
    ];

    /// Column name used in storage and output
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Identifier => "identifier",
            Field::SourceName => "source_name",
            Field::WellName => "well_name",
            Field::Operator => "operator",
            Field::Longitude => "longitude",
            Field::Latitude => "latitude",
            Field::County => "county",
            Field::State => "state",
            Field::DateStimulated => "date_stimulated",
            Field::StimulatedFormation => "stimulated_formation",
            Field::TopFt => "top_ft",
            Field::BottomFt => "bottom_ft",
            Field::StimulationStages => "stimulation_stages",
            Field::TypeTreatment => "type_treatment",
            Field::LbsProppant => "lbs_proppant",
            Field::MaxTreatmentPressurePsi => "max_treatment_pressure_psi",
            Field::Details => "details",
        }
    }

    /// Maximum representable length, in characters
    pub fn max_len(&self) -> usize {
        match self {
            Field::DateStimulated => 50,
            Field::Details => 500,
            _ => 255,
        }
    }

}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
