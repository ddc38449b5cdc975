//! Schema normalization
//!
//! The only rule is length: each present field is cut to its column width.
//! Values are otherwise passed through untouched.

use wellscan_domain::{Field, WellRecord};

/// First `max` characters of `value`
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
pub fn truncate_chars(value: &str, max: usize) -> &str {
    match value.char_indices().nth(max) {
        Some((byte_idx, _)) => &value[..byte_idx],
        None => value,
    }
}

/// Truncate every field of `record` to its schema width
pub fn normalize(mut record: WellRecord) -> WellRecord {
    for field in Field::ALL {
        let Some(value) = record.get(field) else {
            continue;
        };
        let max = field.max_len();
        if value.chars().count() > max {
            let cut = truncate_chars(value, max).to_string();
            record.set(field, Some(cut));
        }
    }
    record
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use wellscan_domain::StimulationRecord;

    #[test]
    fn test_details_cut_to_500() {
        let details = "x".repeat(600);
        let mut record = WellRecord::new("12-345-67890", "w1.pdf");
        record.stimulation = Some(StimulationRecord {
            details: Some(details.clone()),
            ..Default::default()
        });

        let normalized = normalize(record);
        let stored = normalized.get(Field::Details).unwrap();
        assert_eq!(stored.len(), 500);
        assert_eq!(stored, &details[..500]);
    }

    #[test]
    fn test_date_stimulated_cut_to_50() {
        let mut record = WellRecord::new("1", "w1.pdf");
        record.set(Field::DateStimulated, Some("9".repeat(80)));
        let normalized = normalize(record);
        assert_eq!(normalized.get(Field::DateStimulated).unwrap().len(), 50);
    }

    #[test]
    fn test_short_values_untouched() {
        let mut record = WellRecord::new("12-345-67890", "w1.pdf");
        record.well_name = Some("Johnson 14-36H".to_string());
        record.operator = Some("not: validated".to_string());
        let normalized = normalize(record.clone());
        assert_eq!(normalized, record);
    }

    #[test]
    fn test_absent_stimulation_stays_absent() {
        let record = WellRecord::new("7", "w7.pdf");
        assert!(normalize(record).stimulation.is_none());
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("47°59'", 3), "47°");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 0), "");
    }

    proptest! {
        #[test]
        fn prop_truncated_fits_and_is_prefix(s in "\\PC{0,300}", max in 0usize..300) {
            let out = truncate_chars(&s, max);
            prop_assert!(out.chars().count() <= max);
            prop_assert!(s.starts_with(out));
            if s.chars().count() <= max {
                prop_assert_eq!(out, s.as_str());
            }
        }

        #[test]
        fn prop_normalized_record_fits_schema(name in "\\PC{0,400}", details in "\\PC{0,700}") {
            let mut record = WellRecord::new("12-345-67890", "doc.pdf");
            record.well_name = Some(name);
            record.set(Field::Details, Some(details));
            let normalized = normalize(record);
            for (field, value) in normalized.fields() {
                if let Some(value) = value {
                    prop_assert!(value.chars().count() <= field.max_len());
                }
            }
        }
    }
}
