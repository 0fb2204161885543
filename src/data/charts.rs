use std::collections::BTreeMap;

use super::model::CharacterRecord;

// ---------------------------------------------------------------------------
// Chart aggregation: distribution counts over the full record set
// ---------------------------------------------------------------------------

/// Bucket for records with no gender value.
pub const UNKNOWN_GENDER: &str = "Unknown";
/// Bucket for records with no house.
pub const NO_HOUSE: &str = "No House";

/// Aggregate counts for the overview charts. Purely derived from the record
/// set; recomputed on each render, never stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartData {
    /// Count per literal gender value, absent counted under "Unknown".
    pub by_gender: Vec<(String, usize)>,
    /// Count per house, absent counted under "No House".
    pub by_house: Vec<(String, usize)>,
    /// Count per reference-year age, ascending; records without a year of
    /// birth are excluded.
    pub by_age: Vec<(i64, usize)>,
}

/// Single pass over the records producing all three distributions.
/// Total over any input; an empty record set yields empty mappings.
pub fn aggregate(records: &[CharacterRecord]) -> ChartData {
    let mut by_gender: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_house: BTreeMap<&str, usize> = BTreeMap::new();
    let mut by_age: BTreeMap<i64, usize> = BTreeMap::new();

    for record in records {
        let gender = record.gender.as_deref().unwrap_or(UNKNOWN_GENDER);
        *by_gender.entry(gender).or_default() += 1;

        let house = record.house.as_deref().unwrap_or(NO_HOUSE);
        *by_house.entry(house).or_default() += 1;

        if let Some(age) = record.age() {
            *by_age.entry(age).or_default() += 1;
        }
    }

    ChartData {
        by_gender: by_gender
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        by_house: by_house
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect(),
        by_age: by_age.into_iter().collect(),
    }
}
