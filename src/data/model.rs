use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

// ---------------------------------------------------------------------------
// CharacterRecord – one entry of the upstream character list
// ---------------------------------------------------------------------------

/// Placeholder shown for any absent optional field.
pub const PLACEHOLDER: &str = "—";

/// Anchor year for age derivation (the canonical first-year date).
///
/// Ages everywhere in the application — filter bounds, the age chart, card
/// display — are `REFERENCE_YEAR - year_of_birth`. A single anchor is used
/// so the filter and the chart cannot disagree about the same record.
pub const REFERENCE_YEAR: i64 = 1991;

/// A character's wand. The upstream API always ships the object but encodes
/// "no wand" as empty fields, so every field is optional after
/// normalization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Wand {
    #[serde(default, deserialize_with = "empty_str_as_none")]
    pub wood: Option<String>,
    #[serde(default, deserialize_with = "empty_str_as_none")]
    pub core: Option<String>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub length: Option<f64>,
}

impl Wand {
    /// A wand counts as present only when its wood is known.
    pub fn is_known(&self) -> bool {
        self.wood.is_some()
    }
}

/// One row of the character dataset, as served by the HP-API.
///
/// The wire format is camelCase JSON with empty strings standing in for
/// absent values; deserialization normalizes those to `None` so the rest of
/// the application only deals with honest `Option`s. Upstream fields not
/// listed here (ancestry, actor, eye colour, …) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "empty_str_as_none")]
    pub species: Option<String>,
    #[serde(default, deserialize_with = "empty_str_as_none")]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "empty_str_as_none")]
    pub house: Option<String>,
    /// Birth date as served: `dd-mm-yyyy`.
    #[serde(default, deserialize_with = "empty_str_as_none")]
    pub date_of_birth: Option<String>,
    /// The API serves this as a number or a numeric string.
    #[serde(default, deserialize_with = "lenient_i64")]
    pub year_of_birth: Option<i64>,
    #[serde(default)]
    pub hogwarts_student: bool,
    #[serde(default)]
    pub hogwarts_staff: bool,
    #[serde(default)]
    pub wand: Option<Wand>,
    #[serde(default, deserialize_with = "empty_str_as_none")]
    pub patronus: Option<String>,
    /// Portrait URL.
    #[serde(default, deserialize_with = "empty_str_as_none")]
    pub image: Option<String>,
}

impl CharacterRecord {
    /// Age at the reference year, if the year of birth is known.
    pub fn age(&self) -> Option<i64> {
        self.year_of_birth.map(|y| REFERENCE_YEAR - y)
    }

    /// Role shown on the card: "Student", "Staff", or the placeholder.
    pub fn role_label(&self) -> &'static str {
        if self.hogwarts_student {
            "Student"
        } else if self.hogwarts_staff {
            "Staff"
        } else {
            PLACEHOLDER
        }
    }

    /// Birth date in display form (`yyyy/mm/dd`).
    pub fn birth_label(&self) -> String {
        format_date(self.date_of_birth.as_deref())
    }

    /// Wand summary: `wood, core, length`. A wand without wood renders the
    /// placeholder; a known wand with gaps renders `?` for the gaps.
    pub fn wand_label(&self) -> String {
        match &self.wand {
            Some(w) if w.is_known() => {
                let wood = w.wood.as_deref().unwrap_or("?");
                let core = w.core.as_deref().unwrap_or("?");
                let length = w
                    .length
                    .map(|l| l.to_string())
                    .unwrap_or_else(|| "?".to_string());
                format!("{wood}, {core}, {length}")
            }
            _ => PLACEHOLDER.to_string(),
        }
    }

    pub fn patronus_label(&self) -> &str {
        self.patronus.as_deref().unwrap_or(PLACEHOLDER)
    }
}

/// Reformat an upstream `dd-mm-yyyy` date to `yyyy/mm/dd` for display.
/// Absent dates render the placeholder; anything that is not three dashed
/// parts is shown verbatim.
pub fn format_date(date: Option<&str>) -> String {
    let Some(date) = date else {
        return PLACEHOLDER.to_string();
    };
    if date.is_empty() {
        return PLACEHOLDER.to_string();
    }
    let parts: Vec<&str> = date.split('-').collect();
    match parts.as_slice() {
        [dd, mm, yyyy] if !dd.is_empty() && !mm.is_empty() && !yyyy.is_empty() => {
            format!("{yyyy}/{mm}/{dd}")
        }
        _ => date.to_string(),
    }
}

// -- Deserialization helpers: the API's "empty string means absent" --

fn empty_str_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<JsonValue>::deserialize(deserializer)? {
        Some(JsonValue::Number(n)) => n.as_i64(),
        Some(JsonValue::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<JsonValue>::deserialize(deserializer)? {
        Some(JsonValue::Number(n)) => n.as_f64(),
        Some(JsonValue::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

// ---------------------------------------------------------------------------
// CharacterDataset – the complete fetched dataset
// ---------------------------------------------------------------------------

/// The fetched record list with pre-computed unique value lists for the
/// categorical filter fields. Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct CharacterDataset {
    /// All records, in upstream order.
    pub records: Vec<CharacterRecord>,
    /// Sorted distinct species values.
    pub species: Vec<String>,
    /// Sorted distinct gender values.
    pub genders: Vec<String>,
    /// Sorted distinct house values.
    pub houses: Vec<String>,
}

impl CharacterDataset {
    /// Build the unique-value indices from the fetched records.
    pub fn from_records(records: Vec<CharacterRecord>) -> Self {
        let species = unique_values(&records, |r| r.species.as_deref());
        let genders = unique_values(&records, |r| r.gender.as_deref());
        let houses = unique_values(&records, |r| r.house.as_deref());
        CharacterDataset {
            records,
            species,
            genders,
            houses,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Sorted distinct non-empty values of one field, for filter choice lists.
pub fn unique_values<F>(records: &[CharacterRecord], field: F) -> Vec<String>
where
    F: Fn(&CharacterRecord) -> Option<&str>,
{
    let set: BTreeSet<&str> = records
        .iter()
        .filter_map(|r| field(r))
        .filter(|v| !v.is_empty())
        .collect();
    set.into_iter().map(str::to_string).collect()
}
