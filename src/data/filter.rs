use super::model::CharacterRecord;

// ---------------------------------------------------------------------------
// Filter criteria: the user's current constraints
// ---------------------------------------------------------------------------

/// Role constraint. `Any` is the sentinel meaning "no constraint".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RoleFilter {
    #[default]
    Any,
    Student,
    Staff,
}

impl RoleFilter {
    pub const ALL: [RoleFilter; 3] = [RoleFilter::Any, RoleFilter::Student, RoleFilter::Staff];

    pub fn label(self) -> &'static str {
        match self {
            RoleFilter::Any => "Any",
            RoleFilter::Student => "Student",
            RoleFilter::Staff => "Staff",
        }
    }
}

/// The user-selected constraints narrowing the visible records. Each field
/// defaults to its "any" sentinel: an empty name, `None` selections, `Any`
/// role, absent age bounds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the character name. Empty = any.
    pub name: String,
    /// Exact species selection. `None` = any.
    pub species: Option<String>,
    /// Exact gender selection. `None` = any.
    pub gender: Option<String>,
    /// Exact house selection. `None` = any.
    pub house: Option<String>,
    pub role: RoleFilter,
    /// Lower age bound (inclusive), anchored to the reference year.
    pub min_age: Option<i64>,
    /// Upper age bound (inclusive), anchored to the reference year.
    pub max_age: Option<i64>,
}

impl FilterCriteria {
    /// Whether every clause is at its "any" default.
    pub fn is_default(&self) -> bool {
        *self == FilterCriteria::default()
    }

    /// Conjunction of all active clauses: the record passes only if every
    /// non-default clause matches.
    pub fn matches(&self, record: &CharacterRecord) -> bool {
        if !self.name.is_empty()
            && !record
                .name
                .to_lowercase()
                .contains(&self.name.to_lowercase())
        {
            return false;
        }
        if let Some(species) = &self.species {
            if record.species.as_deref() != Some(species.as_str()) {
                return false;
            }
        }
        if let Some(gender) = &self.gender {
            if record.gender.as_deref() != Some(gender.as_str()) {
                return false;
            }
        }
        if let Some(house) = &self.house {
            if record.house.as_deref() != Some(house.as_str()) {
                return false;
            }
        }
        match self.role {
            RoleFilter::Any => {}
            RoleFilter::Student => {
                if !record.hogwarts_student {
                    return false;
                }
            }
            RoleFilter::Staff => {
                if !record.hogwarts_staff {
                    return false;
                }
            }
        }
        // A record without a year of birth fails any active age bound.
        if let Some(min) = self.min_age {
            match record.age() {
                Some(age) if age >= min => {}
                _ => return false,
            }
        }
        if let Some(max) = self.max_age {
            match record.age() {
                Some(age) if age <= max => {}
                _ => return false,
            }
        }
        true
    }
}

/// Return indices of records passing all active clauses, in source order
/// (stable filter, no re-sort).
pub fn filtered_indices(records: &[CharacterRecord], criteria: &FilterCriteria) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| criteria.matches(r))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn harry() -> CharacterRecord {
        CharacterRecord {
            name: "Harry Potter".to_string(),
            species: Some("human".to_string()),
            gender: Some("male".to_string()),
            house: Some("Gryffindor".to_string()),
            year_of_birth: Some(1980),
            hogwarts_student: true,
            ..CharacterRecord::default()
        }
    }

    fn sample() -> Vec<CharacterRecord> {
        let mut minerva = CharacterRecord {
            name: "Minerva McGonagall".to_string(),
            species: Some("human".to_string()),
            gender: Some("female".to_string()),
            house: Some("Gryffindor".to_string()),
            hogwarts_staff: true,
            ..CharacterRecord::default()
        };
        minerva.year_of_birth = Some(1935);

        let bloody_baron = CharacterRecord {
            name: "The Bloody Baron".to_string(),
            species: Some("ghost".to_string()),
            gender: Some("male".to_string()),
            house: Some("Slytherin".to_string()),
            ..CharacterRecord::default()
        };

        vec![harry(), minerva, bloody_baron]
    }

    #[test]
    fn default_criteria_is_identity() {
        let records = sample();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_default());
        assert_eq!(
            filtered_indices(&records, &criteria),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn output_preserves_source_order() {
        let records = sample();
        let criteria = FilterCriteria {
            gender: Some("male".to_string()),
            ..FilterCriteria::default()
        };
        // Subset of the original indices, ascending.
        assert_eq!(filtered_indices(&records, &criteria), vec![0, 2]);
    }

    #[test]
    fn house_selection_scenario() {
        let records = vec![harry()];
        let gryffindor = FilterCriteria {
            house: Some("Gryffindor".to_string()),
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &gryffindor), vec![0]);

        let slytherin = FilterCriteria {
            house: Some("Slytherin".to_string()),
            ..FilterCriteria::default()
        };
        assert!(filtered_indices(&records, &slytherin).is_empty());
    }

    #[test]
    fn name_match_is_case_insensitive_substring() {
        let records = sample();
        let criteria = FilterCriteria {
            name: "potter".to_string(),
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &criteria), vec![0]);
    }

    #[test]
    fn absent_field_fails_active_categorical_clause() {
        let mut houseless = harry();
        houseless.house = None;
        let criteria = FilterCriteria {
            house: Some("Gryffindor".to_string()),
            ..FilterCriteria::default()
        };
        assert!(!criteria.matches(&houseless));
    }

    #[test]
    fn role_clauses_follow_flags() {
        let records = sample();
        let students = FilterCriteria {
            role: RoleFilter::Student,
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &students), vec![0]);

        let staff = FilterCriteria {
            role: RoleFilter::Staff,
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &staff), vec![1]);
    }

    #[test]
    fn age_bounds_are_inclusive_and_anchored() {
        let records = sample(); // ages: 11, 56, unknown
        let criteria = FilterCriteria {
            min_age: Some(11),
            max_age: Some(11),
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &criteria), vec![0]);
    }

    #[test]
    fn unknown_year_fails_active_age_bound() {
        let records = sample();
        let criteria = FilterCriteria {
            min_age: Some(0),
            ..FilterCriteria::default()
        };
        // The Bloody Baron has no year of birth and drops out even though
        // the bound itself excludes nobody with a known age.
        assert_eq!(filtered_indices(&records, &criteria), vec![0, 1]);
    }

    #[test]
    fn clauses_conjoin() {
        let records = sample();
        let criteria = FilterCriteria {
            house: Some("Gryffindor".to_string()),
            role: RoleFilter::Staff,
            ..FilterCriteria::default()
        };
        assert_eq!(filtered_indices(&records, &criteria), vec![1]);
    }
}
