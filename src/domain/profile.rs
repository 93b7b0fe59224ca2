use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// The eight descriptive fields collected by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileField {
    Salary,
    Caste,
    Complexion,
    Height,
    PropertyValue,
    Education,
    FamilyStatus,
    ForeignStatus,
}

impl ProfileField {
    /// All fields in form order.
    pub const ALL: [ProfileField; 8] = [
        ProfileField::Salary,
        ProfileField::Caste,
        ProfileField::Complexion,
        ProfileField::Height,
        ProfileField::PropertyValue,
        ProfileField::Education,
        ProfileField::FamilyStatus,
        ProfileField::ForeignStatus,
    ];

    /// Name used by the form and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ProfileField::Salary => "salary",
            ProfileField::Caste => "caste",
            ProfileField::Complexion => "complexion",
            ProfileField::Height => "height",
            ProfileField::PropertyValue => "propertyValue",
            ProfileField::Education => "education",
            ProfileField::FamilyStatus => "familyStatus",
            ProfileField::ForeignStatus => "foreignStatus",
        }
    }

    /// Label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            ProfileField::Salary => "Salary",
            ProfileField::Caste => "Caste",
            ProfileField::Complexion => "Complexion",
            ProfileField::Height => "Height (cm)",
            ProfileField::PropertyValue => "Property value",
            ProfileField::Education => "Education",
            ProfileField::FamilyStatus => "Family status",
            ProfileField::ForeignStatus => "Foreign status",
        }
    }

    /// Parse a field from its form name or snake-case spelling.
    pub fn parse(name: &str) -> Result<ProfileField, AppError> {
        let normalized = name.trim().replace(['_', '-'], "").to_lowercase();
        ProfileField::ALL
            .into_iter()
            .find(|field| field.name().to_lowercase() == normalized)
            .ok_or_else(|| AppError::UnknownField {
                name: name.to_string(),
                available: ProfileField::ALL
                    .iter()
                    .map(|field| field.name())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Free-text description of a person, one value per [`ProfileField`].
///
/// Values are kept verbatim. Empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileInput {
    pub salary: String,
    pub caste: String,
    pub complexion: String,
    pub height: String,
    pub property_value: String,
    pub education: String,
    pub family_status: String,
    pub foreign_status: String,
}

impl ProfileInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: ProfileField) -> &str {
        match field {
            ProfileField::Salary => &self.salary,
            ProfileField::Caste => &self.caste,
            ProfileField::Complexion => &self.complexion,
            ProfileField::Height => &self.height,
            ProfileField::PropertyValue => &self.property_value,
            ProfileField::Education => &self.education,
            ProfileField::FamilyStatus => &self.family_status,
            ProfileField::ForeignStatus => &self.foreign_status,
        }
    }

    /// Replace one field. Never validates.
    pub fn set(&mut self, field: ProfileField, value: impl Into<String>) {
        let slot = match field {
            ProfileField::Salary => &mut self.salary,
            ProfileField::Caste => &mut self.caste,
            ProfileField::Complexion => &mut self.complexion,
            ProfileField::Height => &mut self.height,
            ProfileField::PropertyValue => &mut self.property_value,
            ProfileField::Education => &mut self.education,
            ProfileField::FamilyStatus => &mut self.family_status,
            ProfileField::ForeignStatus => &mut self.foreign_status,
        };
        *slot = value.into();
    }

    /// Builder-style variant of [`ProfileInput::set`].
    pub fn with(mut self, field: ProfileField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        ProfileField::ALL.iter().all(|field| self.get(*field).is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_round_trip_through_parse() {
        for field in ProfileField::ALL {
            assert_eq!(ProfileField::parse(field.name()).unwrap(), field);
        }
    }

    #[test]
    fn parse_accepts_snake_case_and_any_case() {
        assert_eq!(ProfileField::parse("property_value").unwrap(), ProfileField::PropertyValue);
        assert_eq!(ProfileField::parse("FAMILYSTATUS").unwrap(), ProfileField::FamilyStatus);
        assert_eq!(ProfileField::parse("foreign-status").unwrap(), ProfileField::ForeignStatus);
    }

    #[test]
    fn parse_rejects_unknown_field() {
        let err = ProfileField::parse("horoscope").unwrap_err();
        match err {
            AppError::UnknownField { name, available } => {
                assert_eq!(name, "horoscope");
                assert!(available.contains("propertyValue"));
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[test]
    fn set_replaces_only_the_named_field() {
        let mut profile = ProfileInput::new().with(ProfileField::Caste, "Jat");
        profile.set(ProfileField::Height, "180");

        assert_eq!(profile.get(ProfileField::Caste), "Jat");
        assert_eq!(profile.get(ProfileField::Height), "180");
        assert_eq!(profile.get(ProfileField::Salary), "");
        assert!(!profile.is_empty());
    }

    #[test]
    fn whitespace_counts_as_a_value() {
        let profile = ProfileInput::new().with(ProfileField::Education, " ");
        assert!(!profile.is_empty());
    }

    #[test]
    fn deserializes_form_field_names() {
        let profile: ProfileInput =
            serde_json::from_str(r#"{"propertyValue": "2 bhk", "familyStatus": "rich"}"#)
                .unwrap();
        assert_eq!(profile.property_value, "2 bhk");
        assert_eq!(profile.family_status, "rich");
        assert_eq!(profile.salary, "");
    }
}
