//! One-click sample profiles.

use crate::domain::{AppError, ProfileInput};

/// A fixed, pre-filled profile offered for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    /// Stable identifier used on the command line.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    pub emoji: &'static str,
    salary: &'static str,
    caste: &'static str,
    complexion: &'static str,
    height: &'static str,
    property_value: &'static str,
    education: &'static str,
    family_status: &'static str,
    foreign_status: &'static str,
}

const PRESETS: &[Preset] = &[Preset {
    id: "it-professional",
    name: "IT Professional (for example)",
    emoji: "👨‍💻",
    salary: "4 LPA",
    caste: "Brahmin",
    complexion: "Fair",
    height: "165",
    property_value: "4 acre farm and 2 bhk flat",
    education: "B.tech",
    family_status: "Middle class",
    foreign_status: "None",
}];

impl Preset {
    /// Every preset in display order.
    pub fn all() -> &'static [Preset] {
        PRESETS
    }

    /// Look up a preset by id, ignoring case.
    pub fn find(id: &str) -> Result<&'static Preset, AppError> {
        PRESETS.iter().find(|preset| preset.id.eq_ignore_ascii_case(id.trim())).ok_or_else(|| {
            AppError::UnknownPreset {
                name: id.to_string(),
                available: PRESETS.iter().map(|preset| preset.id).collect::<Vec<_>>().join(", "),
            }
        })
    }

    /// A fresh profile holding exactly this preset's values.
    pub fn profile(&self) -> ProfileInput {
        ProfileInput {
            salary: self.salary.to_string(),
            caste: self.caste.to_string(),
            complexion: self.complexion.to_string(),
            height: self.height.to_string(),
            property_value: self.property_value.to_string(),
            education: self.education.to_string(),
            family_status: self.family_status.to_string(),
            foreign_status: self.foreign_status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProfileField;

    #[test]
    fn it_professional_preset_matches_sample_profile() {
        let profile = Preset::find("it-professional").unwrap().profile();

        assert_eq!(profile.get(ProfileField::Salary), "4 LPA");
        assert_eq!(profile.get(ProfileField::Caste), "Brahmin");
        assert_eq!(profile.get(ProfileField::Complexion), "Fair");
        assert_eq!(profile.get(ProfileField::Height), "165");
        assert_eq!(profile.get(ProfileField::PropertyValue), "4 acre farm and 2 bhk flat");
        assert_eq!(profile.get(ProfileField::Education), "B.tech");
        assert_eq!(profile.get(ProfileField::FamilyStatus), "Middle class");
        assert_eq!(profile.get(ProfileField::ForeignStatus), "None");
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(Preset::find("IT-Professional").unwrap().id, "it-professional");
    }

    #[test]
    fn find_unknown_lists_available_ids() {
        let err = Preset::find("nri-doctor").unwrap_err();
        assert!(err.to_string().contains("it-professional"));
    }

    #[test]
    fn preset_ids_are_unique() {
        let mut ids: Vec<_> = Preset::all().iter().map(|preset| preset.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Preset::all().len());
    }
}
