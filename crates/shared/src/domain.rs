use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{error::WizardError, events::LifeStoryEvent};

pub const TRAIT_VOCABULARY: [&str; 10] = [
    "Loving",
    "Generous",
    "Adventurous",
    "Kind",
    "Humble",
    "Compassionate",
    "Intelligent",
    "Funny",
    "Hardworking",
    "Creative",
];

pub const PRONOUN_OPTIONS: [&str; 3] = ["he/him", "she/her", "they/them"];

/// Number of traits the selection screen asks for ("up to 5").
pub const DEFAULT_TRAIT_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryOption {
    #[default]
    Create,
    Upload,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    #[default]
    #[serde(rename = "")]
    Unset,
    Mother,
    Father,
    Partner,
    Child,
    Sibling,
}

impl Relationship {
    pub const ALL: [Relationship; 5] = [
        Relationship::Mother,
        Relationship::Father,
        Relationship::Partner,
        Relationship::Child,
        Relationship::Sibling,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::Unset => "",
            Relationship::Mother => "mother",
            Relationship::Father => "father",
            Relationship::Partner => "partner",
            Relationship::Child => "child",
            Relationship::Sibling => "sibling",
        }
    }

    pub fn is_unset(self) -> bool {
        self == Relationship::Unset
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Relationship {
    type Err = WizardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "unset" => Ok(Relationship::Unset),
            "mother" => Ok(Relationship::Mother),
            "father" => Ok(Relationship::Father),
            "partner" => Ok(Relationship::Partner),
            "child" => Ok(Relationship::Child),
            "sibling" => Ok(Relationship::Sibling),
            _ => Err(WizardError::unknown_relationship(value)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FamilyMember {
    pub relationship: Relationship,
    pub name: String,
    pub is_deceased: bool,
}

impl FamilyMember {
    pub fn new(relationship: Relationship, name: impl Into<String>, is_deceased: bool) -> Self {
        Self {
            relationship,
            name: name.into(),
            is_deceased,
        }
    }

    /// Nothing entered yet; removing a blank member needs no confirmation.
    pub fn is_blank(&self) -> bool {
        self.relationship.is_unset() && self.name.is_empty()
    }

    pub fn apply(&mut self, update: FamilyMemberUpdate) {
        match update {
            FamilyMemberUpdate::Relationship(relationship) => self.relationship = relationship,
            FamilyMemberUpdate::Name(name) => self.name = name,
            FamilyMemberUpdate::IsDeceased(is_deceased) => self.is_deceased = is_deceased,
        }
    }
}

/// A single-field edit to a [`FamilyMember`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum FamilyMemberUpdate {
    Relationship(Relationship),
    Name(String),
    IsDeceased(bool),
}

impl FamilyMemberUpdate {
    /// Builds an update from a field name and its textual value, as they
    /// arrive from form inputs.
    pub fn parse(field: &str, value: &str) -> Result<Self, WizardError> {
        match field {
            "relationship" => Ok(Self::Relationship(value.parse()?)),
            "name" => Ok(Self::Name(value.to_string())),
            "isDeceased" | "is_deceased" => match value.trim() {
                "true" | "yes" | "1" => Ok(Self::IsDeceased(true)),
                "false" | "no" | "0" | "" => Ok(Self::IsDeceased(false)),
                other => Err(WizardError::new(
                    crate::error::ErrorCode::InvalidCommand,
                    format!("isDeceased expects a boolean, got '{other}'"),
                )),
            },
            other => Err(WizardError::unknown_field(other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiographicalField {
    FullName,
    PreferredName,
    Gender,
    DateOfBirth,
    DateOfPassing,
    BirthPlace,
    PassingPlace,
    Description,
}

impl BiographicalField {
    pub const ALL: [BiographicalField; 8] = [
        BiographicalField::FullName,
        BiographicalField::PreferredName,
        BiographicalField::Gender,
        BiographicalField::DateOfBirth,
        BiographicalField::DateOfPassing,
        BiographicalField::BirthPlace,
        BiographicalField::PassingPlace,
        BiographicalField::Description,
    ];

    pub fn wire_name(self) -> &'static str {
        match self {
            BiographicalField::FullName => "fullName",
            BiographicalField::PreferredName => "preferredName",
            BiographicalField::Gender => "gender",
            BiographicalField::DateOfBirth => "dateOfBirth",
            BiographicalField::DateOfPassing => "dateOfPassing",
            BiographicalField::BirthPlace => "birthPlace",
            BiographicalField::PassingPlace => "passingPlace",
            BiographicalField::Description => "description",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BiographicalField::FullName => "Full Name",
            BiographicalField::PreferredName => "Preferred Name",
            BiographicalField::Gender => "Pronouns",
            BiographicalField::DateOfBirth => "Date of Birth",
            BiographicalField::DateOfPassing => "Date of Passing",
            BiographicalField::BirthPlace => "Place of Birth",
            BiographicalField::PassingPlace => "Place of Passing",
            BiographicalField::Description => "Brief Description",
        }
    }

    pub fn is_date(self) -> bool {
        matches!(
            self,
            BiographicalField::DateOfBirth | BiographicalField::DateOfPassing
        )
    }
}

impl fmt::Display for BiographicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

impl FromStr for BiographicalField {
    type Err = WizardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized: String = value
            .trim()
            .chars()
            .filter(|c| *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Self::ALL
            .into_iter()
            .find(|field| field.wire_name().to_ascii_lowercase() == normalized)
            .ok_or_else(|| WizardError::unknown_field(value))
    }
}

/// Biographical answers. Empty strings mean "not provided"; dates are ISO
/// `YYYY-MM-DD` strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Biography {
    pub full_name: String,
    pub preferred_name: String,
    pub gender: String,
    pub date_of_birth: String,
    pub date_of_passing: String,
    pub birth_place: String,
    pub passing_place: String,
    pub description: String,
}

impl Biography {
    pub fn get(&self, field: BiographicalField) -> &str {
        match field {
            BiographicalField::FullName => &self.full_name,
            BiographicalField::PreferredName => &self.preferred_name,
            BiographicalField::Gender => &self.gender,
            BiographicalField::DateOfBirth => &self.date_of_birth,
            BiographicalField::DateOfPassing => &self.date_of_passing,
            BiographicalField::BirthPlace => &self.birth_place,
            BiographicalField::PassingPlace => &self.passing_place,
            BiographicalField::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: BiographicalField, value: impl Into<String>) {
        let slot = match field {
            BiographicalField::FullName => &mut self.full_name,
            BiographicalField::PreferredName => &mut self.preferred_name,
            BiographicalField::Gender => &mut self.gender,
            BiographicalField::DateOfBirth => &mut self.date_of_birth,
            BiographicalField::DateOfPassing => &mut self.date_of_passing,
            BiographicalField::BirthPlace => &mut self.birth_place,
            BiographicalField::PassingPlace => &mut self.passing_place,
            BiographicalField::Description => &mut self.description,
        };
        *slot = value.into();
    }
}

/// Everything the wizard has collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormState {
    pub option: EntryOption,
    pub imported_text: String,
    pub form_data: Biography,
    pub selected_traits: Vec<String>,
    pub family_members: Vec<FamilyMember>,
    pub events: Vec<LifeStoryEvent>,
}

impl FormState {
    pub fn has_trait(&self, label: &str) -> bool {
        self.selected_traits.iter().any(|t| t == label)
    }

    pub fn living_members(&self) -> impl Iterator<Item = &FamilyMember> {
        self.family_members.iter().filter(|m| !m.is_deceased)
    }

    pub fn deceased_members(&self) -> impl Iterator<Item = &FamilyMember> {
        self.family_members.iter().filter(|m| m.is_deceased)
    }
}

/// Top-level replacement values; `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormStatePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<EntryOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub imported_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_data: Option<Biography>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_traits: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_members: Option<Vec<FamilyMember>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<LifeStoryEvent>>,
}

impl FormStatePatch {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
