use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::hotspot::{HotspotPatch, NewHotspot};
use crate::domain::types::{
    AddedBy, AverageSpend, Category, HotspotDescription, HotspotLocation, HotspotName, ImageUrl,
    TypeConstraintError,
};

/// Editable fields of a hotspot submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Location,
    Category,
    Description,
    AverageSpend,
    Image,
    AddedBy,
}

impl FormField {
    /// Wire-format key for the field, matching the JSON payload names.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Location => "location",
            Self::Category => "category",
            Self::Description => "description",
            Self::AverageSpend => "averageSpend",
            Self::Image => "image",
            Self::AddedBy => "addedBy",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Raw average-spend input, parsed explicitly instead of coerced.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum SpendInput {
    /// Field left blank.
    #[default]
    Empty,
    /// Non-empty text that does not parse as a finite number.
    Invalid,
    /// Successfully parsed amount. May still be negative.
    Amount(f64),
}

impl SpendInput {
    /// Parse raw text input: blank stays blank, garbage is rejected.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Amount(value),
            _ => Self::Invalid,
        }
    }
}

/// In-progress, not-yet-persisted hotspot submission.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotDraft {
    pub name: String,
    pub location: String,
    pub category: String,
    pub description: String,
    pub average_spend: SpendInput,
    pub image: String,
    pub added_by: String,
}

impl Default for HotspotDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            location: String::new(),
            category: String::new(),
            description: String::new(),
            average_spend: SpendInput::Empty,
            image: String::new(),
            added_by: AddedBy::ANONYMOUS.to_string(),
        }
    }
}

impl HotspotDraft {
    /// Check every constraint independently and return a message per
    /// violated field. An empty map means the draft is acceptable.
    pub fn validate(&self) -> HashMap<FormField, String> {
        let mut errors = HashMap::new();

        if self.name.trim().is_empty() {
            errors.insert(FormField::Name, "Name is required".to_string());
        }
        if self.location.trim().is_empty() {
            errors.insert(FormField::Location, "Location is required".to_string());
        }
        if Category::try_from(self.category.as_str()).is_err() {
            errors.insert(FormField::Category, "Category is required".to_string());
        }
        if self.description.trim().is_empty() {
            errors.insert(
                FormField::Description,
                "Description is required".to_string(),
            );
        }
        match self.average_spend {
            SpendInput::Empty | SpendInput::Invalid => {
                errors.insert(
                    FormField::AverageSpend,
                    "Average spend amount is required".to_string(),
                );
            }
            SpendInput::Amount(value) if value < 0.0 => {
                errors.insert(
                    FormField::AverageSpend,
                    "Average spend cannot be negative".to_string(),
                );
            }
            SpendInput::Amount(_) => {}
        }
        if self.image.is_empty() {
            errors.insert(FormField::Image, "An image is required".to_string());
        }
        // `added_by` is optional and never produces an error.

        errors
    }

    /// Convert a validated draft into a creatable record.
    ///
    /// Expects [`Self::validate`] to have returned an empty map; constraint
    /// failures that slip through surface as typed errors.
    pub fn to_new_hotspot(&self) -> Result<NewHotspot, TypeConstraintError> {
        let average_spend = match self.average_spend {
            SpendInput::Amount(value) => AverageSpend::new(value)?,
            SpendInput::Empty | SpendInput::Invalid => {
                return Err(TypeConstraintError::EmptyString("average spend"));
            }
        };

        let now = Utc::now().naive_utc();
        Ok(NewHotspot {
            name: HotspotName::new(self.name.clone())?,
            location: HotspotLocation::new(self.location.clone())?,
            category: Category::try_from(self.category.as_str())?,
            description: HotspotDescription::new(self.description.clone())?,
            average_spend,
            image: ImageUrl::new(self.image.clone())?,
            added_by: AddedBy::new(self.added_by.clone()),
            created_at: now,
            updated_at: now,
        })
    }
}

fn default_added_by() -> String {
    AddedBy::ANONYMOUS.to_string()
}

/// JSON body accepted by the creation endpoint.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitHotspotForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub location: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub average_spend: f64,
    #[validate(url)]
    pub image: String,
    #[serde(default = "default_added_by")]
    pub added_by: String,
}

/// Typed payload produced from a valid [`SubmitHotspotForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitHotspotFormPayload {
    pub name: HotspotName,
    pub location: HotspotLocation,
    pub category: Category,
    pub description: HotspotDescription,
    pub average_spend: AverageSpend,
    pub image: ImageUrl,
    pub added_by: AddedBy,
}

impl SubmitHotspotFormPayload {
    pub fn into_new_hotspot(self) -> NewHotspot {
        let now = Utc::now().naive_utc();
        NewHotspot {
            name: self.name,
            location: self.location,
            category: self.category,
            description: self.description,
            average_spend: self.average_spend,
            image: self.image,
            added_by: self.added_by,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Error)]
pub enum SubmitHotspotFormError {
    #[error("Hotspot form validation failed: {0}")]
    Validation(String),
    #[error("Hotspot form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for SubmitHotspotFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for SubmitHotspotFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<SubmitHotspotForm> for SubmitHotspotFormPayload {
    type Error = SubmitHotspotFormError;

    fn try_from(value: SubmitHotspotForm) -> Result<Self, Self::Error> {
        value.validate()?;

        Ok(Self {
            name: HotspotName::new(value.name)?,
            location: HotspotLocation::new(value.location)?,
            category: Category::try_from(value.category)?,
            description: HotspotDescription::new(value.description)?,
            average_spend: AverageSpend::new(value.average_spend)?,
            image: ImageUrl::new(value.image)?,
            added_by: AddedBy::new(value.added_by),
        })
    }
}

/// JSON body accepted by the replace endpoint; all fields optional.
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHotspotForm {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub location: Option<String>,
    #[validate(length(min = 1))]
    pub category: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    #[validate(range(min = 0.0))]
    pub average_spend: Option<f64>,
    #[validate(url)]
    pub image: Option<String>,
    pub added_by: Option<String>,
}

/// Typed payload produced from a valid [`UpdateHotspotForm`].
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateHotspotFormPayload {
    pub patch: HotspotPatch,
}

#[derive(Debug, Error)]
pub enum UpdateHotspotFormError {
    #[error("Update hotspot form validation failed: {0}")]
    Validation(String),
    #[error("Update hotspot form contains invalid data: {0}")]
    TypeConstraint(String),
}

impl From<ValidationErrors> for UpdateHotspotFormError {
    fn from(value: ValidationErrors) -> Self {
        Self::Validation(value.to_string())
    }
}

impl From<TypeConstraintError> for UpdateHotspotFormError {
    fn from(value: TypeConstraintError) -> Self {
        Self::TypeConstraint(value.to_string())
    }
}

impl TryFrom<UpdateHotspotForm> for UpdateHotspotFormPayload {
    type Error = UpdateHotspotFormError;

    fn try_from(value: UpdateHotspotForm) -> Result<Self, Self::Error> {
        value.validate()?;

        let patch = HotspotPatch {
            name: value.name.map(HotspotName::new).transpose()?,
            location: value.location.map(HotspotLocation::new).transpose()?,
            category: value.category.map(Category::try_from).transpose()?,
            description: value
                .description
                .map(HotspotDescription::new)
                .transpose()?,
            average_spend: value.average_spend.map(AverageSpend::new).transpose()?,
            image: value.image.map(ImageUrl::new).transpose()?,
            added_by: value.added_by.map(AddedBy::new),
        };

        Ok(Self { patch })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> HotspotDraft {
        HotspotDraft {
            name: "Cafe X".to_string(),
            location: "Lisbon".to_string(),
            category: "food".to_string(),
            description: "Nice".to_string(),
            average_spend: SpendInput::Amount(10.0),
            image: "http://x/y.png".to_string(),
            added_by: AddedBy::ANONYMOUS.to_string(),
        }
    }

    #[test]
    fn complete_draft_has_no_errors() {
        assert!(complete_draft().validate().is_empty());
    }

    #[test]
    fn missing_location_is_the_only_error() {
        let mut draft = complete_draft();
        draft.location = String::new();

        let errors = draft.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&FormField::Location).map(String::as_str),
            Some("Location is required")
        );
    }

    #[test]
    fn negative_spend_is_the_only_error() {
        let mut draft = complete_draft();
        draft.average_spend = SpendInput::Amount(-5.0);

        let errors = draft.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(&FormField::AverageSpend).map(String::as_str),
            Some("Average spend cannot be negative")
        );
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = HotspotDraft::default().validate();

        for field in [
            FormField::Name,
            FormField::Location,
            FormField::Category,
            FormField::Description,
            FormField::AverageSpend,
            FormField::Image,
        ] {
            assert!(errors.contains_key(&field), "missing error for {field}");
        }
        assert!(!errors.contains_key(&FormField::AddedBy));
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn unparsable_spend_counts_as_missing() {
        let mut draft = complete_draft();
        draft.average_spend = SpendInput::parse("lots");

        let errors = draft.validate();
        assert_eq!(
            errors.get(&FormField::AverageSpend).map(String::as_str),
            Some("Average spend amount is required")
        );
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut draft = complete_draft();
        draft.category = "casinos".to_string();

        let errors = draft.validate();
        assert_eq!(
            errors.get(&FormField::Category).map(String::as_str),
            Some("Category is required")
        );
    }

    #[test]
    fn spend_input_parses_explicitly() {
        assert_eq!(SpendInput::parse(""), SpendInput::Empty);
        assert_eq!(SpendInput::parse("  "), SpendInput::Empty);
        assert_eq!(SpendInput::parse("abc"), SpendInput::Invalid);
        assert_eq!(SpendInput::parse(" 12.5 "), SpendInput::Amount(12.5));
        assert_eq!(SpendInput::parse("-3"), SpendInput::Amount(-3.0));
    }

    #[test]
    fn valid_draft_converts_to_new_hotspot() {
        let new_hotspot = complete_draft().to_new_hotspot().unwrap();
        assert_eq!(new_hotspot.name.as_str(), "Cafe X");
        assert_eq!(new_hotspot.category, Category::Food);
        assert_eq!(new_hotspot.average_spend.get(), 10.0);
        assert_eq!(new_hotspot.added_by.as_str(), "Anonymous");
    }

    #[test]
    fn submit_form_rejects_negative_spend() {
        let form = SubmitHotspotForm {
            name: "Cafe X".to_string(),
            location: "Lisbon".to_string(),
            category: "food".to_string(),
            description: "Nice".to_string(),
            average_spend: -5.0,
            image: "http://x/y.png".to_string(),
            added_by: "Anonymous".to_string(),
        };

        let payload: Result<SubmitHotspotFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }

    #[test]
    fn update_form_produces_partial_patch() {
        let form = UpdateHotspotForm {
            name: Some("New Name".to_string()),
            location: None,
            category: Some("parks".to_string()),
            description: None,
            average_spend: Some(0.0),
            image: None,
            added_by: None,
        };

        let payload: UpdateHotspotFormPayload = form.try_into().unwrap();
        assert_eq!(
            payload.patch.name.as_ref().map(|n| n.as_str()),
            Some("New Name")
        );
        assert_eq!(payload.patch.category, Some(Category::Parks));
        assert_eq!(payload.patch.average_spend.map(f64::from), Some(0.0));
        assert!(payload.patch.location.is_none());
        assert!(!payload.patch.is_empty());
    }

    #[test]
    fn update_form_rejects_unknown_category() {
        let form = UpdateHotspotForm {
            name: None,
            location: None,
            category: Some("casinos".to_string()),
            description: None,
            average_spend: None,
            image: None,
            added_by: None,
        };

        let payload: Result<UpdateHotspotFormPayload, _> = form.try_into();
        assert!(payload.is_err());
    }
}
