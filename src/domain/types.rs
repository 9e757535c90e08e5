//! Strongly-typed value objects used by domain entities.
//!
//! Domain structs carry these wrappers instead of raw primitives so that
//! identifiers, text values and numeric constraints are enforced at the
//! boundary.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;
use validator::ValidateUrl;

/// Errors produced when attempting to construct constrained domain types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// An identifier was zero or negative.
    #[error("{0} must be greater than zero")]
    NonPositiveId(&'static str),
    /// A numeric value required to be non-negative was negative or invalid.
    #[error("{0} must be zero or greater")]
    NegativeNumber(&'static str),
    /// A string was empty or whitespace-only after trimming.
    #[error("{0} cannot be empty")]
    EmptyString(&'static str),
    /// URL validation failed.
    #[error("{0} must be a valid URL")]
    InvalidUrl(&'static str),
    /// Catch-all for custom validation failures.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

fn trim_and_require_non_empty<S: Into<String>>(
    value: S,
    field: &'static str,
) -> Result<String, TypeConstraintError> {
    let trimmed = value.into().trim().to_string();
    if trimmed.is_empty() {
        Err(TypeConstraintError::EmptyString(field))
    } else {
        Ok(trimmed)
    }
}

macro_rules! id_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(
            Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Creates a new identifier ensuring it is greater than zero.
            pub fn new(value: i32) -> Result<Self, TypeConstraintError> {
                if value > 0 {
                    Ok(Self(value))
                } else {
                    Err(TypeConstraintError::NonPositiveId($field))
                }
            }

            /// Returns the raw `i32` backing this identifier.
            pub const fn get(self) -> i32 {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i32> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr, $field:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                trim_and_require_non_empty(value, $field).map(Self)
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.as_str()
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

id_newtype!(HotspotId, "Unique identifier for a hotspot.", "hotspot_id");

non_empty_string_newtype!(
    HotspotName,
    "Hotspot display name enforcing non-empty values.",
    "name"
);
non_empty_string_newtype!(
    HotspotLocation,
    "Free-form place name or city enforcing non-empty values.",
    "location"
);
non_empty_string_newtype!(
    HotspotDescription,
    "Hotspot description enforcing non-empty values.",
    "description"
);

/// URL of the uploaded hotspot image.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct ImageUrl(String);

impl ImageUrl {
    /// Constructs a trimmed URL and validates its format.
    pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let trimmed = trim_and_require_non_empty(value, "image")?;
        if !trimmed.as_str().validate_url() {
            return Err(TypeConstraintError::InvalidUrl("image"));
        }
        Ok(Self(trimmed))
    }

    /// Borrow the URL as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned URL.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for ImageUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for ImageUrl {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ImageUrl {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ImageUrl> for String {
    fn from(value: ImageUrl) -> Self {
        value.0
    }
}

/// Non-negative average spend per person, in unspecified currency units.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, PartialOrd)]
#[serde(transparent)]
pub struct AverageSpend(f64);

impl AverageSpend {
    /// Constructs a finite numeric value that is zero or greater.
    pub fn new(value: f64) -> Result<Self, TypeConstraintError> {
        if value.is_finite() && value >= 0.0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeNumber("average spend"))
        }
    }

    /// Returns the raw `f64` value.
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Display for AverageSpend {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for AverageSpend {
    type Error = TypeConstraintError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<AverageSpend> for f64 {
    fn from(value: AverageSpend) -> Self {
        value.0
    }
}

/// Name of the contributor who submitted a hotspot.
///
/// Optional in submissions; blank or missing values fall back to the
/// `"Anonymous"` sentinel, so construction never fails.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct AddedBy(String);

impl AddedBy {
    /// Sentinel used when a submitter leaves the field blank.
    pub const ANONYMOUS: &'static str = "Anonymous";

    /// Trims the input, substituting the anonymous sentinel when blank.
    pub fn new<S: Into<String>>(value: S) -> Self {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            Self::anonymous()
        } else {
            Self(trimmed)
        }
    }

    /// The default anonymous contributor.
    pub fn anonymous() -> Self {
        Self(Self::ANONYMOUS.to_string())
    }

    /// Borrow the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the owned string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Default for AddedBy {
    fn default() -> Self {
        Self::anonymous()
    }
}

impl Display for AddedBy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<AddedBy> for String {
    fn from(value: AddedBy) -> Self {
        value.0
    }
}

/// Fixed set of hotspot categories.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Food,
    Parks,
    Nightlife,
    Shopping,
    Culture,
    Activities,
}

impl Category {
    /// String representation used in persistence and on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Parks => "parks",
            Self::Nightlife => "nightlife",
            Self::Shopping => "shopping",
            Self::Culture => "culture",
            Self::Activities => "activities",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "food" => Ok(Self::Food),
            "parks" => Ok(Self::Parks),
            "nightlife" => Ok(Self::Nightlife),
            "shopping" => Ok(Self::Shopping),
            "culture" => Ok(Self::Culture),
            "activities" => Ok(Self::Activities),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "category: {other}"
            ))),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = TypeConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.as_str().to_string()
    }
}
