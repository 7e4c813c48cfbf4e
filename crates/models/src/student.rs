use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Where a student is in their enrollment lifecycle
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    DeriveActiveEnum,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    #[sea_orm(string_value = "ENROLLED")]
    Enrolled,
    #[sea_orm(string_value = "GRADUATED")]
    Graduated,
    #[sea_orm(string_value = "DROPPED")]
    Dropped,
    #[sea_orm(string_value = "ON_LEAVE")]
    OnLeave,
}

/// Self-reported gender. Stored and displayed using the labels below.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumIter,
    DeriveActiveEnum,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[sea_orm(rs_type = "String", db_type = "Text")]
pub enum Gender {
    #[sea_orm(string_value = "Male")]
    Male,
    #[sea_orm(string_value = "Female")]
    Female,
    #[sea_orm(string_value = "Other")]
    Other,
    #[serde(rename = "Prefer not to say")]
    #[strum(serialize = "Prefer not to say")]
    #[sea_orm(string_value = "Prefer not to say")]
    PreferNotToSay,
}

/// A label read back from the store
///
/// Rows written outside this service may hold text that matches no variant;
/// that text is carried as-is instead of failing the whole read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Label<T> {
    Known(T),
    Unrecognized(String),
}

impl<T> Label<T>
where
    T: ActiveEnum<Value = String>,
{
    pub fn from_stored(text: String) -> Self {
        match T::try_from_value(&text) {
            Ok(known) => Self::Known(known),
            Err(_) => Self::Unrecognized(text),
        }
    }

    pub fn known(self) -> Option<T> {
        match self {
            Self::Known(known) => Some(known),
            Self::Unrecognized(_) => None,
        }
    }
}

impl<T> Display for Label<T>
where
    T: ActiveEnum<Value = String>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Known(known) => f.write_str(&known.to_value()),
            Self::Unrecognized(text) => f.write_str(text),
        }
    }
}
