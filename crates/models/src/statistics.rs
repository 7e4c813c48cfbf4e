use serde::{Deserialize, Serialize};

/// Number of students graduating in a given year
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct YearCount {
    pub graduation_year: i32,
    pub count: u64,
}

/// Number of students of one gender graduating in a given year
///
/// Gender is kept as the stored label so that values outside the known set
/// still reach reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct YearGenderCount {
    pub graduation_year: i32,
    pub gender: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCount {
    pub department: String,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Overview {
    pub total: u64,
    pub graduated: u64,
    pub enrolled: u64,
}

/// Aggregate graduation statistics, computed fresh on every request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct StatisticsReport {
    /// Ordered by year, newest first
    pub graduation_by_year: Vec<YearCount>,
    /// Ordered by year descending, then gender ascending
    pub graduation_by_year_and_gender: Vec<YearGenderCount>,
    pub overview: Overview,
    pub by_department: Vec<DepartmentCount>,
}
