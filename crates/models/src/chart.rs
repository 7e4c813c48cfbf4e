use crate::statistics::{DepartmentCount, StatisticsReport, YearCount, YearGenderCount};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Share of all students that have graduated, as a whole percentage
pub fn graduation_rate(graduated: u64, total: u64) -> u64 {
    if total == 0 {
        return 0;
    }

    (graduated as f64 / total as f64 * 100.0).round() as u64
}

/// One bar of the graduates-by-year chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct YearBar {
    pub year: i32,
    pub graduates: u64,
}

pub fn year_bars(rows: &[YearCount]) -> Vec<YearBar> {
    rows.iter()
        .map(|row| YearBar {
            year: row.graduation_year,
            graduates: row.count,
        })
        .collect()
}

/// One year of the graduates-by-year-and-gender chart
///
/// Each gender label becomes its own column next to `year`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenderChartRow {
    pub year: i32,
    #[serde(flatten)]
    pub counts: BTreeMap<String, u64>,
}

/// Pivots per-(year, gender) counts into one row per year, oldest first
pub fn pivot_by_gender(rows: &[YearGenderCount]) -> Vec<GenderChartRow> {
    let mut by_year: BTreeMap<i32, BTreeMap<String, u64>> = BTreeMap::new();

    for row in rows {
        *by_year
            .entry(row.graduation_year)
            .or_default()
            .entry(row.gender.clone())
            .or_default() += row.count;
    }

    by_year
        .into_iter()
        .map(|(year, counts)| GenderChartRow { year, counts })
        .collect()
}

/// A department's size relative to the whole student body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DepartmentShare {
    pub department: String,
    pub count: u64,
    pub percent: f64,
}

pub fn department_shares(rows: &[DepartmentCount], total: u64) -> Vec<DepartmentShare> {
    rows.iter()
        .map(|row| DepartmentShare {
            department: row.department.clone(),
            count: row.count,
            percent: if total == 0 {
                0.0
            } else {
                row.count as f64 / total as f64 * 100.0
            },
        })
        .collect()
}

/// Everything the statistics dashboard draws, derived from a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub total: u64,
    pub graduated: u64,
    pub enrolled: u64,
    pub graduation_rate: u64,
    pub graduates_by_year: Vec<YearBar>,
    /// One object per year: `year` plus a count per gender label
    #[cfg_attr(feature = "openapi", schema(value_type = Vec<Object>))]
    pub graduates_by_year_and_gender: Vec<GenderChartRow>,
    pub departments: Vec<DepartmentShare>,
}

impl From<&StatisticsReport> for Dashboard {
    fn from(report: &StatisticsReport) -> Self {
        let overview = report.overview;

        Self {
            total: overview.total,
            graduated: overview.graduated,
            enrolled: overview.enrolled,
            graduation_rate: graduation_rate(overview.graduated, overview.total),
            graduates_by_year: year_bars(&report.graduation_by_year),
            graduates_by_year_and_gender: pivot_by_gender(&report.graduation_by_year_and_gender),
            departments: department_shares(&report.by_department, overview.total),
        }
    }
}
