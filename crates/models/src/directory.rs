//! Search and year filtering for the student directory table.

use crate::student::Gender;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeSet, convert::Infallible, str::FromStr};

/// Sentinel year filter value that lets every record through
pub const ALL_YEARS: &str = "ALL";

/// The fields a directory row exposes to filtering
pub trait DirectoryEntry {
    fn first_name(&self) -> &str;
    fn last_name(&self) -> &str;
    fn email(&self) -> &str;
    fn student_id(&self) -> &str;
    fn department(&self) -> &str;
    fn graduation_year(&self) -> Option<i32>;
    fn gender(&self) -> Option<Gender>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum YearFilter {
    #[default]
    All,
    Year(String),
}

impl FromStr for YearFilter {
    type Err = Infallible;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value == ALL_YEARS {
            Ok(Self::All)
        } else {
            Ok(Self::Year(value.to_string()))
        }
    }
}

impl YearFilter {
    pub fn matches(&self, graduation_year: Option<i32>) -> bool {
        match self {
            Self::All => true,
            Self::Year(year) => graduation_year.is_some_and(|y| y.to_string() == *year),
        }
    }
}

/// Free-text query combined with a graduation year filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentFilter {
    pub query: String,
    pub year: YearFilter,
}

impl StudentFilter {
    pub fn new(query: Option<&str>, year: Option<&str>) -> Self {
        Self {
            query: query.unwrap_or_default().to_string(),
            year: year
                .and_then(|year| YearFilter::from_str(year).ok())
                .unwrap_or_default(),
        }
    }

    /// Case-insensitive substring match over names, email, student ID,
    /// department and graduation year
    pub fn matches_query<E: DirectoryEntry>(&self, entry: &E) -> bool {
        let needle = self.query.to_lowercase();

        [
            entry.first_name(),
            entry.last_name(),
            entry.email(),
            entry.student_id(),
            entry.department(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
            || entry
                .graduation_year()
                .is_some_and(|year| year.to_string().contains(&self.query))
    }

    pub fn matches<E: DirectoryEntry>(&self, entry: &E) -> bool {
        self.matches_query(entry) && self.year.matches(entry.graduation_year())
    }

    pub fn apply<'a, E: DirectoryEntry>(&self, entries: &'a [E]) -> Vec<&'a E> {
        entries.iter().filter(|entry| self.matches(*entry)).collect()
    }
}

/// Distinct graduation years present in `entries`, newest first
pub fn selectable_years<E: DirectoryEntry>(entries: &[E]) -> Vec<i32> {
    let years: BTreeSet<i32> = entries.iter().filter_map(|e| e.graduation_year()).collect();
    years.into_iter().rev().collect()
}

/// Head counts shown above the directory table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct GenderTally {
    pub male: usize,
    pub female: usize,
    pub total: usize,
}

impl GenderTally {
    pub fn count<'a, E, I>(entries: I) -> Self
    where
        E: DirectoryEntry + 'a,
        I: IntoIterator<Item = &'a E>,
    {
        entries
            .into_iter()
            .fold(Self::default(), |mut tally, entry| {
                match entry.gender() {
                    Some(Gender::Male) => tally.male += 1,
                    Some(Gender::Female) => tally.female += 1,
                    _ => {}
                }
                tally.total += 1;
                tally
            })
    }
}
