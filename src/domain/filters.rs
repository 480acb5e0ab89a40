// Sidebar filter selection (date range, company, departments)
use super::error::DomainError;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

pub const COMPANY_COUNT: u8 = 5;
pub const DEFAULT_RANGE_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// The `days`-long window ending on `end`.
    pub fn ending_at(end: NaiveDate, days: i64) -> Self {
        Self {
            start: end - Duration::days(days),
            end,
        }
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidDate(value.to_string()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Company {
    #[default]
    All,
    Numbered(u8),
}

impl Company {
    pub fn options() -> Vec<Company> {
        std::iter::once(Company::All)
            .chain((1..=COMPANY_COUNT).map(Company::Numbered))
            .collect()
    }
}

impl fmt::Display for Company {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Company::All => f.write_str("All"),
            Company::Numbered(n) => write!(f, "Company {}", n),
        }
    }
}

impl FromStr for Company {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(Company::All);
        }
        s.strip_prefix("Company ")
            .and_then(|n| n.trim().parse::<u8>().ok())
            .filter(|n| (1..=COMPANY_COUNT).contains(n))
            .map(Company::Numbered)
            .ok_or_else(|| DomainError::UnknownCompany(s.to_string()))
    }
}

impl From<Company> for String {
    fn from(company: Company) -> Self {
        company.to_string()
    }
}

impl TryFrom<String> for Company {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Department {
    Sales,
    Marketing,
    Finance,
    Operations,
    #[serde(rename = "IT")]
    It,
}

impl Department {
    pub const ALL: [Department; 5] = [
        Department::Sales,
        Department::Marketing,
        Department::Finance,
        Department::Operations,
        Department::It,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Department::Sales => "Sales",
            Department::Marketing => "Marketing",
            Department::Finance => "Finance",
            Department::Operations => "Operations",
            Department::It => "IT",
        }
    }

    /// Parse a comma separated multi-select value. Blank entries are ignored.
    pub fn parse_list(value: &str) -> Result<BTreeSet<Department>, DomainError> {
        value
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Department::from_str)
            .collect()
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownDepartment(s.to_string()))
    }
}

/// Filters shown in the sidebar. They are kept per session and echoed back,
/// but no generator reads them yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub date_range: DateRange,
    pub company: Company,
    /// Empty means every department.
    pub departments: BTreeSet<Department>,
}

impl FilterSelection {
    pub fn default_for(as_of: NaiveDate) -> Self {
        Self {
            date_range: DateRange::ending_at(as_of, DEFAULT_RANGE_DAYS),
            company: Company::All,
            departments: BTreeSet::new(),
        }
    }

    /// Build a selection from raw sidebar form values.
    pub fn parse(
        start: &str,
        end: &str,
        company: &str,
        departments: &str,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            date_range: DateRange::new(parse_date(start)?, parse_date(end)?)?,
            company: company.parse()?,
            departments: Department::parse_list(departments)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_covers_last_thirty_days() {
        let filters = FilterSelection::default_for(date(2024, 6, 30));
        assert_eq!(filters.date_range.start, date(2024, 5, 31));
        assert_eq!(filters.date_range.end, date(2024, 6, 30));
        assert_eq!(filters.company, Company::All);
        assert!(filters.departments.is_empty());
    }

    #[test]
    fn test_date_range_rejects_inverted_bounds() {
        let err = DateRange::new(date(2024, 2, 1), date(2024, 1, 1)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidDateRange { .. }));
    }

    #[test]
    fn test_company_options_and_parsing() {
        let labels: Vec<String> = Company::options().iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec!["All", "Company 1", "Company 2", "Company 3", "Company 4", "Company 5"]
        );
        assert_eq!("Company 3".parse::<Company>(), Ok(Company::Numbered(3)));
        assert!("Company 9".parse::<Company>().is_err());
    }

    #[test]
    fn test_parse_form_values() {
        let filters =
            FilterSelection::parse("2024-01-01", "2024-01-31", "Company 2", "IT, sales,,").unwrap();
        assert_eq!(filters.company, Company::Numbered(2));
        assert_eq!(
            filters.departments.into_iter().collect::<Vec<_>>(),
            vec![Department::Sales, Department::It]
        );

        assert_eq!(
            FilterSelection::parse("2024-13-01", "2024-01-31", "All", ""),
            Err(DomainError::InvalidDate("2024-13-01".to_string()))
        );
        assert_eq!(
            FilterSelection::parse("2024-01-01", "2024-01-31", "All", "Legal"),
            Err(DomainError::UnknownDepartment("Legal".to_string()))
        );
    }

    #[test]
    fn test_company_serializes_as_label() {
        let json = serde_json::to_string(&Company::Numbered(4)).unwrap();
        assert_eq!(json, "\"Company 4\"");
        let back: Company = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Company::Numbered(4));
    }
}
