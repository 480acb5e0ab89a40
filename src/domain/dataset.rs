// Tabular datasets and time series produced by the mock generators
use super::error::DomainError;
use super::metric::{format_currency_cents, format_thousands};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Cell {
    Text(String),
    Integer(i64),
    /// US dollars
    Money(f64),
    Decimal(f64),
    Date(NaiveDate),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Integer(v) => Some(*v as f64),
            Cell::Money(v) | Cell::Decimal(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Cell::Date(d) => Some(*d),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Text(s) => f.write_str(s),
            Cell::Integer(v) => f.write_str(&format_thousands(*v)),
            Cell::Money(v) => f.write_str(&format_currency_cents(*v)),
            Cell::Decimal(v) => write!(f, "{:.2}", v),
            Cell::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Cell>,
}

/// Ordered, named columns of equal length.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TabularDataset {
    columns: Vec<Column>,
}

impl TabularDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. The first column fixes the row count.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        values: Vec<Cell>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if self.column(&name).is_some() {
            return Err(DomainError::DuplicateColumn { column: name });
        }
        if let Some(first) = self.columns.first() {
            if first.values.len() != values.len() {
                return Err(DomainError::ColumnLengthMismatch {
                    column: name,
                    expected: first.values.len(),
                    actual: values.len(),
                });
            }
        }
        self.columns.push(Column { name, values });
        Ok(self)
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn row_count(&self) -> usize {
        self.columns.first().map(|c| c.values.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.row_count()).map(move |index| Row {
            dataset: self,
            index,
        })
    }

    /// Check that every named column is present, reporting all that are not.
    pub fn require_columns(&self, required: &[&str]) -> Result<(), DomainError> {
        let missing: Vec<String> = required
            .iter()
            .filter(|name| self.column(name).is_none())
            .map(|name| name.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(DomainError::MissingColumns { missing })
        }
    }

    /// Copy of the dataset keeping only rows accepted by `predicate`.
    pub fn filter_rows(&self, predicate: impl Fn(&Row<'_>) -> bool) -> TabularDataset {
        let keep: Vec<usize> = self
            .rows()
            .filter(|row| predicate(row))
            .map(|row| row.index)
            .collect();

        let columns = self
            .columns
            .iter()
            .map(|c| Column {
                name: c.name.clone(),
                values: keep.iter().map(|&i| c.values[i].clone()).collect(),
            })
            .collect();

        TabularDataset { columns }
    }

    /// Number of rows whose `column` value satisfies `predicate`; zero when
    /// the column is absent.
    pub fn count_where(&self, column: &str, predicate: impl Fn(&Cell) -> bool) -> usize {
        self.column(column)
            .map(|c| c.values.iter().filter(|v| predicate(v)).count())
            .unwrap_or(0)
    }
}

/// Borrowed view of one dataset row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    dataset: &'a TabularDataset,
    index: usize,
}

impl<'a> Row<'a> {
    pub fn get(&self, column: &str) -> Option<&'a Cell> {
        self.dataset
            .column(column)
            .and_then(|c| c.values.get(self.index))
    }

    pub fn cells(&self) -> impl Iterator<Item = &'a Cell> {
        let index = self.index;
        self.dataset
            .columns
            .iter()
            .filter_map(move |c| c.values.get(index))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    pub name: String,
    pub points: Vec<SeriesPoint>,
}

impl TimeSeries {
    pub fn new(name: impl Into<String>, points: Vec<SeriesPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// A labelled value used for bar and waterfall charts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryValue {
    pub label: String,
    pub value: f64,
}

impl CategoryValue {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
