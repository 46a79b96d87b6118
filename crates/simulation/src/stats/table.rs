//! Column-addressed access to `[header, ...rows]` JSON tables.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::error::StatsError;

/// A table as shipped: a header row of column names followed by data rows
/// of loosely typed cells.
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

/// A resolved column position. Obtained once per decode, before the rows
/// are walked.
#[derive(Debug, Clone, Copy)]
pub struct Column<'t> {
    name: &'t str,
    index: usize,
}

impl Table {
    pub fn read(dir: &Path, file: &str) -> Result<Self, StatsError> {
        let path = dir.join(file);
        let text = fs::read_to_string(&path).map_err(|source| StatsError::Io { path, source })?;
        Self::parse(file, &text)
    }

    pub fn parse(name: &str, json: &str) -> Result<Self, StatsError> {
        let mut rows: Vec<Vec<Value>> =
            serde_json::from_str(json).map_err(|source| StatsError::Json {
                table: name.to_string(),
                source,
            })?;
        if rows.is_empty() {
            return Err(StatsError::EmptyTable(name.to_string()));
        }
        let columns = rows
            .remove(0)
            .into_iter()
            .map(|cell| match cell {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .collect();
        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column<'t>(&'t self, column: &str) -> Result<Column<'t>, StatsError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|index| Column {
                name: &self.columns[index],
                index,
            })
            .ok_or_else(|| StatsError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().enumerate().map(move |(i, cells)| Row {
            table: &self.name,
            // Row 0 is the header.
            number: i + 1,
            cells,
        })
    }
}

/// One data row with typed cell accessors.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a str,
    number: usize,
    cells: &'a [Value],
}

impl<'a> Row<'a> {
    fn cell(&self, column: Column<'_>) -> Option<&'a Value> {
        self.cells.get(column.index).filter(|v| !v.is_null())
    }

    pub fn invalid(&self, column: Column<'_>, expected: &'static str) -> StatsError {
        StatsError::BadValue {
            table: self.table.to_string(),
            row: self.number,
            column: column.name.to_string(),
            expected,
        }
    }

    pub fn str(&self, column: Column<'_>) -> Result<&'a str, StatsError> {
        self.opt_str(column)?.ok_or_else(|| self.invalid(column, "a string"))
    }

    /// A string cell that may be null or absent.
    pub fn opt_str(&self, column: Column<'_>) -> Result<Option<&'a str>, StatsError> {
        match self.cell(column) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(self.invalid(column, "a string")),
        }
    }

    /// A numeric cell. Numbers written as strings are accepted.
    pub fn f64(&self, column: Column<'_>) -> Result<f64, StatsError> {
        let value = match self.cell(column) {
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        };
        value
            .filter(|v| v.is_finite())
            .ok_or_else(|| self.invalid(column, "a number"))
    }

    /// A whole, non-negative number. Integral floats such as `1.0` count.
    pub fn u32(&self, column: Column<'_>) -> Result<u32, StatsError> {
        let value = self.f64(column)?;
        if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
            return Err(self.invalid(column, "a whole non-negative number"));
        }
        Ok(value as u32)
    }

    pub fn i32(&self, column: Column<'_>) -> Result<i32, StatsError> {
        let value = self.f64(column)?;
        if value.fract() != 0.0 || value < i32::MIN as f64 || value > i32::MAX as f64 {
            return Err(self.invalid(column, "a whole number"));
        }
        Ok(value as i32)
    }

    pub fn number(&self) -> usize {
        self.number
    }
}
