use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A single column value as SQLite stores it
///
/// SQLite columns are dynamically typed, so a report row is a sequence of
/// cells rather than a fixed struct.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Cell {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Null => Ok(()),
            Self::Integer(value) => write!(f, "{value}"),
            // Debug keeps the fractional part, so an average of 2 shows as 2.0
            Self::Real(value) => write!(f, "{value:?}"),
            Self::Text(value) => f.write_str(value),
            Self::Blob(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for Cell {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<Vec<u8>> for Cell {
    fn from(value: Vec<u8>) -> Self {
        Self::Blob(value)
    }
}

impl<T: Into<Cell>> From<Option<T>> for Cell {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn real_keeps_fraction() {
        assert_eq!(Cell::Real(2.0).to_string(), "2.0");
        assert_eq!(Cell::Real(1.5).to_string(), "1.5");
    }

    #[test]
    fn null_renders_empty() {
        assert_eq!(Cell::Null.to_string(), "");
        assert_eq!(Cell::from(None::<String>), Cell::Null);
    }

    #[test]
    fn serializes_untagged() {
        let cells = vec![
            Cell::Integer(100),
            Cell::from("Lotus"),
            Cell::Real(2.5),
            Cell::Null,
        ];

        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[100,"Lotus",2.5,null]"#);
    }
}
