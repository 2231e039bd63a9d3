use crate::cell::Cell;
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use strum::{EnumIter, EnumProperty, IntoEnumIterator};

/// The fixed set of reports the service can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, EnumProperty)]
pub enum ReportKind {
    #[strum(props(path = "/", title = "Hotels"))]
    Hotels,
    #[strum(props(path = "/room_count", title = "Room Count per Hotel"))]
    RoomCount,
    #[strum(props(path = "/average_beds", title = "Average Beds per Room"))]
    AverageBeds,
    #[strum(props(path = "/reservations", title = "Reservations per Hotel"))]
    Reservations,
    #[strum(props(path = "/restaurant_types", title = "Restaurant Types per Hotel"))]
    RestaurantTypes,
    #[strum(props(path = "/reservation_counts", title = "Reservation Counts per Hotel"))]
    ReservationCounts,
}

impl ReportKind {
    pub fn path(self) -> &'static str {
        self.get_str("path").unwrap_or_default()
    }

    pub fn title(self) -> &'static str {
        self.get_str("title").unwrap_or_default()
    }

    /// Every report, in navigation order
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl Display for ReportKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.title())
    }
}

/// The outcome of one report query: column headers plus the raw result rows
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Report {
    pub fn new<H>(headers: impl IntoIterator<Item = H>, rows: Vec<Vec<Cell>>) -> Self
    where
        H: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows,
        }
    }

    /// Pairs every row with the headers, in header order
    pub fn records(&self) -> Vec<Record> {
        self.rows
            .iter()
            .map(|row| Record::zip(&self.headers, row))
            .collect()
    }

    /// Returns the cells of the column with the given header
    pub fn column(&self, header: &str) -> Option<Vec<&Cell>> {
        let idx = self.headers.iter().position(|h| h == header)?;
        Some(self.rows.iter().filter_map(|row| row.get(idx)).collect())
    }
}

static EMPTY: Cell = Cell::Null;

/// One result row keyed by header name, keeping the header order
///
/// Zipping stops at the shorter of headers and row. A repeated header keeps
/// its first position and takes the last value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Record {
    entries: Vec<(String, Cell)>,
}

impl Record {
    pub fn zip(headers: &[String], row: &[Cell]) -> Self {
        let mut entries: Vec<(String, Cell)> = Vec::with_capacity(headers.len());

        for (header, cell) in headers.iter().zip(row) {
            match entries.iter().position(|(key, _)| key == header) {
                Some(idx) => entries[idx].1 = cell.clone(),
                None => entries.push((header.clone(), cell.clone())),
            }
        }

        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.entries
            .iter()
            .find(|(header, _)| header == key)
            .map(|(_, cell)| cell)
    }

    /// Like [`Record::get`], but a missing key reads as an empty cell
    pub fn value(&self, key: &str) -> &Cell {
        self.get(key).unwrap_or(&EMPTY)
    }

    pub fn entries(&self) -> &[(String, Cell)] {
        &self.entries
    }
}
