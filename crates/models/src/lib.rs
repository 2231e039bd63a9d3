pub mod cell;
pub mod report;

pub use cell::Cell;
pub use report::{Record, Report, ReportKind};
