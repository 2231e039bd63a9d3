pub mod report;
pub mod schema_guard;
