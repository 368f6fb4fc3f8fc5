//! Core domain layer. No external I/O dependencies.
//!
//! Entities, the report aggregate and the error taxonomy live here.

pub mod entities;
pub mod errors;
pub mod report;

pub use entities::{Employee, EmployeeId, TodoItem};
pub use errors::ReportError;
pub use report::Report;
