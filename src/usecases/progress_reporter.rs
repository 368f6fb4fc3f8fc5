//! Progress reporter. Fetches an employee and their to-do list, builds the report.
//!
//! Strictly sequential: the to-do request is only issued after the employee lookup succeeds.

use crate::domain::{EmployeeId, Report, ReportError};
use crate::ports::DirectoryPort;
use std::sync::Arc;
use tracing::info;

/// Service for employee progress reports.
///
/// Orchestrates the flow:
/// 1. Fetch the employee record
/// 2. Fetch the employee's to-do items
/// 3. Aggregate into a `Report`
pub struct ProgressReporter {
    directory: Arc<dyn DirectoryPort>,
}

impl ProgressReporter {
    pub fn new(directory: Arc<dyn DirectoryPort>) -> Self {
        Self { directory }
    }

    /// Build the report for a validated id.
    ///
    /// Holds no state between calls; the same directory data yields the same report.
    pub async fn report(&self, id: EmployeeId) -> Result<Report, ReportError> {
        let employee = self.directory.fetch_employee(id).await?;
        let items = self.directory.fetch_todos(id).await?;

        let report = Report::from_items(&employee, &items);
        info!(
            employee_id = %id,
            total = report.total(),
            completed = report.completed(),
            "report built"
        );
        Ok(report)
    }

    /// Validate a raw command-line argument, then build the report.
    ///
    /// Invalid input fails before any directory call.
    pub async fn report_for_arg(&self, raw: &str) -> Result<Report, ReportError> {
        let id = EmployeeId::parse(raw)?;
        self.report(id).await
    }
}
