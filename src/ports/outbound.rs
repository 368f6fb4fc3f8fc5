//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{Employee, EmployeeId, ReportError, TodoItem};

/// Employee directory. Source of employee records and their to-do lists.
#[async_trait::async_trait]
pub trait DirectoryPort: Send + Sync {
    /// Fetch one employee record.
    ///
    /// # Errors
    /// `ReportError::NotFound` when the directory answers with a non-success
    /// status; `Network` or `MalformedResponse` for transport and body failures.
    async fn fetch_employee(&self, id: EmployeeId) -> Result<Employee, ReportError>;

    /// Fetch the employee's to-do items in directory order.
    ///
    /// # Errors
    /// `ReportError::FetchFailure` on a non-success status.
    async fn fetch_todos(&self, id: EmployeeId) -> Result<Vec<TodoItem>, ReportError>;
}
