//! Progress report. Aggregation over fetched to-do items and text rendering.

use super::entities::{Employee, TodoItem};
use std::fmt;

/// Completion summary for one employee.
///
/// Counts are derived from the fetched item sequence in `from_items`;
/// there is no way to build a report with `completed > total`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    employee_name: String,
    total: usize,
    completed_titles: Vec<String>,
}

impl Report {
    pub fn from_items(employee: &Employee, items: &[TodoItem]) -> Self {
        let completed_titles = items
            .iter()
            .filter(|item| item.completed)
            .map(|item| item.title.clone())
            .collect();
        Self {
            employee_name: employee.name.clone(),
            total: items.len(),
            completed_titles,
        }
    }

    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn completed(&self) -> usize {
        self.completed_titles.len()
    }

    /// Titles of completed items, in fetch order.
    pub fn completed_titles(&self) -> &[String] {
        &self.completed_titles
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Employee {} is done with tasks({}/{}):",
            self.employee_name,
            self.completed(),
            self.total
        )?;
        for title in &self.completed_titles {
            writeln!(f, "\t {}", title)?;
        }
        Ok(())
    }
}
