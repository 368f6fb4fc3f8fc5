//! In-memory directory. Implements DirectoryPort from fixtures without network calls.
//!
//! Counts calls so tests can assert which requests a flow issued.

use crate::domain::{Employee, EmployeeId, ReportError, TodoItem};
use crate::ports::DirectoryPort;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

struct Record {
    name: String,
    /// `Err` simulates a failing to-do endpoint for an existing employee.
    todos: Result<Vec<TodoItem>, ReportError>,
}

/// Fixture-backed directory.
#[derive(Default)]
pub struct InMemoryDirectory {
    records: HashMap<u64, Record>,
    employee_calls: AtomicUsize,
    todo_calls: AtomicUsize,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an employee whose to-do list is served successfully.
    pub fn with_employee(mut self, id: u64, name: &str, todos: Vec<TodoItem>) -> Self {
        self.records.insert(
            id,
            Record {
                name: name.to_string(),
                todos: Ok(todos),
            },
        );
        self
    }

    /// Add an employee whose to-do endpoint answers with a failure status.
    pub fn with_unavailable_todos(self, id: u64, name: &str) -> Self {
        self.with_failing_todos(id, name, ReportError::FetchFailure(id))
    }

    /// Add an employee whose to-do request fails with `error`.
    pub fn with_failing_todos(mut self, id: u64, name: &str, error: ReportError) -> Self {
        self.records.insert(
            id,
            Record {
                name: name.to_string(),
                todos: Err(error),
            },
        );
        self
    }

    pub fn employee_calls(&self) -> usize {
        self.employee_calls.load(Ordering::SeqCst)
    }

    pub fn todo_calls(&self) -> usize {
        self.todo_calls.load(Ordering::SeqCst)
    }

    /// Total requests served, both endpoints.
    pub fn calls(&self) -> usize {
        self.employee_calls() + self.todo_calls()
    }
}

#[async_trait::async_trait]
impl DirectoryPort for InMemoryDirectory {
    async fn fetch_employee(&self, id: EmployeeId) -> Result<Employee, ReportError> {
        self.employee_calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .get(&id.get())
            .map(|r| Employee {
                id,
                name: r.name.clone(),
            })
            .ok_or(ReportError::NotFound(id.get()))
    }

    async fn fetch_todos(&self, id: EmployeeId) -> Result<Vec<TodoItem>, ReportError> {
        self.todo_calls.fetch_add(1, Ordering::SeqCst);
        match self.records.get(&id.get()) {
            Some(record) => record.todos.clone(),
            None => Err(ReportError::FetchFailure(id.get())),
        }
    }
}
