//! Directory adapters. Implement DirectoryPort.
//!
//! HTTP adapter for the real REST API and an in-memory adapter for testing.

pub mod http_adapter;
pub mod memory_adapter;

pub use http_adapter::HttpDirectoryAdapter;
pub use memory_adapter::InMemoryDirectory;
