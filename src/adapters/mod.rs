//! Infrastructure adapters. Implement outbound ports.
//!
//! REST directory and its in-memory stand-in. Map errors to ReportError.

pub mod directory;
