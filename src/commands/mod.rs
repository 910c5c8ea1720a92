//! Command implementations for steerdiff.
//!
//! There is a single command: load two steering files, compare them, and
//! print the report.

mod compare;


pub use compare::cmd_compare;
