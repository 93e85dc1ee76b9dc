//! MoniPro Common - Shared utilities for the dashboard crates
//!
//! This crate provides the ambient pieces every MoniPro binary needs:
//!
//! - **Initialization**: [`init_tracing`] for standardized logging to stderr
//! - **Errors**: [`DashboardError`] and the [`Result`] alias
//! - **Output**: helpers for formatting values as JSON or text lines
//!
//! # Example
//!
//! ```rust,ignore
//! use monipro_common::{init_tracing, json_line};
//!
//! init_tracing("monipro", "info")?;
//! println!("{}", json_line(&snapshot)?);
//! ```

pub mod error;
pub mod init;
pub mod output;

// Re-export commonly used items at crate root
pub use error::{DashboardError, Result};
pub use init::init_tracing;
pub use output::{json_line, json_pretty, text_block};
