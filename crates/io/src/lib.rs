//! # lunaria-io
//!
//! JSON persistence for ritual year templates and range summaries, plus a
//! directory-backed [`TemplateStore`] that generates templates on first use
//! and reloads them afterwards.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `json` | Template and summary encoding |
//! | `store` | `template-<year>.json` directory store |
//! | `error` | Error types |

mod error;
mod json;
mod store;

pub use error::IoError;
pub use json::{read_template_json, write_summary_json, write_template_json};
pub use store::TemplateStore;
