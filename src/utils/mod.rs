//! Shared helpers used by the converter and the migrator.

mod formatting;

pub use formatting::{date_formats, slugify};
