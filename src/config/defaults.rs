//! Shared serde default helpers.

/// Turns a list of string literals into owned strings for config defaults.
pub fn owned(values: &[&str]) -> Vec<String> { values.iter().map(|v| (*v).to_string()).collect() }
