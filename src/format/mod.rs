//! Output formatters
//!
//! Provides trait-based output formatting for CLI lookups.

pub mod json;
pub mod text;

use crate::error::Result;
use crate::geo::PlaceResult;

/// What a lookup produced
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    /// Search results, in backend order
    Many(&'a [PlaceResult]),
    /// A reverse geocoding match
    One(&'a PlaceResult),
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Get the format name
    fn name(&self) -> &str;

    /// Get the format description
    fn description(&self) -> &str;

    /// Format a lookup result
    fn format(&self, lookup: Lookup<'_>) -> Result<String>;
}

/// Get a formatter by name
pub fn get_formatter(name: &str) -> Option<Box<dyn OutputFormatter>> {
    match name.to_lowercase().as_str() {
        "json" => Some(Box::new(json::JsonFormatter)),
        "text" => Some(Box::new(text::TextFormatter)),
        _ => None,
    }
}
