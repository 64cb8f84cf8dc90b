//! JSON output formatter

use crate::error::Result;
use crate::format::{Lookup, OutputFormatter};

/// JSON formatter - same payload the HTTP API returns, pretty-printed
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Same JSON the HTTP API returns"
    }

    fn format(&self, lookup: Lookup<'_>) -> Result<String> {
        let output = match lookup {
            Lookup::Many(places) => serde_json::to_string_pretty(places)?,
            Lookup::One(place) => serde_json::to_string_pretty(place)?,
        };
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::fixtures::{berlin, paris};
    use serde_json::Value;

    #[test]
    fn test_json_list() {
        let places = vec![berlin(), paris()];
        let output = JsonFormatter.format(Lookup::Many(&places)).unwrap();

        let parsed: Value = serde_json::from_str(&output).unwrap();
        let items = parsed.as_array().unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0]["name"], "Berlin");
        assert_eq!(items[1]["coordinates"][0], 2.3514992);
    }

    #[test]
    fn test_json_single() {
        let place = berlin();
        let output = JsonFormatter.format(Lookup::One(&place)).unwrap();

        let parsed: Value = serde_json::from_str(&output).unwrap();
        assert!(parsed.is_object());
        assert_eq!(parsed["properties"]["postcode"], "10117");
    }

    #[test]
    fn test_json_empty_list() {
        let output = JsonFormatter.format(Lookup::Many(&[])).unwrap();
        assert_eq!(output, "[]");
    }
}
