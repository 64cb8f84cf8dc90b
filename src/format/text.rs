//! Human-readable text output formatter

use crate::error::Result;
use crate::format::{Lookup, OutputFormatter};
use crate::geo::PlaceResult;

/// Text formatter - one block per place
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Human-readable text"
    }

    fn format(&self, lookup: Lookup<'_>) -> Result<String> {
        let mut output = String::new();

        match lookup {
            Lookup::Many(places) if places.is_empty() => {
                output.push_str("No results\n");
            }
            Lookup::Many(places) => {
                output.push_str(&format!("{} result(s)\n\n", places.len()));
                for (i, place) in places.iter().enumerate() {
                    output.push_str(&format!("{}. ", i + 1));
                    write_place(&mut output, place);
                }
            }
            Lookup::One(place) => write_place(&mut output, place),
        }

        Ok(output)
    }
}

fn write_place(output: &mut String, place: &PlaceResult) {
    let name = place.name.as_deref().unwrap_or("(unnamed)");
    match place.country.as_deref() {
        Some(country) => output.push_str(&format!("{}, {}\n", name, country)),
        None => output.push_str(&format!("{}\n", name)),
    }

    // lat/lon order for humans; the JSON keeps [lon, lat]
    output.push_str(&format!("   Location: {:.6}, {:.6}\n", place.lat(), place.lon()));

    let props = &place.properties;
    let address: Vec<&str> = [&props.city, &props.state, &props.postcode]
        .into_iter()
        .filter_map(|v| v.as_deref())
        .collect();
    if !address.is_empty() {
        output.push_str(&format!("   Address: {}\n", address.join(", ")));
    }

    if let (Some(osm_type), Some(osm_id)) = (&props.osm_type, props.osm_id) {
        output.push_str(&format!("   OSM: {}{}\n", osm_type, osm_id));
    }
}
