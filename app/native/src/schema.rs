//! JSON Schema generation for the configuration file.

use crate::config::DeskpaperConfig;

/// Generates a JSON Schema for the Deskpaper configuration.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(DeskpaperConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert(
            "$id".to_string(),
            serde_json::json!(
                "https://raw.githubusercontent.com/deskpaper/deskpaper/main/deskpaper.schema.json"
            ),
        );
    }

    schema
}

/// Returns the configuration schema as pretty-printed JSON.
#[must_use]
pub fn print_schema() -> String {
    serde_json::to_string_pretty(&generate_schema()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_valid_json() {
        let parsed: serde_json::Value = serde_json::from_str(&print_schema()).unwrap();

        assert!(parsed["$id"].as_str().unwrap().contains("deskpaper.schema.json"));
        assert_eq!(parsed["title"], "DeskpaperConfig");
        assert!(parsed["properties"]["scale"].is_object());
        assert!(parsed["properties"]["screen"].is_object());
        assert!(parsed["properties"]["fillColor"].is_object());
        assert!(parsed["properties"]["refreshDelayMs"].is_object());
    }
}
