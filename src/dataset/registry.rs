use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Maps city names to the CSV file holding that city's trips.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "chicago": "chicago.csv",
///   "new york city": "new_york_city.csv"
/// }
/// ```
pub struct CityRegistry {
    entries: BTreeMap<String, String>,
}

impl CityRegistry {
    /// The three cities shipped with the standard exports.
    pub fn builtin() -> Self {
        let entries = [
            ("chicago", "chicago.csv"),
            ("new york city", "new_york_city.csv"),
            ("washington", "washington.csv"),
        ]
        .into_iter()
        .map(|(city, file)| (city.to_string(), file.to_string()))
        .collect();
        Self { entries }
    }

    /// Loads the registry from a JSON file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading city registry {}", path.display()))?;
        let entries: BTreeMap<String, String> = serde_json::from_str(&content)
            .context("city registry is not a JSON object of city name to file name")?;
        Ok(Self { entries })
    }

    /// Returns the CSV file name for `city`, if one is registered.
    pub fn file_for(&self, city: &str) -> Option<&str> {
        self.entries.get(city).map(String::as_str)
    }

    /// City names in their canonical prompt order.
    pub fn cities(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }
}
