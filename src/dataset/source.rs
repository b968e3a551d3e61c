use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::debug;

use super::registry::CityRegistry;
use super::types::RawTrip;

/// Source of raw trip rows keyed by city name.
pub trait TripSource {
    /// City names offered for selection, in prompt order.
    fn cities(&self) -> Vec<String>;

    /// All raw rows for `city`, in file order.
    ///
    /// # Errors
    ///
    /// Fails when `city` is unknown or its export cannot be read.
    fn rows_for(&self, city: &str) -> Result<Vec<RawTrip>>;
}

/// Reads city CSV exports from a data directory.
pub struct CsvTripSource {
    data_dir: PathBuf,
    registry: CityRegistry,
}

impl CsvTripSource {
    pub fn new(data_dir: PathBuf, registry: CityRegistry) -> Self {
        Self { data_dir, registry }
    }
}

impl TripSource for CsvTripSource {
    fn cities(&self) -> Vec<String> {
        self.registry.cities()
    }

    fn rows_for(&self, city: &str) -> Result<Vec<RawTrip>> {
        let Some(file_name) = self.registry.file_for(city) else {
            bail!("no dataset registered for city {:?}", city);
        };
        let path = self.data_dir.join(file_name);
        debug!(city, path = %path.display(), "Reading city export");

        let file = File::open(&path).with_context(|| format!("opening {}", path.display()))?;
        let mut reader = csv::Reader::from_reader(file);

        let mut rows = Vec::new();
        for result in reader.deserialize() {
            let row: RawTrip = result.with_context(|| format!("reading {}", path.display()))?;
            rows.push(row);
        }

        Ok(rows)
    }
}
