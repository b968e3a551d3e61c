//! Trip dataset loading: the city registry, the CSV source, and the
//! month/day filter pipeline.

pub mod loader;
pub mod registry;
pub mod source;
pub mod types;

pub use registry::CityRegistry;
pub use source::{CsvTripSource, TripSource};
pub use types::{RawTrip, Trip};
