mod csv_location_repo;
pub mod geojson_cleaner;
pub mod grape_csv;
mod in_memory_location_repo;

pub use csv_location_repo::{CsvLocationRepository, LoadError};
pub use in_memory_location_repo::InMemoryLocationRepository;
