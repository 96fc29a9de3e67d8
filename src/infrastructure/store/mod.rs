//! Job store adapters

pub mod csv_store;

pub use csv_store::CsvJobStore;
