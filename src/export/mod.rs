mod csv_files;
mod errors;
mod flatten;
#[cfg(test)]
mod tests;

pub use csv_files::{write_filtered, write_primary};
pub use errors::ExportError;
pub use flatten::{flatten, FlatRow};
