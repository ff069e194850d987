//! Result export

pub mod csv;

pub use self::csv::{export_filename, export_to_dir, export_to_file, to_csv_string, write_csv};
