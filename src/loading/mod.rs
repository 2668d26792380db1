mod csv_loader;
mod fields;

pub use csv_loader::{load_csv, parse_csv};
pub use fields::{split_fields, strip_surrounding_quotes};
