mod datasets;

pub use datasets::{map_row, toy_rows, weather_dataset};
