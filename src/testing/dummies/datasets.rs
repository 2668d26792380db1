use crate::core::Dataset;
use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use std::collections::HashMap;
use std::sync::Arc;

const WEATHER_COLUMNS: [&str; 5] = ["outlook", "temperature", "humidity", "windy", "play"];

const WEATHER_ROWS: [[&str; 5]; 14] = [
    ["sunny", "hot", "high", "false", "no"],
    ["sunny", "hot", "high", "true", "no"],
    ["overcast", "hot", "high", "false", "yes"],
    ["rainy", "mild", "high", "false", "yes"],
    ["rainy", "cool", "normal", "false", "yes"],
    ["rainy", "cool", "normal", "true", "no"],
    ["overcast", "cool", "normal", "true", "yes"],
    ["sunny", "mild", "high", "false", "no"],
    ["sunny", "cool", "normal", "false", "yes"],
    ["rainy", "mild", "normal", "false", "yes"],
    ["sunny", "mild", "normal", "true", "yes"],
    ["overcast", "mild", "high", "true", "yes"],
    ["overcast", "hot", "normal", "false", "yes"],
    ["rainy", "mild", "high", "true", "no"],
];

pub fn map_row(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Four rows where `A` fully determines the class and `B` carries nothing.
pub fn toy_rows() -> (Vec<HashMap<String, String>>, Vec<&'static str>) {
    let rows = vec![
        map_row(&[("A", "x"), ("B", "0")]),
        map_row(&[("A", "x"), ("B", "1")]),
        map_row(&[("A", "y"), ("B", "0")]),
        map_row(&[("A", "y"), ("B", "1")]),
    ];
    (rows, vec!["pos", "pos", "neg", "neg"])
}

/// Quinlan's 14-day play-tennis table, class in the last column.
pub fn weather_dataset() -> Dataset {
    let attributes = WEATHER_COLUMNS
        .iter()
        .enumerate()
        .map(|(col, name)| {
            let mut attribute = NominalAttribute::new(name.to_string());
            for row in &WEATHER_ROWS {
                attribute.add_value(row[col]);
            }
            attribute
        })
        .collect();
    let header = Arc::new(InstanceHeader::new("weather".into(), attributes, 4).unwrap());

    let instances = WEATHER_ROWS
        .iter()
        .map(|row| {
            DenseInstance::new(
                Arc::clone(&header),
                row.iter().map(|v| v.to_string()).collect(),
            )
            .unwrap()
        })
        .collect();
    Dataset::new(header, instances)
}
