use crate::core::Dataset;
use crate::core::attributes::NominalAttribute;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::error::{Id3Error, Result};
use crate::loading::fields::split_fields;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

/// Reads a header-less CSV file of categorical values. The relation is named
/// after the file stem.
pub fn load_csv<P: AsRef<Path>, S: AsRef<str>>(
    path: P,
    column_names: &[S],
    class_name: &str,
) -> Result<Dataset> {
    let path = path.as_ref();
    let relation = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "data".to_string());
    let file = File::open(path)?;
    let dataset = parse_records(BufReader::new(file), relation, column_names, class_name)?;
    log::info!(
        "loaded {} rows x {} columns from {}",
        dataset.len(),
        column_names.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parses header-less CSV records from `reader`. Blank lines are skipped.
pub fn parse_csv<R: BufRead, S: AsRef<str>>(
    reader: R,
    column_names: &[S],
    class_name: &str,
) -> Result<Dataset> {
    parse_records(reader, "data".to_string(), column_names, class_name)
}

fn parse_records<R: BufRead, S: AsRef<str>>(
    reader: R,
    relation: String,
    column_names: &[S],
    class_name: &str,
) -> Result<Dataset> {
    let mut seen = HashSet::new();
    for name in column_names {
        if !seen.insert(name.as_ref()) {
            return Err(Id3Error::InvalidParameter(format!(
                "duplicate column name '{}'",
                name.as_ref()
            )));
        }
    }
    let class_index = column_names
        .iter()
        .position(|n| n.as_ref() == class_name)
        .ok_or_else(|| Id3Error::UnknownAttribute(class_name.to_string()))?;

    let mut attributes: Vec<NominalAttribute> = column_names
        .iter()
        .map(|n| NominalAttribute::new(n.as_ref().to_string()))
        .collect();
    let mut records = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_fields(&line);
        if fields.len() != attributes.len() {
            return Err(Id3Error::Parse {
                line: i + 1,
                message: format!(
                    "expected {} fields, found {}",
                    attributes.len(),
                    fields.len()
                ),
            });
        }
        for (attribute, value) in attributes.iter_mut().zip(&fields) {
            attribute.add_value(value);
        }
        records.push(fields);
    }

    let header = Arc::new(InstanceHeader::new(relation, attributes, class_index)?);
    let instances = records
        .into_iter()
        .map(|values| DenseInstance::new(Arc::clone(&header), values))
        .collect::<Result<Vec<_>>>()?;
    Ok(Dataset::new(header, instances))
}
