use crate::classifiers::id3::GainHistory;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ReportFormat {
    Csv,
    Tsv,
    Json,
}

/// One attribute's line in the importance ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GainReportEntry {
    pub attribute: String,
    pub mean_gain: f64,
    pub evaluations: usize,
}

/// Attributes ranked by their mean information gain over training.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GainReport {
    entries: Vec<GainReportEntry>,
}

impl GainReport {
    pub fn from_history(history: &GainHistory) -> Self {
        let entries = history
            .mean_gains()
            .into_iter()
            .map(|(attribute, mean_gain)| {
                let evaluations = history.gains(&attribute).map_or(0, <[f64]>::len);
                GainReportEntry {
                    attribute,
                    mean_gain,
                    evaluations,
                }
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[GainReportEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top(&self, n: usize) -> &[GainReportEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: ReportFormat) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(path)?);
        self.write_to(&mut w, fmt)?;
        w.flush()
    }

    pub fn write_to<W: Write>(&self, w: &mut W, fmt: ReportFormat) -> Result<(), Error> {
        match fmt {
            ReportFormat::Csv => self.write_with_delimiter(w, ','),
            ReportFormat::Tsv => self.write_with_delimiter(w, '\t'),
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *w, &self.entries)?;
                writeln!(w)
            }
        }
    }

    fn write_with_delimiter<W: Write>(&self, w: &mut W, delimiter: char) -> Result<(), Error> {
        writeln!(w, "attribute{d}mean_gain{d}evaluations", d = delimiter)?;
        for e in &self.entries {
            writeln!(
                w,
                "{}{d}{:.12}{d}{}",
                e.attribute,
                e.mean_gain,
                e.evaluations,
                d = delimiter
            )?;
        }
        Ok(())
    }
}
