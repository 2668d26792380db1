use crate::error::Result;
use crate::evaluation::accuracy::check_lengths;
use std::collections::BTreeSet;
use std::fmt;

const CORNER: &str = "actual/predicted";
const UNKNOWN: &str = "unknown";

/// Counts of actual class (rows) against predicted class (columns), with an
/// extra column for predictions the model could not make.
///
/// Classes are the sorted union of actual and predicted labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfusionMatrix {
    classes: Vec<String>,
    counts: Vec<Vec<usize>>,
    unknown: Vec<usize>,
}

impl ConfusionMatrix {
    pub fn from_predictions<P: AsRef<str>, S: AsRef<str>>(
        predictions: &[Option<P>],
        actual: &[S],
    ) -> Result<Self> {
        check_lengths(predictions.len(), actual.len())?;

        let classes: Vec<String> = actual
            .iter()
            .map(AsRef::<str>::as_ref)
            .chain(predictions.iter().flatten().map(AsRef::<str>::as_ref))
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .map(str::to_string)
            .collect();

        let k = classes.len();
        let mut matrix = Self {
            classes,
            counts: vec![vec![0; k]; k],
            unknown: vec![0; k],
        };
        for (predicted, truth) in predictions.iter().zip(actual) {
            let Some(row) = matrix.index_of(truth.as_ref()) else {
                continue;
            };
            match predicted.as_ref().and_then(|p| matrix.index_of(p.as_ref())) {
                Some(col) => matrix.counts[row][col] += 1,
                None => matrix.unknown[row] += 1,
            }
        }
        Ok(matrix)
    }

    fn index_of(&self, class: &str) -> Option<usize> {
        self.classes.binary_search_by(|c| c.as_str().cmp(class)).ok()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Rows of class `actual` predicted as `predicted`; `None` reads the
    /// unknown column.
    pub fn count(&self, actual: &str, predicted: Option<&str>) -> usize {
        let Some(row) = self.index_of(actual) else {
            return 0;
        };
        match predicted {
            Some(p) => self.index_of(p).map_or(0, |col| self.counts[row][col]),
            None => self.unknown[row],
        }
    }

    pub fn row_total(&self, actual: &str) -> usize {
        self.index_of(actual)
            .map_or(0, |row| self.counts[row].iter().sum::<usize>() + self.unknown[row])
    }

    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum::<usize>() + self.unknown.iter().sum::<usize>()
    }

    /// Sum of the diagonal.
    pub fn correct(&self) -> usize {
        (0..self.classes.len()).map(|i| self.counts[i][i]).sum()
    }
}

impl fmt::Display for ConfusionMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let longest = self.classes.iter().map(String::len).max().unwrap_or(0);
        let w0 = longest.max(CORNER.len());
        let w = longest.max(UNKNOWN.len());

        write!(f, "{CORNER:<w0$}")?;
        for class in &self.classes {
            write!(f, " {class:>w$}")?;
        }
        writeln!(f, " {UNKNOWN:>w$}")?;

        for (i, class) in self.classes.iter().enumerate() {
            write!(f, "{class:<w0$}")?;
            for n in &self.counts[i] {
                write!(f, " {n:>w$}")?;
            }
            writeln!(f, " {:>w$}", self.unknown[i])?;
        }
        Ok(())
    }
}
