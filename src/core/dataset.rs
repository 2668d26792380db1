use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use crate::error::{Id3Error, Result};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::Arc;

/// Ordered rows sharing one header.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<DenseInstance>,
}

impl Dataset {
    pub fn new(header: Arc<InstanceHeader>, instances: Vec<DenseInstance>) -> Dataset {
        Dataset { header, instances }
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn instances(&self) -> &[DenseInstance] {
        &self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Class values aligned with [`instances`](Self::instances).
    pub fn labels(&self) -> Vec<&str> {
        self.instances.iter().map(|i| i.class_value()).collect()
    }

    /// Rows per class, most frequent first. Equal counts keep first-seen
    /// order.
    pub fn class_counts(&self) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = Vec::new();
        for label in self.labels() {
            match counts.iter_mut().find(|(class, _)| *class == label) {
                Some((_, n)) => *n += 1,
                None => counts.push((label, 1)),
            }
        }
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }

    pub fn feature_names(&self) -> Vec<&str> {
        self.header.feature_names()
    }

    /// Shuffles rows with a seeded generator and cuts them at
    /// `floor(train_fraction * len)`. Both halves keep the full header.
    pub fn train_test_split(&self, train_fraction: f64, seed: u64) -> Result<(Dataset, Dataset)> {
        if !(train_fraction > 0.0 && train_fraction < 1.0) {
            return Err(Id3Error::InvalidParameter(format!(
                "train_fraction must be in (0, 1), got {train_fraction}"
            )));
        }
        if self.instances.is_empty() {
            return Err(Id3Error::EmptyDataset);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut shuffled = self.instances.clone();
        shuffled.shuffle(&mut rng);

        let cut = (train_fraction * shuffled.len() as f64) as usize;
        let test = shuffled.split_off(cut);

        Ok((
            Dataset::new(Arc::clone(&self.header), shuffled),
            Dataset::new(Arc::clone(&self.header), test),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::weather_dataset;

    #[test]
    fn labels_align_with_rows() {
        let ds = weather_dataset();
        let labels = ds.labels();
        assert_eq!(labels.len(), ds.len());
        assert_eq!(labels[0], "no");
        assert_eq!(labels[2], "yes");
        assert_eq!(ds.feature_names(), vec!["outlook", "temperature", "humidity", "windy"]);
    }

    #[test]
    fn class_counts_most_frequent_first() {
        let ds = weather_dataset();
        assert_eq!(ds.class_counts(), vec![("yes", 9), ("no", 5)]);

        let empty = Dataset::new(Arc::clone(ds.header()), vec![]);
        assert!(empty.class_counts().is_empty());
    }

    #[test]
    fn class_count_ties_keep_first_seen_order() {
        let ds = weather_dataset();
        let rows: Vec<_> = ds.instances()[..2]
            .iter()
            .chain(&ds.instances()[2..4])
            .cloned()
            .collect();
        // no, no, yes, yes
        let ds = Dataset::new(Arc::clone(ds.header()), rows);
        assert_eq!(ds.class_counts(), vec![("no", 2), ("yes", 2)]);
    }

    #[test]
    fn split_sizes_and_reproducibility() {
        let ds = weather_dataset();
        let (train, test) = ds.train_test_split(0.7, 42).unwrap();
        assert_eq!(train.len(), 9);
        assert_eq!(test.len(), 5);

        let (train2, _) = ds.train_test_split(0.7, 42).unwrap();
        let a: Vec<_> = train.instances().iter().map(|i| i.values.clone()).collect();
        let b: Vec<_> = train2.instances().iter().map(|i| i.values.clone()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn split_preserves_all_rows() {
        let ds = weather_dataset();
        let (train, test) = ds.train_test_split(0.5, 7).unwrap();
        let mut all: Vec<_> = train
            .instances()
            .iter()
            .chain(test.instances())
            .map(|i| i.values.clone())
            .collect();
        let mut original: Vec<_> = ds.instances().iter().map(|i| i.values.clone()).collect();
        all.sort();
        original.sort();
        assert_eq!(all, original);
    }

    #[test]
    fn split_rejects_bad_fraction_and_empty() {
        let ds = weather_dataset();
        assert!(matches!(
            ds.train_test_split(1.0, 1),
            Err(Id3Error::InvalidParameter(_))
        ));
        assert!(matches!(
            ds.train_test_split(0.0, 1),
            Err(Id3Error::InvalidParameter(_))
        ));

        let empty = Dataset::new(Arc::clone(ds.header()), vec![]);
        assert!(matches!(
            empty.train_test_split(0.5, 1),
            Err(Id3Error::EmptyDataset)
        ));
    }
}
