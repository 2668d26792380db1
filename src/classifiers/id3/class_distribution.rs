/// Label counts of a partition, classes kept in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassDistribution<'a> {
    classes: Vec<&'a str>,
    counts: Vec<f64>,
}

impl<'a> ClassDistribution<'a> {
    pub fn from_labels<L>(labels: L) -> Self
    where
        L: IntoIterator<Item = &'a str>,
    {
        let mut dist = Self::default();
        for label in labels {
            dist.observe(label);
        }
        dist
    }

    pub fn observe(&mut self, label: &'a str) {
        match self.classes.iter().position(|c| *c == label) {
            Some(i) => self.counts[i] += 1.0,
            None => {
                self.classes.push(label);
                self.counts.push(1.0);
            }
        }
    }

    pub fn counts(&self) -> &[f64] {
        &self.counts
    }

    pub fn classes(&self) -> &[&'a str] {
        &self.classes
    }

    pub fn total_weight(&self) -> f64 {
        self.counts.iter().sum()
    }

    pub fn num_non_zero_entries(&self) -> usize {
        self.counts.iter().filter(|&&x| x != 0.0).count()
    }

    pub fn is_pure(&self) -> bool {
        self.num_non_zero_entries() < 2
    }

    /// Most frequent class; ties go to the class seen first.
    pub fn majority_class(&self) -> Option<&'a str> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &count) in self.counts.iter().enumerate() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((i, count)),
            }
        }
        best.map(|(i, _)| self.classes[i])
    }
}
