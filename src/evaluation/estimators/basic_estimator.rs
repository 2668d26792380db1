use crate::evaluation::estimators::Estimator;

/// Running mean: `sum / len`. NaN observations are ignored and the estimate
/// is NaN until something has been observed.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: f64,
    sum: f64,
}

impl BasicEstimator {
    pub fn observations(&self) -> usize {
        self.len as usize
    }
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1.0;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0.0 {
            self.sum / self.len
        } else {
            f64::NAN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_indicators() {
        let mut est = BasicEstimator::default();
        assert!(est.estimation().is_nan());
        for v in [1.0, 0.0, 1.0, f64::NAN] {
            est.add(v);
        }
        assert_eq!(est.observations(), 3);
        assert_eq!(est.estimation(), 2.0 / 3.0);
    }
}
