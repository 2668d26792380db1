/// Named scalar metric produced by an evaluator.
///
/// Typical examples: `"accuracy"`, `"unknown_rate"`, `"instances"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: String,
    pub value: f64,
}

impl Measurement {
    #[inline]
    pub fn new<N: Into<String>>(name: N, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}
