use crate::core::instance_header::InstanceHeader;
use crate::core::instances::instance::Instance;
use crate::error::{Id3Error, Result};
use std::sync::Arc;

/// A row holding one value per header column, class value included.
/// `values` must keep the header's arity; [`new`](Self::new) checks it.
#[derive(Debug, Clone)]
pub struct DenseInstance {
    pub header: Arc<InstanceHeader>,
    pub values: Vec<String>,
}

impl DenseInstance {
    pub fn new(header: Arc<InstanceHeader>, values: Vec<String>) -> Result<DenseInstance> {
        if values.len() != header.number_of_attributes() {
            return Err(Id3Error::LengthMismatch {
                left: values.len(),
                right: header.number_of_attributes(),
            });
        }
        Ok(DenseInstance { header, values })
    }

    pub fn value_at_index(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn class_value(&self) -> &str {
        &self.values[self.header.class_index()]
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }
}

impl Instance for DenseInstance {
    fn value(&self, attribute: &str) -> Option<&str> {
        let index = self.header.index_of_attribute(attribute)?;
        self.value_at_index(index)
    }
}
