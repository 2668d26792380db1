use crate::core::attributes::NominalAttribute;
use crate::error::{Id3Error, Result};

/// Column layout shared by every row of a dataset. One column is the class;
/// `class_index` always points inside `attributes`.
#[derive(Debug, Clone, PartialEq)]
pub struct InstanceHeader {
    relation_name: String,
    attributes: Vec<NominalAttribute>,
    class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<NominalAttribute>,
        class_index: usize,
    ) -> Result<InstanceHeader> {
        if class_index >= attributes.len() {
            return Err(Id3Error::InvalidParameter(format!(
                "class index {class_index} out of range for {} attributes",
                attributes.len()
            )));
        }
        Ok(InstanceHeader {
            relation_name,
            attributes,
            class_index,
        })
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> &NominalAttribute {
        &self.attributes[self.class_index]
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute().number_of_values()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&NominalAttribute> {
        self.attributes.get(index)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|attr| attr.name() == name)
    }

    /// Names of the feature columns (class column excluded), in column order.
    pub fn feature_names(&self) -> Vec<&str> {
        self.attributes
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != self.class_index)
            .map(|(_, attr)| attr.name())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> InstanceHeader {
        InstanceHeader::new(
            "votes".into(),
            vec![
                NominalAttribute::with_values(
                    "class".into(),
                    vec!["democrat".into(), "republican".into()],
                ),
                NominalAttribute::with_values("v1".into(), vec!["y".into(), "n".into()]),
                NominalAttribute::with_values("v2".into(), vec!["y".into()]),
            ],
            0,
        )
        .unwrap()
    }

    #[test]
    fn feature_names_skip_class_column() {
        let h = header();
        assert_eq!(h.feature_names(), vec!["v1", "v2"]);
        assert_eq!(h.number_of_attributes(), 3);
        assert_eq!(h.number_of_classes(), 2);
        assert_eq!(h.class_attribute().name(), "class");
    }

    #[test]
    fn index_lookup() {
        let h = header();
        assert_eq!(h.index_of_attribute("v2"), Some(2));
        assert_eq!(h.index_of_attribute("nope"), None);
        assert!(h.attribute_at_index(3).is_none());
        assert_eq!(h.relation_name(), "votes");
    }

    #[test]
    fn class_index_must_name_a_column() {
        let attributes = vec![
            NominalAttribute::new("a".into()),
            NominalAttribute::new("label".into()),
        ];
        let err = InstanceHeader::new("rel".into(), attributes.clone(), 2).unwrap_err();
        assert!(matches!(err, Id3Error::InvalidParameter(_)));
        assert!(InstanceHeader::new("rel".into(), vec![], 0).is_err());
        assert!(InstanceHeader::new("rel".into(), attributes, 1).is_ok());
    }
}
