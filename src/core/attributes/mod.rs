mod nominal_attribute;

pub use nominal_attribute::NominalAttribute;
