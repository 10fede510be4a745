use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    data_types::identifiers::{issuer_id::IssuerId, schema_id::SchemaId},
    utils::validation::Validatable,
};

pub const MAX_ATTRIBUTES_COUNT: usize = 125;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    pub id: SchemaId,
    pub seq_no: Option<u32>,
    pub name: String,
    pub version: String,
    pub attr_names: AttributeNames,
    pub issuer_id: IssuerId,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AttributeNames(pub Vec<String>);

impl From<&[&str]> for AttributeNames {
    fn from(attrs: &[&str]) -> Self {
        Self(attrs.iter().map(|s| String::from(*s)).collect::<Vec<_>>())
    }
}

impl From<Vec<String>> for AttributeNames {
    fn from(attrs: Vec<String>) -> Self {
        Self(attrs)
    }
}

impl From<AttributeNames> for Vec<String> {
    fn from(a: AttributeNames) -> Self {
        a.0
    }
}

impl Validatable for Schema {
    fn validate(&self) -> Result<(), crate::ValidationError> {
        self.id.validate()?;
        self.issuer_id.validate()?;
        self.attr_names.validate()?;
        Ok(())
    }
}

impl Validatable for AttributeNames {
    fn validate(&self) -> Result<(), crate::ValidationError> {
        let mut unique = HashSet::new();
        let is_unique = self.0.iter().all(move |name| unique.insert(name));

        if !is_unique {
            return Err(crate::invalid!("Attributes inside the schema must be unique"));
        }

        if self.0.is_empty() {
            return Err(crate::invalid!("Empty list of schema attributes has been passed"));
        }

        if self.0.len() > MAX_ATTRIBUTES_COUNT {
            return Err(crate::invalid!(
                "The number of schema attributes {} exceeds the maximum of {}",
                self.0.len(),
                MAX_ATTRIBUTES_COUNT
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_attribute_names_are_rejected() {
        let attrs = AttributeNames::from(&["name", "age", "name"][..]);
        attrs.validate().unwrap_err();
    }

    #[test]
    fn empty_attribute_names_are_rejected() {
        AttributeNames::default().validate().unwrap_err();
    }
}
