use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    data_types::identifiers::{issuer_id::IssuerId, schema_id::SchemaId},
    utils::validation::Validatable,
    ValidationError,
};

pub const CL_SIGNATURE_TYPE: &str = "CL";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SignatureType {
    CL,
}

impl FromStr for SignatureType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CL_SIGNATURE_TYPE => Ok(Self::CL),
            _ => Err(crate::invalid!("Invalid signature type: {}", s)),
        }
    }
}

/// Issuer public key material. The pipeline never looks inside it, so it is
/// carried as opaque JSON for the crypto backend to interpret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CredentialDefinitionData {
    pub primary: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revocation: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CredentialDefinition {
    pub schema_id: SchemaId,
    #[serde(rename = "type")]
    pub signature_type: SignatureType,
    pub tag: String,
    pub value: CredentialDefinitionData,
    pub issuer_id: IssuerId,
}

impl CredentialDefinition {
    /// A credential definition issued with revocation key material supports
    /// non-revocation proofs; one without never can.
    pub const fn supports_revocation(&self) -> bool {
        self.value.revocation.is_some()
    }
}

impl Validatable for CredentialDefinition {
    fn validate(&self) -> Result<(), ValidationError> {
        self.schema_id.validate()?;
        self.issuer_id.validate()?;
        Ok(())
    }
}
