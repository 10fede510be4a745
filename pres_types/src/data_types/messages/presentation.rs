use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data_types::identifiers::{
    cred_def_id::CredentialDefinitionId, rev_reg_def_id::RevocationRegistryDefinitionId,
    schema_id::SchemaId,
};

/// A holder's presentation. `proof` is the aggregated cryptographic payload,
/// opaque to everything but the proof backend; `requested_proof` maps each
/// request referent to what was actually disclosed; `identifiers` names the
/// ledger objects each sub-proof was built from, indexed by
/// `sub_proof_index`.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Presentation {
    pub proof: Value,
    pub requested_proof: RequestedProof,
    pub identifiers: Vec<Identifier>,
}

/// One entry of `identifiers`: the schema, credential definition and
/// (for revocable credentials) revocation registry behind a sub-proof, plus
/// the timestamp of the registry state the non-revocation proof was built
/// against.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Identifier {
    pub schema_id: SchemaId,
    pub cred_def_id: CredentialDefinitionId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rev_reg_id: Option<RevocationRegistryDefinitionId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RequestedProof {
    #[serde(default)]
    pub revealed_attrs: BTreeMap<String, RevealedAttr>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub revealed_attr_groups: BTreeMap<String, RevealedAttrGroup>,
    #[serde(default)]
    pub self_attested_attrs: BTreeMap<String, String>,
    #[serde(default)]
    pub unrevealed_attrs: BTreeMap<String, SubProofReferent>,
    #[serde(default)]
    pub predicates: BTreeMap<String, SubProofReferent>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct SubProofReferent {
    pub sub_proof_index: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RevealedAttr {
    pub sub_proof_index: u32,
    pub raw: String,
    pub encoded: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct RevealedAttrGroup {
    pub sub_proof_index: u32,
    pub values: BTreeMap<String, AttributeValue>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct AttributeValue {
    pub raw: String,
    pub encoded: String,
}
