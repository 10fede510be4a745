use serde::{Deserialize, Serialize};

#[derive(Clone, Deserialize, Debug, Serialize, PartialEq, Eq)]
pub struct RevocationRegistryDelta {
    pub value: RevocationRegistryDeltaValue,
}

#[derive(Clone, Deserialize, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RevocationRegistryDeltaValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_accum: Option<String>,
    pub accum: String,
    #[serde(default)]
    pub issued: Vec<u32>,
    #[serde(default)]
    pub revoked: Vec<u32>,
}
