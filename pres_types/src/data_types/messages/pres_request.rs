use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::{utils::validation::Validatable, ValidationError};

/// A verifier's presentation request: which attributes must be disclosed,
/// which predicates proven, and under which non-revocation constraints.
///
/// Referent maps are ordered so that a request walks its referents in a
/// stable order on every invocation.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct PresentationRequest {
    pub nonce: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub requested_attributes: BTreeMap<String, AttributeInfo>,
    #[serde(default)]
    pub requested_predicates: BTreeMap<String, PredicateInfo>,
    /// Request-level default interval, applied to any referent that does not
    /// carry its own.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_revoked: Option<NonRevokedInterval>,
}

impl PresentationRequest {
    /// The interval in force for the given per-referent interval: the
    /// referent's own wins over the request-level default.
    pub fn effective_interval<'a>(
        &'a self,
        referent_interval: Option<&'a NonRevokedInterval>,
    ) -> Option<(&'a NonRevokedInterval, IntervalOrigin)> {
        match referent_interval {
            Some(interval) => Some((interval, IntervalOrigin::Referent)),
            None => self
                .non_revoked
                .as_ref()
                .map(|interval| (interval, IntervalOrigin::Request)),
        }
    }
}

/// Where an effective non-revocation interval came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntervalOrigin {
    Referent,
    Request,
}

impl Validatable for PresentationRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        for (referent, info) in &self.requested_attributes {
            info.validate().map_err(|err| {
                crate::invalid!("Requested attribute '{}' is invalid: {}", referent, err)
            })?;
        }
        Ok(())
    }
}

/// A time window within which a credential must be proven not-revoked.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct NonRevokedInterval {
    pub from: Option<u64>,
    pub to: Option<u64>,
}

impl NonRevokedInterval {
    pub const fn new(from: Option<u64>, to: Option<u64>) -> Self {
        Self { from, to }
    }

    /// Whether the timestamp lies inside the window. Open bounds are
    /// unbounded on that side.
    pub fn covers(&self, timestamp: u64) -> bool {
        timestamp >= self.from.unwrap_or(0) && timestamp <= self.to.unwrap_or(u64::MAX)
    }
}

impl fmt::Display for NonRevokedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}]",
            self.from.map_or_else(|| "-".to_string(), |v| v.to_string()),
            self.to.map_or_else(|| "-".to_string(), |v| v.to_string()),
        )
    }
}

/// One restriction clause: every named property must match for a credential
/// to satisfy it, e.g. `{"issuer_did": "NcYxiDXkpYi6ov5FcYDi1e"}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct AttributeRestriction(pub BTreeMap<String, String>);

#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
pub struct AttributeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub names: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<AttributeRestriction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_revoked: Option<NonRevokedInterval>,
}

impl AttributeInfo {
    /// The requested attribute names: `names` for a group request, otherwise
    /// the single `name`.
    pub fn requested_names(&self) -> Vec<String> {
        match (&self.name, &self.names) {
            (_, Some(names)) => names.clone(),
            (Some(name), None) => vec![name.clone()],
            (None, None) => Vec::new(),
        }
    }

    pub fn has_restrictions(&self) -> bool {
        !self.restrictions.is_empty()
    }
}

impl Validatable for AttributeInfo {
    fn validate(&self) -> Result<(), ValidationError> {
        match (&self.name, &self.names) {
            (Some(_), Some(_)) => Err(crate::invalid!(
                "Requested attribute specifies both name and names"
            )),
            (None, None) => Err(crate::invalid!(
                "Requested attribute specifies neither name nor names"
            )),
            (None, Some(names)) if names.is_empty() => {
                Err(crate::invalid!("Requested attribute names must not be empty"))
            }
            _ => Ok(()),
        }
    }
}

pub type PredicateValue = i32;

#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct PredicateInfo {
    pub name: String,
    pub p_type: PredicateTypes,
    pub p_value: PredicateValue,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub restrictions: Vec<AttributeRestriction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub non_revoked: Option<NonRevokedInterval>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub enum PredicateTypes {
    #[serde(rename = ">=")]
    GE,
    #[serde(rename = "<=")]
    LE,
    #[serde(rename = ">")]
    GT,
    #[serde(rename = "<")]
    LT,
}

impl fmt::Display for PredicateTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GE => write!(f, "GE"),
            Self::GT => write!(f, "GT"),
            Self::LE => write!(f, "LE"),
            Self::LT => write!(f, "LT"),
        }
    }
}
