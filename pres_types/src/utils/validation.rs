use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;

/// DID-qualified identifier, e.g. `did:indy:sovrin:F72i3Y3Q4i466efjYJYCHM/anoncreds/v0/SCHEMA/npdb/4.3.4`.
pub static URI_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^did:[a-zA-Z0-9]+:.+$").unwrap());

/// Unqualified base58 DID, e.g. `NcYxiDXkpYi6ov5FcYDi1e`.
pub static LEGACY_DID_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{21,22}$").unwrap());

/// Legacy schema id, `<did>:2:<name>:<version>`.
pub static LEGACY_SCHEMA_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{21,22}:2:.+:[0-9.]+$").unwrap());

/// Legacy credential definition id, `<did>:3:CL:<schema seq no or id>:<tag>`.
pub static LEGACY_CRED_DEF_IDENTIFIER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{21,22}:3:CL:(([1-9][0-9]*)|([1-9A-HJ-NP-Za-km-z]{21,22}:2:.+:[0-9.]+)):.+$").unwrap()
});

/// Legacy revocation registry definition id, `<did>:4:<cred def id>:CL_ACCUM:<tag>`.
pub static LEGACY_REV_REG_DEF_IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9A-HJ-NP-Za-km-z]{21,22}:4:.+:CL_ACCUM:.+$").unwrap());

pub trait Validatable {
    fn validate(&self) -> Result<(), ValidationError>;
}
