use anoncreds_clsignatures::bn::BigNumber;
use sha2::{Digest, Sha256};

use crate::{
    errors::error::{VerifierError, VerifierResult},
    verifier::{messages::PresVerifyMsg, reconcile::ReconciliationReport},
};

/// Canonical attribute encoding, identical to what issuers apply at issuance
/// time: a raw value parsing as a 32-bit integer encodes as that integer's
/// decimal form; anything else encodes as the SHA-256 digest of its UTF-8
/// bytes, read as a big-endian integer and rendered in decimal.
pub fn encode(raw_value: &str) -> VerifierResult<String> {
    if let Ok(val) = raw_value.parse::<i32>() {
        return Ok(val.to_string());
    }

    let digest = Sha256::digest(raw_value.as_bytes());
    BigNumber::from_bytes(&digest)
        .and_then(|num| num.to_dec())
        .map_err(|err| {
            VerifierError::UrsaError(format!(
                "Failed to encode attribute value, ErrorKind: {:?}",
                err.kind()
            ))
        })
}

/// The proof commits to encoded values, so a revealed `raw` that does not
/// re-encode to its `encoded` means the disclosed value is not the one that
/// was signed. Every mismatch is fatal.
pub(crate) fn check_encoded_values(report: &ReconciliationReport, msgs: &mut Vec<PresVerifyMsg>) {
    for entry in &report.revealed {
        match encode(&entry.raw) {
            Ok(expected) if expected == entry.encoded => {}
            Ok(_) => {
                msgs.push(PresVerifyMsg::ValueError(format!(
                    "Encoded representation mismatch for '{}'",
                    entry.name
                )));
            }
            Err(err) => {
                msgs.push(PresVerifyMsg::ValueError(format!(
                    "Cannot encode value of '{}': {err}",
                    entry.name
                )));
            }
        }
    }
}
