use thiserror::Error as ThisError;

pub type VerifierResult<T> = Result<T, VerifierError>;

#[derive(Debug, ThisError)]
pub enum VerifierError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Invalid proof: {0}")]
    InvalidProof(String),
    #[error("Invalid proof credential data: {0}")]
    InvalidProofCredentialData(String),
    #[error("Invalid revocation timestamp: {0}")]
    InvalidRevocationTimestamp(String),
    #[error("Invalid revocation details: {0}")]
    InvalidRevocationDetails(String),
    #[error("Ursa error: {0}")]
    UrsaError(String),
    /// Raised by a [`CryptoVerifier`](crate::verifier::crypto::CryptoVerifier)
    /// backend; carries the backend's own text untouched so the resulting
    /// `VERIFY_ERROR` message reports it verbatim.
    #[error("{0}")]
    Backend(String),
}
