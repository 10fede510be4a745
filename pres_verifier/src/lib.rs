pub mod errors;
pub mod verifier;

pub use crate::{
    errors::error::{VerifierError, VerifierResult},
    verifier::{
        crypto::{CryptoVerifier, LedgerContext},
        messages::PresVerifyMsg,
        outcome::VerificationOutcome,
        verify_presentation, verify_presentation_at,
    },
};
