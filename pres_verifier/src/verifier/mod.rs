pub mod crypto;
pub(crate) mod encoding;
pub(crate) mod loader;
pub mod messages;
pub(crate) mod non_revoc_interval;
pub mod outcome;
pub(crate) mod reconcile;
pub(crate) mod timestamps;

use log::{debug, trace};
use pres_types::data_types::messages::{
    pres_request::PresentationRequest, presentation::Presentation,
};

use crate::verifier::{
    crypto::{CryptoVerifier, LedgerContext},
    encoding::check_encoded_values,
    loader::load_working_view,
    messages::PresVerifyMsg,
    non_revoc_interval::normalize_non_revoc_intervals,
    outcome::VerificationOutcome,
    reconcile::reconcile,
    timestamps::validate_timestamps,
};

pub use crate::verifier::encoding::encode;

/// Runs the full pre-validation and verification pipeline against the
/// current wall clock. See [`verify_presentation_at`].
pub fn verify_presentation(
    crypto: &impl CryptoVerifier,
    pres_req: &PresentationRequest,
    presentation: &Presentation,
    ledger: &LedgerContext,
) -> VerificationOutcome {
    verify_presentation_at(crypto, pres_req, presentation, ledger, now_unix())
}

/// Adjudicates a presentation against its request and the supplied ledger
/// objects, as of `now` (unix seconds).
///
/// The steps run in a fixed order: load, normalize non-revocation intervals,
/// validate revocation timestamps, reconcile referents, check encoded
/// values, and only then call the crypto backend. Every corrective action or
/// rejection along the way lands in the outcome's message list; any
/// `VALUE_ERROR` forces `verified = false` and suppresses the crypto call.
/// Backend failures are caught and reported as `VERIFY_ERROR`, never
/// propagated.
///
/// The pipeline holds no state across calls and never mutates its inputs;
/// identical inputs (including `now`) produce identical outcomes.
pub fn verify_presentation_at(
    crypto: &impl CryptoVerifier,
    pres_req: &PresentationRequest,
    presentation: &Presentation,
    ledger: &LedgerContext,
    now: u64,
) -> VerificationOutcome {
    trace!("verify_presentation >> request '{}'", pres_req.name);

    let mut msgs = Vec::new();

    let mut view = load_working_view(pres_req, presentation, ledger, &mut msgs);
    normalize_non_revoc_intervals(&mut view, &mut msgs);
    validate_timestamps(&view, ledger, now, &mut msgs);
    let report = reconcile(&view, &mut msgs);
    check_encoded_values(&report, &mut msgs);

    if msgs.iter().any(PresVerifyMsg::is_fatal) {
        debug!(
            "verify_presentation << pre-validation failed for request '{}': {:?}",
            pres_req.name, msgs
        );
        return VerificationOutcome {
            verified: false,
            messages: msgs,
        };
    }

    let verified = match crypto.verify_proof(
        pres_req,
        presentation,
        &ledger.schemas,
        &ledger.cred_defs,
        &ledger.rev_reg_defs,
        &ledger.rev_reg_deltas,
    ) {
        Ok(valid) => valid,
        Err(err) => {
            msgs.push(PresVerifyMsg::VerifyError(err.to_string()));
            false
        }
    };

    trace!("verify_presentation << verified: {verified}, msgs: {msgs:?}");
    VerificationOutcome {
        verified,
        messages: msgs,
    }
}

fn now_unix() -> u64 {
    u64::try_from(time::OffsetDateTime::now_utc().unix_timestamp()).unwrap_or(0)
}
