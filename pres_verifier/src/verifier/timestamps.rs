use log::trace;

use crate::verifier::{crypto::LedgerContext, loader::WorkingView, messages::PresVerifyMsg};

/// Honest provers drift; tampered timestamps do not sit 5 minutes ahead by
/// accident. Timestamps further in the future than this are rejected.
pub(crate) const FUTURE_TIMESTAMP_SLACK_SECS: u64 = 300;

/// Checks every revocable referent's non-revocation timestamp against the
/// request and the registry timeline, as of `now`.
///
/// Inadmissible timestamps (missing or superfluous relative to the request,
/// unresolvable registry, in the future, predating registry creation, no
/// matching delta) are fatal. A timestamp that is admissible but falls
/// outside the requested interval is only a warning: the proof can still be
/// sound and the caller applies its own policy.
pub(crate) fn validate_timestamps(
    view: &WorkingView,
    ledger: &LedgerContext,
    now: u64,
    msgs: &mut Vec<PresVerifyMsg>,
) {
    trace!("validate_timestamps >> now {now}");

    for (referent, slot) in &view.slots {
        if slot.revocable != Some(true) {
            continue;
        }

        match (slot.interval, slot.timestamp) {
            (None, None) => {}
            (Some(_), None) => {
                msgs.push(PresVerifyMsg::ValueError(format!(
                    "Missing timestamp for referent '{referent}' with a requested non-revocation \
                     interval"
                )));
            }
            (None, Some(timestamp)) => {
                msgs.push(PresVerifyMsg::ValueError(format!(
                    "Timestamp {timestamp} superfluous for referent '{referent}' with no \
                     requested non-revocation interval"
                )));
            }
            (Some(effective), Some(timestamp)) => {
                let Some(rev_reg_id) = slot.cred.as_ref().and_then(|cred| cred.rev_reg_id.clone())
                else {
                    msgs.push(PresVerifyMsg::ValueError(format!(
                        "Missing revocation registry id for revocable referent '{referent}'"
                    )));
                    continue;
                };

                let Some(rev_reg_def) = ledger.rev_reg_defs.get(&rev_reg_id) else {
                    msgs.push(PresVerifyMsg::ValueError(format!(
                        "Revocation registry '{rev_reg_id}' for referent '{referent}' not found"
                    )));
                    continue;
                };

                if timestamp > now + FUTURE_TIMESTAMP_SLACK_SECS {
                    msgs.push(PresVerifyMsg::ValueError(format!(
                        "Timestamp {timestamp} for referent '{referent}' is in the future"
                    )));
                    continue;
                }

                if let Some(created) = rev_reg_def.txn_time {
                    if timestamp < created {
                        msgs.push(PresVerifyMsg::ValueError(format!(
                            "Timestamp {timestamp} for referent '{referent}' predates revocation \
                             registry creation at {created}"
                        )));
                        continue;
                    }
                }

                let delta_known = ledger
                    .rev_reg_deltas
                    .get(&rev_reg_id)
                    .is_some_and(|deltas| deltas.contains_key(&timestamp));
                if !delta_known {
                    msgs.push(PresVerifyMsg::ValueError(format!(
                        "No revocation registry delta supplied for '{rev_reg_id}' at timestamp \
                         {timestamp}"
                    )));
                    continue;
                }

                if !effective.interval.covers(timestamp) {
                    msgs.push(PresVerifyMsg::TimestampOutsideNonRevocInterval(
                        referent.clone(),
                    ));
                }
            }
        }
    }
}
