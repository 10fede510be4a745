use log::debug;
use pres_types::data_types::messages::pres_request::IntervalOrigin;

use crate::verifier::{loader::WorkingView, messages::PresVerifyMsg};

/// Strips non-revocation state that is meaningless for non-revocable
/// credentials. An interval (or stray timestamp) on an irrevocable
/// credential is holder noise, not tampering: it is removed from the working
/// view and reported, never rejected.
///
/// Per-referent intervals are reported one message per referent; the
/// request-level default is reported once however many referents leaned on
/// it.
pub(crate) fn normalize_non_revoc_intervals(view: &mut WorkingView, msgs: &mut Vec<PresVerifyMsg>) {
    let mut removed_request_level = false;

    for (referent, slot) in &mut view.slots {
        if slot.revocable != Some(false) {
            continue;
        }

        slot.timestamp = None;

        let Some(effective) = slot.interval.take() else {
            continue;
        };
        debug!(
            "normalize_non_revoc_intervals >> dropping interval {} on non-revocable referent \
             '{referent}'",
            effective.interval
        );
        match effective.origin {
            IntervalOrigin::Referent => {
                msgs.push(PresVerifyMsg::RemovedReferentNonRevocInterval(
                    referent.clone(),
                ));
            }
            IntervalOrigin::Request => removed_request_level = true,
        }
    }

    if removed_request_level {
        msgs.push(PresVerifyMsg::RemovedGlobalNonRevocInterval);
    }
}
