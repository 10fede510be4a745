use log::trace;

use crate::verifier::{
    loader::{Binding, WorkingView},
    messages::PresVerifyMsg,
};

/// One disclosed value scheduled for the encoded-value check.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct RevealedEntry {
    pub referent: String,
    /// Attribute name as requested, falling back to the referent when the
    /// request did not name one.
    pub name: String,
    pub raw: String,
    pub encoded: String,
}

/// Internal side data handed to the encoded-value checker; never exposed in
/// the public result.
#[derive(Debug, Default)]
pub(crate) struct ReconciliationReport {
    pub revealed: Vec<RevealedEntry>,
}

/// Matches every requested referent against what the presentation actually
/// provides: each must land in exactly one section, self-attested values are
/// only lawful for unrestricted requests, and unrevealed attributes are
/// reported so the caller's policy layer can see them.
pub(crate) fn reconcile(view: &WorkingView, msgs: &mut Vec<PresVerifyMsg>) -> ReconciliationReport {
    trace!("reconcile >> {} referents", view.slots.len());

    let mut report = ReconciliationReport::default();

    for (referent, slot) in &view.slots {
        match slot.categories.len() {
            0 => {
                msgs.push(PresVerifyMsg::ValueError(format!(
                    "Requested referent '{referent}' not provided by the presentation"
                )));
                continue;
            }
            1 => {}
            _ => {
                let sections = slot
                    .categories
                    .iter()
                    .map(|category| category.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                msgs.push(PresVerifyMsg::ValueError(format!(
                    "Referent '{referent}' provided in more than one section: {sections}"
                )));
                continue;
            }
        }

        let Some(binding) = slot.binding.as_ref() else {
            continue;
        };

        match binding {
            Binding::Predicate(_) if slot.is_predicate => {}
            Binding::Predicate(_) => {
                msgs.push(PresVerifyMsg::ValueError(format!(
                    "Referent '{referent}' was requested as an attribute but proven as a predicate"
                )));
            }
            _ if slot.is_predicate => {
                msgs.push(PresVerifyMsg::ValueError(format!(
                    "Referent '{referent}' was requested as a predicate but provided as an \
                     attribute"
                )));
            }
            Binding::SelfAttested(_) if slot.has_restrictions => {
                msgs.push(PresVerifyMsg::ValueError(format!(
                    "Referent '{referent}' is restricted but the presentation provides a \
                     self-attested value"
                )));
            }
            Binding::SelfAttested(_) => {}
            Binding::Unrevealed(_) => {
                msgs.push(PresVerifyMsg::UnrevealedAttributesPresent(referent.clone()));
            }
            Binding::Revealed(attr) => {
                if slot.attr_names.len() > 1 {
                    msgs.push(PresVerifyMsg::ValueError(format!(
                        "Referent '{referent}' requested {} attribute names but the presentation \
                         reveals a single value",
                        slot.attr_names.len()
                    )));
                    continue;
                }
                report.revealed.push(RevealedEntry {
                    referent: referent.clone(),
                    name: slot
                        .attr_names
                        .first()
                        .cloned()
                        .unwrap_or_else(|| referent.clone()),
                    raw: attr.raw.clone(),
                    encoded: attr.encoded.clone(),
                });
            }
            Binding::RevealedGroup(group) => {
                for name in &slot.attr_names {
                    let Some(value) = group.values.get(name) else {
                        msgs.push(PresVerifyMsg::ValueError(format!(
                            "Revealed attribute group '{referent}' is missing requested \
                             attribute '{name}'"
                        )));
                        continue;
                    };
                    report.revealed.push(RevealedEntry {
                        referent: referent.clone(),
                        name: name.clone(),
                        raw: value.raw.clone(),
                        encoded: value.encoded.clone(),
                    });
                }
            }
        }
    }

    report
}
