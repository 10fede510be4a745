use std::collections::BTreeMap;

use log::trace;
use pres_types::data_types::messages::{
    pres_request::{IntervalOrigin, NonRevokedInterval, PresentationRequest},
    presentation::{Identifier, Presentation, RevealedAttr, RevealedAttrGroup, SubProofReferent},
};

use crate::verifier::{crypto::LedgerContext, messages::PresVerifyMsg};

/// Which section of `requested_proof` a referent showed up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Category {
    Revealed,
    RevealedGroup,
    SelfAttested,
    Unrevealed,
    Predicate,
}

impl Category {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            Self::Revealed => "revealed_attrs",
            Self::RevealedGroup => "revealed_attr_groups",
            Self::SelfAttested => "self_attested_attrs",
            Self::Unrevealed => "unrevealed_attrs",
            Self::Predicate => "predicates",
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Binding {
    Revealed(RevealedAttr),
    RevealedGroup(RevealedAttrGroup),
    SelfAttested(String),
    Unrevealed(SubProofReferent),
    Predicate(SubProofReferent),
}

impl Binding {
    const fn sub_proof_index(&self) -> Option<u32> {
        match self {
            Self::SelfAttested(_) => None,
            Self::Revealed(RevealedAttr {
                sub_proof_index, ..
            })
            | Self::RevealedGroup(RevealedAttrGroup {
                sub_proof_index, ..
            })
            | Self::Unrevealed(SubProofReferent { sub_proof_index })
            | Self::Predicate(SubProofReferent { sub_proof_index }) => Some(*sub_proof_index),
        }
    }
}

/// The interval in force for one referent after applying the
/// per-referent-over-request-level precedence rule.
#[derive(Clone, Copy, Debug)]
pub(crate) struct EffectiveInterval {
    pub interval: NonRevokedInterval,
    pub origin: IntervalOrigin,
}

/// Working state for one requested referent. This is the pipeline's local
/// copy; the normalizer mutates it freely while the inputs stay untouched.
#[derive(Debug)]
pub(crate) struct ReferentSlot {
    pub is_predicate: bool,
    /// Requested attribute names (one entry for `name`, several for `names`,
    /// the predicate attribute for predicates).
    pub attr_names: Vec<String>,
    pub has_restrictions: bool,
    pub categories: Vec<Category>,
    pub binding: Option<Binding>,
    /// Identifier resolved through the binding's `sub_proof_index`.
    pub cred: Option<Identifier>,
    /// Whether the backing credential definition supports revocation;
    /// `None` when it could not be resolved.
    pub revocable: Option<bool>,
    /// Working copy of the credential's non-revocation timestamp.
    pub timestamp: Option<u64>,
    /// Working copy of the effective requested interval.
    pub interval: Option<EffectiveInterval>,
}

#[derive(Debug, Default)]
pub(crate) struct WorkingView {
    pub slots: BTreeMap<String, ReferentSlot>,
}

/// Binds the presentation to its request: one slot per requested referent,
/// annotated with every section of the presentation that mentions it, the
/// resolved credential identifier and the effective non-revocation interval.
///
/// Structural violations (entries for referents never requested, credential
/// indexes that do not resolve, unknown credential definitions) surface as
/// `VALUE_ERROR` messages; the view is still returned so later steps can
/// collect further context.
pub(crate) fn load_working_view(
    pres_req: &PresentationRequest,
    presentation: &Presentation,
    ledger: &LedgerContext,
    msgs: &mut Vec<PresVerifyMsg>,
) -> WorkingView {
    trace!(
        "load_working_view >> request '{}' with {} attribute and {} predicate referents",
        pres_req.name,
        pres_req.requested_attributes.len(),
        pres_req.requested_predicates.len()
    );

    let mut view = WorkingView::default();

    for (referent, info) in &pres_req.requested_attributes {
        let interval = pres_req
            .effective_interval(info.non_revoked.as_ref())
            .map(|(interval, origin)| EffectiveInterval {
                interval: *interval,
                origin,
            });
        view.slots.insert(
            referent.clone(),
            ReferentSlot {
                is_predicate: false,
                attr_names: info.requested_names(),
                has_restrictions: info.has_restrictions(),
                categories: Vec::new(),
                binding: None,
                cred: None,
                revocable: None,
                timestamp: None,
                interval,
            },
        );
    }

    for (referent, info) in &pres_req.requested_predicates {
        let interval = pres_req
            .effective_interval(info.non_revoked.as_ref())
            .map(|(interval, origin)| EffectiveInterval {
                interval: *interval,
                origin,
            });
        view.slots.insert(
            referent.clone(),
            ReferentSlot {
                is_predicate: true,
                attr_names: vec![info.name.clone()],
                has_restrictions: !info.restrictions.is_empty(),
                categories: Vec::new(),
                binding: None,
                cred: None,
                revocable: None,
                timestamp: None,
                interval,
            },
        );
    }

    let proof = &presentation.requested_proof;
    for (referent, attr) in &proof.revealed_attrs {
        bind(
            &mut view,
            referent,
            Category::Revealed,
            Binding::Revealed(attr.clone()),
            msgs,
        );
    }
    for (referent, group) in &proof.revealed_attr_groups {
        bind(
            &mut view,
            referent,
            Category::RevealedGroup,
            Binding::RevealedGroup(group.clone()),
            msgs,
        );
    }
    for (referent, value) in &proof.self_attested_attrs {
        bind(
            &mut view,
            referent,
            Category::SelfAttested,
            Binding::SelfAttested(value.clone()),
            msgs,
        );
    }
    for (referent, entry) in &proof.unrevealed_attrs {
        bind(
            &mut view,
            referent,
            Category::Unrevealed,
            Binding::Unrevealed(*entry),
            msgs,
        );
    }
    for (referent, entry) in &proof.predicates {
        bind(
            &mut view,
            referent,
            Category::Predicate,
            Binding::Predicate(*entry),
            msgs,
        );
    }

    for (referent, slot) in &mut view.slots {
        let Some(index) = slot.binding.as_ref().and_then(Binding::sub_proof_index) else {
            continue;
        };
        let Some(identifier) = presentation.identifiers.get(index as usize) else {
            msgs.push(PresVerifyMsg::ValueError(format!(
                "Credential index {index} for referent '{referent}' does not resolve to a \
                 credential identifier"
            )));
            continue;
        };

        match ledger.cred_defs.get(&identifier.cred_def_id) {
            Some(cred_def) => slot.revocable = Some(cred_def.supports_revocation()),
            None => {
                msgs.push(PresVerifyMsg::ValueError(format!(
                    "Credential definition '{}' for referent '{referent}' not found",
                    identifier.cred_def_id
                )));
            }
        }
        slot.timestamp = identifier.timestamp;
        slot.cred = Some(identifier.clone());
    }

    view
}

fn bind(
    view: &mut WorkingView,
    referent: &str,
    category: Category,
    binding: Binding,
    msgs: &mut Vec<PresVerifyMsg>,
) {
    match view.slots.get_mut(referent) {
        Some(slot) => {
            slot.categories.push(category);
            if slot.binding.is_none() {
                slot.binding = Some(binding);
            }
        }
        None => {
            msgs.push(PresVerifyMsg::ValueError(format!(
                "Presentation provides {} entry for referent '{referent}' that was not requested",
                category.as_str()
            )));
        }
    }
}
