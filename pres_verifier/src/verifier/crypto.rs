use std::collections::BTreeMap;

use pres_types::data_types::{
    identifiers::{
        cred_def_id::CredentialDefinitionId, rev_reg_def_id::RevocationRegistryDefinitionId,
        schema_id::SchemaId,
    },
    ledger::{
        cred_def::CredentialDefinition, rev_reg_def::RevocationRegistryDefinition,
        rev_reg_delta::RevocationRegistryDelta, schema::Schema,
    },
    messages::{pres_request::PresentationRequest, presentation::Presentation},
};

use crate::errors::error::VerifierResult;

/// Ledger objects backing a single verification call, fully materialized by
/// the caller up front; the pipeline performs no I/O of its own. Deltas are
/// keyed by registry id, then by the timestamp they were fetched at.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LedgerContext {
    pub schemas: BTreeMap<SchemaId, Schema>,
    pub cred_defs: BTreeMap<CredentialDefinitionId, CredentialDefinition>,
    pub rev_reg_defs: BTreeMap<RevocationRegistryDefinitionId, RevocationRegistryDefinition>,
    pub rev_reg_deltas:
        BTreeMap<RevocationRegistryDefinitionId, BTreeMap<u64, RevocationRegistryDelta>>,
}

impl LedgerContext {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The opaque zero-knowledge verification primitive. The pipeline only calls
/// this after pre-validation found nothing fatal; whatever it returns or
/// raises is classified, never propagated to the caller.
///
/// `Ok(false)` means the proof mathematically does not verify. `Err` means
/// the backend itself failed (malformed proof, internal assertion, ...).
pub trait CryptoVerifier {
    fn verify_proof(
        &self,
        pres_req: &PresentationRequest,
        presentation: &Presentation,
        schemas: &BTreeMap<SchemaId, Schema>,
        cred_defs: &BTreeMap<CredentialDefinitionId, CredentialDefinition>,
        rev_reg_defs: &BTreeMap<RevocationRegistryDefinitionId, RevocationRegistryDefinition>,
        rev_reg_deltas: &BTreeMap<
            RevocationRegistryDefinitionId,
            BTreeMap<u64, RevocationRegistryDelta>,
        >,
    ) -> VerifierResult<bool>;
}
