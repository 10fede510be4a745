use crate::impl_object_identifier;

impl_object_identifier!(CredentialDefinitionId, LEGACY_CRED_DEF_IDENTIFIER);
