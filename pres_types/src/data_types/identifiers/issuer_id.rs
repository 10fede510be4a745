use crate::impl_object_identifier;

impl_object_identifier!(IssuerId, LEGACY_DID_IDENTIFIER);
