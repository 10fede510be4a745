use crate::impl_object_identifier;

impl_object_identifier!(SchemaId, LEGACY_SCHEMA_IDENTIFIER);
