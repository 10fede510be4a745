use crate::impl_object_identifier;

impl_object_identifier!(RevocationRegistryDefinitionId, LEGACY_REV_REG_DEF_IDENTIFIER);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_rev_reg_def_id_is_accepted() {
        RevocationRegistryDefinitionId::new(
            "NcYxiDXkpYi6ov5FcYDi1e:4:NcYxiDXkpYi6ov5FcYDi1e:3:CL:1281:tag1:CL_ACCUM:tag1",
        )
        .unwrap();
    }

    #[test]
    fn malformed_rev_reg_def_id_is_rejected() {
        RevocationRegistryDefinitionId::new("NcYxiDXkpYi6ov5FcYDi1e:4:tag1").unwrap_err();
    }
}
