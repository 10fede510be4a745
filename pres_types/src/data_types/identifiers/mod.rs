pub mod cred_def_id;
pub mod issuer_id;
pub mod rev_reg_def_id;
pub mod schema_id;
