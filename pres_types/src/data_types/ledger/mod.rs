pub mod cred_def;
pub mod rev_reg_def;
pub mod rev_reg_delta;
pub mod schema;
