#[macro_use]
mod error;
pub use self::error::ValidationError;

pub mod data_types;
pub mod utils;
