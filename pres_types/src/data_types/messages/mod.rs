pub mod pres_request;
pub mod presentation;
