pub mod authn;
pub mod error;
