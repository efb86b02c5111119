//! Companies Module
//!
//! JSON-file-backed records of target companies and their initiatives.

mod model;
mod store;

pub use model::{Company, CompanyFile, MAX_INITIATIVES};
pub use store::CompanyStore;
