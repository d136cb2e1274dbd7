//! Route handlers organized by resource

pub mod health;
pub mod site;
pub mod products;
pub mod gallery;
pub mod contact;
pub mod diagnostics;
