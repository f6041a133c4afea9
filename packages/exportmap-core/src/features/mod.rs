//! Feature modules

pub mod extraction;
