// EN: src/cli/handlers/mod.rs

// One module per CLI action.

#![allow(missing_docs)]

pub mod apply;
pub mod commons;
pub mod create;
pub mod delete;
pub mod help;
pub mod interfaces;
pub mod list;
