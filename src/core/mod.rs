// src/core/mod.rs

//! Profile logic with no direct OS access.

pub mod applier;
pub mod paths;
pub mod profile_store;
pub mod translator;
pub mod validator;
