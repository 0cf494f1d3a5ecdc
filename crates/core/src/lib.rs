//! `prototype-core` — base capability for self-cloning domain values.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod prototype;

pub use error::{PrototypeError, PrototypeResult};
pub use prototype::{Prototype, clone_prototype, same_instance};
