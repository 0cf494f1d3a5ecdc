//! `prototype-variants` — concrete value holders implementing the prototype
//! capability.

pub mod float_variant;
pub mod int_variant;

pub use float_variant::FloatVariant;
pub use int_variant::IntVariant;
