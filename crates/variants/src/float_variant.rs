use core::any::Any;

use prototype_core::{Prototype, PrototypeResult};

/// Flat value holder around an `f32`, cloneable through the base capability.
///
/// Comparisons use IEEE-754 single-precision semantics: values written by
/// `set_value` are stored bit-exactly, so equality is exact for values that
/// never went through arithmetic. Derives `PartialEq` only, since NaN rules
/// out `Eq`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FloatVariant {
    value: f32,
}

impl FloatVariant {
    /// Create a variant holding the default value (0.0).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Overwrite the stored value. Always succeeds.
    pub fn set_value(&mut self, value: f32) {
        self.value = value;
    }
}

impl Prototype for FloatVariant {
    fn try_clone(&self) -> PrototypeResult<Box<dyn Prototype>> {
        Ok(Box::new(self.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
