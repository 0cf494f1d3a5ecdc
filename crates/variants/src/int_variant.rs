use core::any::Any;

use prototype_core::{Prototype, PrototypeResult};

/// Flat value holder around an `i32`, cloneable through the base capability.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntVariant {
    value: i32,
}

impl IntVariant {
    /// Create a variant holding the default value (0).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> i32 {
        self.value
    }

    /// Overwrite the stored value. Always succeeds.
    pub fn set_value(&mut self, value: i32) {
        self.value = value;
    }
}

impl Prototype for IntVariant {
    fn try_clone(&self) -> PrototypeResult<Box<dyn Prototype>> {
        Ok(Box::new(self.clone()))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prototype_core::same_instance;

    #[test]
    fn fresh_variant_holds_zero() {
        assert_eq!(IntVariant::new().value(), 0);
        assert_eq!(IntVariant::default().value(), 0);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut variant = IntVariant::new();

        variant.set_value(1);
        assert_eq!(variant.value(), 1);

        variant.set_value(-41);
        assert_eq!(variant.value(), -41);
    }

    #[test]
    fn clone_is_a_distinct_instance_with_equal_value() {
        let mut source = IntVariant::new();
        source.set_value(7);

        let copy = source.try_clone().unwrap();
        assert!(!same_instance(&source, copy.as_ref()));

        let copy = copy.as_any().downcast_ref::<IntVariant>().unwrap();
        assert_eq!(copy.value(), source.value());
    }

    #[test]
    fn mutating_the_source_leaves_the_clone_alone() {
        let mut source = IntVariant::new();
        source.set_value(1);

        let copy = source.try_clone().unwrap();
        source.set_value(2);

        let copy = copy.as_any().downcast_ref::<IntVariant>().unwrap();
        assert_eq!(copy.value(), 1);
        assert_ne!(copy.value(), source.value());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: set/get round-trips for any i32.
            #[test]
            fn set_get_round_trip(v in any::<i32>()) {
                let mut variant = IntVariant::new();
                variant.set_value(v);
                prop_assert_eq!(variant.value(), v);
            }

            /// Property: the clone carries the source value at clone time.
            #[test]
            fn clone_preserves_value(v in any::<i32>()) {
                let mut source = IntVariant::new();
                source.set_value(v);

                let copy = source.try_clone().unwrap();
                let copy = copy.as_any().downcast_ref::<IntVariant>().unwrap();
                prop_assert_eq!(copy.value(), v);
            }

            /// Property: clones stay frozen at the cloned value.
            #[test]
            fn clone_is_independent(v1 in any::<i32>(), v2 in any::<i32>()) {
                prop_assume!(v1 != v2);

                let mut source = IntVariant::new();
                source.set_value(v1);
                let copy = source.try_clone().unwrap();
                source.set_value(v2);

                let copy = copy.as_any().downcast_ref::<IntVariant>().unwrap();
                prop_assert_eq!(copy.value(), v1);
                prop_assert_ne!(copy.value(), source.value());
            }
        }
    }
}
