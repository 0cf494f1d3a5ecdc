//! Prototype capability: produce an independent copy of yourself through the
//! base interface.

use core::any::Any;

use crate::error::PrototypeResult;

/// Self-cloning capability.
///
/// Implementers hand out a fresh, exclusively-owned copy of themselves,
/// returned through the base capability so callers can copy values they only
/// know as `dyn Prototype`.
///
/// ## Contract
///
/// - The returned box is a **new allocation**, value-equal to the receiver at
///   call time and independently mutable afterwards.
/// - The copy is **never the same instance** as the receiver (checkable with
///   `same_instance`).
/// - The only failure mode is `PrototypeError::AllocationFailure`; nothing
///   else can go wrong while copying a flat value holder.
///
/// ## Usage pattern
///
/// ```ignore
/// let mut source = IntVariant::new();
/// source.set_value(1);
///
/// let copy = source.try_clone()?;
/// source.set_value(2);
///
/// // The copy kept the value it was cloned with.
/// let copy = copy.as_any().downcast_ref::<IntVariant>().unwrap();
/// assert_eq!(copy.value(), 1);
/// ```
pub trait Prototype: core::fmt::Debug {
    /// Produce an independent, heap-allocated copy of this value.
    fn try_clone(&self) -> PrototypeResult<Box<dyn Prototype>>;

    /// Upcast for concrete-type access after cloning through the base
    /// capability.
    fn as_any(&self) -> &dyn Any;
}

/// Clone a prototype through the base capability.
///
/// Thin wrapper over `Prototype::try_clone` that traces the operation; handy
/// when the caller only holds `&dyn Prototype`.
pub fn clone_prototype(source: &dyn Prototype) -> PrototypeResult<Box<dyn Prototype>> {
    let copy = source.try_clone()?;
    tracing::trace!(source = ?source, "cloned prototype");
    Ok(copy)
}

/// Address identity for trait objects (vtable metadata ignored).
///
/// A copy handed out by `try_clone` must never be the same instance as its
/// source; this is the check used to assert that.
pub fn same_instance(a: &dyn Prototype, b: &dyn Prototype) -> bool {
    core::ptr::addr_eq(a, b)
}
