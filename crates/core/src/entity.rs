//! Entity trait: identity that survives independently of attribute values.

/// Entity marker + minimal interface.
///
/// Two entities with the same attributes but different ids are distinct; an
/// inventory holding two "Widget x5" rows holds two entities.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
