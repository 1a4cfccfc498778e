//! Entity trait: records that are looked up by identity.

/// A record with a stable identity that stores key on.
pub trait Entity {
    type Id: Clone + Eq + Ord + core::fmt::Debug;

    fn id(&self) -> &Self::Id;
}
