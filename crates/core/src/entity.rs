//! Entity trait: identity + continuity across state changes.
//!
//! An entity is the same entity for as long as its identifier is the same,
//! regardless of how its attributes change. Entities that have not been
//! assigned an identifier yet are *transient*.

use core::hash::{Hash, Hasher};

/// The identity slot of an entity: either an assigned identifier or transient.
///
/// Equality is identifier equality. A transient identity is unequal to every
/// identity, itself included, which is why this type implements `PartialEq`
/// but deliberately not `Eq`.
#[derive(Debug, Clone)]
pub struct Identity<Id> {
    id: Option<Id>,
}

impl<Id> Identity<Id> {
    /// Identity with an explicitly assigned identifier.
    pub fn assigned(id: Id) -> Self {
        Self { id: Some(id) }
    }

    /// Identity of an entity that has no identifier yet.
    pub fn transient() -> Self {
        Self { id: None }
    }

    pub fn id(&self) -> Option<&Id> {
        self.id.as_ref()
    }

    pub fn is_transient(&self) -> bool {
        self.id.is_none()
    }
}

impl<Id> Default for Identity<Id> {
    fn default() -> Self {
        Self::transient()
    }
}

impl<Id> From<Id> for Identity<Id> {
    fn from(value: Id) -> Self {
        Self::assigned(value)
    }
}

impl<Id: PartialEq> PartialEq for Identity<Id> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.id, &other.id) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

impl<Id: Hash> Hash for Identity<Id> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Transient identities never compare equal, so any fixed value is consistent.
        match &self.id {
            Some(id) => {
                state.write_u8(1);
                id.hash(state);
            }
            None => state.write_u8(0),
        }
    }
}

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + PartialEq + core::fmt::Debug;

    /// Returns the identity slot of this entity.
    fn identity(&self) -> &Identity<Self::Id>;

    /// Returns the entity identifier, `None` while transient.
    fn id(&self) -> Option<&Self::Id> {
        self.identity().id()
    }

    fn is_transient(&self) -> bool {
        self.identity().is_transient()
    }

    /// Identity comparison: both identifiers assigned and equal.
    fn same_identity_as(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

/// Implements `PartialEq` (and optionally `Hash`) for an entity type by
/// delegating to its [`Identity`].
///
/// ```ignore
/// impl_entity_identity!(Customer);
/// impl_entity_identity!(Order, hash);
/// ```
#[macro_export]
macro_rules! impl_entity_identity {
    ($t:ty) => {
        impl ::core::cmp::PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::Entity::same_identity_as(self, other)
            }
        }
    };
    ($t:ty, hash) => {
        $crate::impl_entity_identity!($t);

        impl ::core::hash::Hash for $t {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                ::core::hash::Hash::hash($crate::Entity::identity(self), state);
            }
        }
    };
}
