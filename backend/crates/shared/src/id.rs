//! Typed entity IDs
//!
//! UUID wrappers distinguished at the type level so an account id can never
//! be passed where a content-item id is expected.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// Generic typed ID wrapper.
///
/// Usage:
/// ```
/// use shared::id::{Id, markers};
/// type AccountId = Id<markers::AdminAccount>;
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Id<T> {
    value: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// New random ID (UUID v4).
    pub fn new() -> Self {
        Self {
            value: Uuid::new_v4(),
            _marker: PhantomData,
        }
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            value: uuid,
            _marker: PhantomData,
        }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.value
    }

    pub fn into_uuid(self) -> Uuid {
        self.value
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<Uuid> for Id<T> {
    fn from(uuid: Uuid) -> Self {
        Self::from_uuid(uuid)
    }
}

impl<T> From<Id<T>> for Uuid {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

/// Marker types for entity IDs
pub mod markers {
    /// Marker for admin account IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AdminAccount;

    /// Marker for content item IDs
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ContentItem;
}

/// Admin account ID
pub type AccountId = Id<markers::AdminAccount>;
/// Content item ID
pub type ContentId = Id<markers::ContentItem>;
