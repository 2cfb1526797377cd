use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A value object whose only role is naming one aggregate instance.
///
/// The string form is the natural key used by every storage backend.
pub trait Identifier: Clone + Eq + Hash + Debug + Display + Send + Sync + 'static {
    fn as_str(&self) -> &str;
}

/// Entity that is the single entry point of its cluster, addressed by `Id`.
///
/// Equality of aggregates is identity equality: implementors get
/// `PartialEq`, `Eq` and `Hash` through [`identity_equality!`] instead of
/// deriving them, so fields added later never take part in comparisons.
pub trait AggregateRoot: Clone + Debug + Send + Sync + 'static {
    type Id: Identifier;

    /// Name used in error messages ("Room with ID .. already exists.")
    const KIND: &'static str;

    /// Append-only aggregates refuse `update` in every backend
    const APPEND_ONLY: bool = false;

    fn id(&self) -> &Self::Id;

    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Implements `PartialEq`, `Eq` and `Hash` by delegating to
/// [`AggregateRoot::id`].
#[macro_export]
macro_rules! identity_equality {
    ($aggregate:ty) => {
        impl PartialEq for $aggregate {
            fn eq(&self, other: &Self) -> bool {
                $crate::aggregate::AggregateRoot::same_identity_as(self, other)
            }
        }

        impl Eq for $aggregate {}

        impl std::hash::Hash for $aggregate {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $crate::aggregate::AggregateRoot::id(self).hash(state);
            }
        }
    };
}
