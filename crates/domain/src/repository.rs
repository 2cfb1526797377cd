use crate::aggregate::{AggregateRoot, Identifier};
use crate::error::{DomainError, Result};
use async_trait::async_trait;

/// Storage-agnostic persistence contract for one aggregate type
///
/// Implementations live in the infrastructure layer. Every backend must
/// return the same logical results for the same sequence of calls.
#[async_trait]
pub trait Repository<K, V>: Send + Sync
where
    K: Identifier,
    V: AggregateRoot<Id = K>,
{
    /// Store a new aggregate
    ///
    /// Fails with [`DomainError::DuplicateIdentity`] when an aggregate with
    /// the same ID is already stored; the stored one is left untouched.
    async fn save(&self, entity: V) -> Result<V>;

    /// Snapshot of every stored aggregate, in insertion order
    async fn find_all(&self) -> Result<Vec<V>>;

    /// Absence is `Ok(None)`, not an error
    async fn of_identity(&self, id: &K) -> Result<Option<V>>;

    async fn contains_of_identity(&self, id: &K) -> Result<bool>;

    /// Replace a stored aggregate, returning `None` when nothing is stored
    /// under its ID.
    ///
    /// Backends that cannot update keep this default and report
    /// [`DomainError::UnsupportedOperation`].
    async fn update(&self, _entity: V) -> Result<Option<V>> {
        Err(DomainError::UnsupportedOperation("update"))
    }
}
