use crate::errors::ServiceError;
use async_trait::async_trait;
use models::{Person, PersonInput, PersonPatch, ResourceId};

/// Trait abstraction for resource record storage.
/// Implementations can be in-memory, file-backed, or database-backed.
///
/// Missing ids are a uniform `NotFound` for `get` and `update`; `delete`
/// reports whether a record existed instead of failing.
#[async_trait]
pub trait ResourceStore: Send + Sync {
    /// Snapshot of all records, in unspecified order.
    async fn list(&self) -> Vec<Person>;
    async fn get(&self, id: ResourceId) -> Result<Person, ServiceError>;
    /// Assigns the next identity value and stores the record.
    async fn create(&self, input: PersonInput) -> Person;
    /// Shallow merge of the patch onto the stored record; the id is preserved.
    async fn update(&self, id: ResourceId, patch: PersonPatch) -> Result<Person, ServiceError>;
    /// Returns whether a record existed and was removed. The id is never
    /// reassigned afterwards.
    async fn delete(&self, id: ResourceId) -> bool;
}
