use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use models::{Person, PersonInput, PersonPatch, ResourceId};

use crate::errors::ServiceError;
use crate::resource::store::ResourceStore;
use crate::storage::MemoryMapStore;

/// In-memory resource store.
///
/// Each instance owns its identity counter: ids start at 1, increase
/// monotonically, and are never decremented, reset, or reused, even after
/// deletion.
pub struct MemoryResourceStore {
    records: MemoryMapStore<ResourceId, Person>,
    next_id: AtomicU64,
}

impl MemoryResourceStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { records: MemoryMapStore::new(), next_id: AtomicU64::new(1) })
    }

    fn alloc_id(&self) -> ResourceId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Seed the three demo records served by the reference deployment.
    pub async fn seed_demo(&self) {
        let demo = [
            ("Alice", 30, true, (2020, 1, 1)),
            ("Bob", 25, false, (2021, 6, 15)),
            ("Charlie", 40, true, (2019, 9, 20)),
        ];
        for (name, age, is_active, (y, m, d)) in demo {
            self.create(PersonInput {
                name: name.to_string(),
                age,
                is_active,
                joined_date: Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).single(),
            })
            .await;
        }
    }
}

#[async_trait]
impl ResourceStore for MemoryResourceStore {
    async fn list(&self) -> Vec<Person> {
        self.records.list().await
    }

    async fn get(&self, id: ResourceId) -> Result<Person, ServiceError> {
        self.records
            .get(&id)
            .await
            .ok_or_else(|| ServiceError::not_found("resource"))
    }

    async fn create(&self, input: PersonInput) -> Person {
        let rec = Person::from_input(self.alloc_id(), input);
        self.records.insert(rec.id, rec.clone()).await;
        rec
    }

    async fn update(&self, id: ResourceId, patch: PersonPatch) -> Result<Person, ServiceError> {
        self.records
            .update_map(|map| {
                let existing = map
                    .get_mut(&id)
                    .ok_or_else(|| ServiceError::not_found("resource"))?;
                patch.apply(existing);
                Ok(existing.clone())
            })
            .await
    }

    async fn delete(&self, id: ResourceId) -> bool {
        self.records.remove(&id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, age: u32, is_active: bool) -> PersonInput {
        PersonInput { name: name.into(), age, is_active, joined_date: None }
    }

    #[tokio::test]
    async fn create_assigns_monotonic_ids_starting_at_one() {
        let store = MemoryResourceStore::new();
        let a = store.create(input("Alice", 30, true)).await;
        let b = store.create(input("Bob", 25, false)).await;
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert!(b.id > a.id);
    }

    #[tokio::test]
    async fn each_store_owns_its_counter() {
        let first = MemoryResourceStore::new();
        let second = MemoryResourceStore::new();
        assert_eq!(first.create(input("Alice", 30, true)).await.id, 1);
        assert_eq!(second.create(input("Bob", 25, false)).await.id, 1);
    }

    #[tokio::test]
    async fn get_returns_the_stored_record() {
        let store = MemoryResourceStore::new();
        let created = store.create(input("Alice", 30, true)).await;
        let fetched = store.get(created.id).await.expect("stored");
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found() {
        let store = MemoryResourceStore::new();
        assert!(matches!(store.get(99).await, Err(ServiceError::NotFound(_))));
    }

    #[tokio::test]
    async fn update_merges_only_patched_fields() {
        let store = MemoryResourceStore::new();
        let created = store.create(input("Alice", 30, true)).await;
        let patch = PersonPatch { age: Some(31), ..Default::default() };
        let updated = store.update(created.id, patch).await.expect("update");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.age, 31);
        assert_eq!(updated.name, "Alice");
        assert!(updated.is_active);
        // the stored state changed too
        assert_eq!(store.get(created.id).await.expect("stored").age, 31);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let store = MemoryResourceStore::new();
        let err = store.update(7, PersonPatch::default()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_reports_removal_and_ids_are_not_reused() {
        let store = MemoryResourceStore::new();
        let a = store.create(input("Alice", 30, true)).await;
        let b = store.create(input("Bob", 25, false)).await;

        assert!(store.delete(b.id).await);
        assert!(!store.delete(b.id).await);
        assert!(matches!(store.get(b.id).await, Err(ServiceError::NotFound(_))));

        // a fresh create never takes the deleted id
        let c = store.create(input("Charlie", 40, true)).await;
        assert_eq!(c.id, 3);
        assert_ne!(c.id, b.id);

        let remaining = store.list().await;
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().any(|p| p.id == a.id));
    }

    #[tokio::test]
    async fn list_is_a_snapshot() {
        let store = MemoryResourceStore::new();
        store.create(input("Alice", 30, true)).await;
        let snapshot = store.list().await;
        store.create(input("Bob", 25, false)).await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.list().await.len(), 2);
    }

    #[tokio::test]
    async fn seed_demo_populates_three_records() {
        let store = MemoryResourceStore::new();
        store.seed_demo().await;
        let mut all = store.list().await;
        all.sort_by_key(|p| p.id);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Alice");
        assert_eq!(all[1].name, "Bob");
        assert!(all[2].joined_date.is_some());
        // the counter continues after the seeds
        assert_eq!(store.create(input("Dora", 22, true)).await.id, 4);
    }

    // the worked example from the API contract, end to end at store level
    #[tokio::test]
    async fn crud_walkthrough() {
        let store = MemoryResourceStore::new();
        let alice = store.create(input("Alice", 30, true)).await;
        let bob = store.create(input("Bob", 25, false)).await;
        assert_eq!((alice.id, bob.id), (1, 2));

        let updated = store
            .update(alice.id, PersonPatch { age: Some(31), ..Default::default() })
            .await
            .expect("update");
        assert_eq!(updated.age, 31);
        assert_eq!(updated.name, "Alice");
        assert!(updated.is_active);

        assert!(store.delete(bob.id).await);
        let all = store.list().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, alice.id);
    }
}
