use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    Id,
    model::{Group, NewGroup},
};

#[async_trait]
pub trait GroupRepository {
    async fn create(&self, g: &NewGroup) -> super::Result<Id>;

    async fn find_all(&self) -> Vec<Group>;

    async fn find_by_id(&self, id: &Id) -> super::Result<Group>;

    /// Replaces the stored group wholesale. The replacement is trusted to
    /// carry the same id.
    async fn update(&self, id: &Id, g: Group) -> super::Result<()>;

    async fn delete(&self, id: &Id) -> super::Result<()>;
}

#[derive(Default)]
struct Store {
    // never decremented, so ids of deleted groups are not handed out again
    last_id: u64,
    groups: BTreeMap<Id, Group>,
}

#[derive(Default)]
pub struct InMemoryGroupRepository {
    store: RwLock<Store>,
}

impl InMemoryGroupRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn create(&self, g: &NewGroup) -> super::Result<Id> {
        let name = g.name().ok_or(super::Error::MissingName)?;

        let mut store = self.store.write().await;
        store.last_id += 1;
        let id = Id(store.last_id);

        store.groups.insert(
            id,
            Group::new(id, name, g.description().map(String::from)),
        );

        Ok(id)
    }

    async fn find_all(&self) -> Vec<Group> {
        self.store.read().await.groups.values().cloned().collect()
    }

    async fn find_by_id(&self, id: &Id) -> super::Result<Group> {
        self.store
            .read()
            .await
            .groups
            .get(id)
            .cloned()
            .ok_or(super::Error::NotFound(*id))
    }

    async fn update(&self, id: &Id, g: Group) -> super::Result<()> {
        let mut store = self.store.write().await;
        let stored = store
            .groups
            .get_mut(id)
            .ok_or(super::Error::NotFound(*id))?;

        *stored = g;

        Ok(())
    }

    async fn delete(&self, id: &Id) -> super::Result<()> {
        self.store
            .write()
            .await
            .groups
            .remove(id)
            .map(|_| ())
            .ok_or(super::Error::NotFound(*id))
    }
}
