use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{
    Id,
    model::{NewParticipant, Participant},
};

#[async_trait]
pub trait ParticipantRepository {
    async fn create(&self, p: &NewParticipant) -> super::Result<Id>;

    async fn find_all(&self) -> Vec<Participant>;

    async fn find_by_id(&self, id: &Id) -> super::Result<Participant>;
}

#[derive(Default)]
struct Store {
    last_id: u64,
    participants: BTreeMap<Id, Participant>,
}

#[derive(Default)]
pub struct InMemoryParticipantRepository {
    store: RwLock<Store>,
}

impl InMemoryParticipantRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantRepository for InMemoryParticipantRepository {
    async fn create(&self, p: &NewParticipant) -> super::Result<Id> {
        let name = p.name().ok_or(super::Error::MissingName)?;

        let mut store = self.store.write().await;
        store.last_id += 1;
        let id = Id(store.last_id);

        store.participants.insert(
            id,
            Participant::new(id, name, p.wish().map(String::from)),
        );

        Ok(id)
    }

    async fn find_all(&self) -> Vec<Participant> {
        self.store
            .read()
            .await
            .participants
            .values()
            .cloned()
            .collect()
    }

    async fn find_by_id(&self, id: &Id) -> super::Result<Participant> {
        self.store
            .read()
            .await
            .participants
            .get(id)
            .cloned()
            .ok_or(super::Error::NotFound(*id))
    }
}
