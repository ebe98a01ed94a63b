use async_trait::async_trait;
use log::{debug, info};
use tokio::sync::Mutex;

use crate::participant::{self, model::NewParticipant};

use super::{
    Id, Repository,
    model::{Group, GroupPatch, NewGroup},
};

#[async_trait]
pub trait GroupService {
    async fn create(&self, g: &NewGroup) -> super::Result<Id>;

    async fn find_all(&self) -> Vec<Group>;

    async fn find_by_id(&self, id: &Id) -> super::Result<Group>;

    async fn update(&self, id: &Id, patch: GroupPatch) -> super::Result<Group>;

    async fn delete(&self, id: &Id) -> super::Result<()>;

    /// Creates a participant and attaches a snapshot of it to the group.
    async fn add_participant(
        &self,
        id: &Id,
        p: &NewParticipant,
    ) -> super::Result<participant::Id>;
}

pub struct GroupServiceImpl {
    repo: Repository,
    participant_service: participant::Service,
    // held across every read-modify-write of a group and across deletes
    write_lock: Mutex<()>,
}

impl GroupServiceImpl {
    pub fn new(repo: Repository, participant_service: participant::Service) -> Self {
        Self {
            repo,
            participant_service,
            write_lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl GroupService for GroupServiceImpl {
    async fn create(&self, g: &NewGroup) -> super::Result<Id> {
        let id = self.repo.create(g).await?;
        info!("group {id} created");
        Ok(id)
    }

    async fn find_all(&self) -> Vec<Group> {
        self.repo.find_all().await
    }

    async fn find_by_id(&self, id: &Id) -> super::Result<Group> {
        self.repo.find_by_id(id).await
    }

    async fn update(&self, id: &Id, patch: GroupPatch) -> super::Result<Group> {
        let _guard = self.write_lock.lock().await;

        let mut g = self.repo.find_by_id(id).await?;
        g.merge(patch);
        self.repo.update(id, g.clone()).await?;

        debug!("group {id} updated");
        Ok(g)
    }

    async fn delete(&self, id: &Id) -> super::Result<()> {
        let _guard = self.write_lock.lock().await;

        self.repo.delete(id).await?;

        info!("group {id} deleted");
        Ok(())
    }

    async fn add_participant(
        &self,
        id: &Id,
        p: &NewParticipant,
    ) -> super::Result<participant::Id> {
        let _guard = self.write_lock.lock().await;

        // resolve the group first so a missing one leaves no participant behind
        let mut g = self.repo.find_by_id(id).await?;

        let participant_id = self.participant_service.create(p).await?;
        let participant = self.participant_service.find_by_id(&participant_id).await?;

        g.attach(participant);
        self.repo.update(id, g).await?;

        info!("participant {participant_id} attached to group {id}");
        Ok(participant_id)
    }
}
