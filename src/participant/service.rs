use async_trait::async_trait;
use log::info;

use super::{
    Id, Repository,
    model::{NewParticipant, Participant},
};

#[async_trait]
pub trait ParticipantService {
    async fn create(&self, p: &NewParticipant) -> super::Result<Id>;

    async fn find_all(&self) -> Vec<Participant>;

    async fn find_by_id(&self, id: &Id) -> super::Result<Participant>;
}

#[derive(Clone)]
pub struct ParticipantServiceImpl {
    repo: Repository,
}

impl ParticipantServiceImpl {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ParticipantService for ParticipantServiceImpl {
    async fn create(&self, p: &NewParticipant) -> super::Result<Id> {
        let id = self.repo.create(p).await?;
        info!("participant {id} created");
        Ok(id)
    }

    async fn find_all(&self) -> Vec<Participant> {
        self.repo.find_all().await
    }

    async fn find_by_id(&self, id: &Id) -> super::Result<Participant> {
        self.repo.find_by_id(id).await
    }
}
