use std::sync::Arc;

use axum::extract::FromRef;

use crate::group::{
    self, repository::InMemoryGroupRepository, service::GroupServiceImpl,
};
use crate::participant::{
    self, repository::InMemoryParticipantRepository, service::ParticipantServiceImpl,
};

#[derive(Clone, FromRef)]
pub struct AppState {
    group_service: group::Service,
    participant_service: participant::Service,
}

impl AppState {
    /// Builds a fresh set of empty stores.
    pub fn init() -> Self {
        let participant_repo: participant::Repository =
            Arc::new(InMemoryParticipantRepository::new());
        let participant_service: participant::Service =
            Arc::new(ParticipantServiceImpl::new(participant_repo));

        let group_repo: group::Repository = Arc::new(InMemoryGroupRepository::new());
        let group_service: group::Service = Arc::new(GroupServiceImpl::new(
            group_repo,
            participant_service.clone(),
        ));

        Self {
            group_service,
            participant_service,
        }
    }
}
