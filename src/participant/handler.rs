pub(super) mod api {
    use axum::{
        Json,
        extract::{Path, State},
    };

    use crate::participant::{self, model::Participant};

    pub async fn find_all(
        participant_service: State<participant::Service>,
    ) -> Json<Vec<Participant>> {
        Json(participant_service.find_all().await)
    }

    pub async fn find_one(
        participant_service: State<participant::Service>,
        Path(id): Path<participant::Id>,
    ) -> crate::Result<Json<Participant>> {
        let p = participant_service.find_by_id(&id).await?;
        Ok(Json(p))
    }
}
