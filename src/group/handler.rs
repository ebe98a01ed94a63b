pub(super) mod api {
    use axum::{
        Json,
        extract::{Path, State, rejection::JsonRejection},
        http::StatusCode,
        response::IntoResponse,
    };
    use serde_json::json;

    use crate::{
        group::{
            self,
            model::{Group, GroupPatch, NewGroup},
        },
        participant::model::NewParticipant,
    };

    pub async fn create(
        group_service: State<group::Service>,
        params: Result<Json<NewGroup>, JsonRejection>,
    ) -> crate::Result<impl IntoResponse> {
        let Json(params) = params?;
        let id = group_service.create(&params).await?;

        Ok((StatusCode::CREATED, Json(json!({ "group_id": id }))))
    }

    pub async fn find_all(group_service: State<group::Service>) -> Json<Vec<Group>> {
        Json(group_service.find_all().await)
    }

    pub async fn find_one(
        group_service: State<group::Service>,
        Path(id): Path<group::Id>,
    ) -> crate::Result<Json<Group>> {
        let g = group_service.find_by_id(&id).await?;
        Ok(Json(g))
    }

    pub async fn update(
        group_service: State<group::Service>,
        Path(id): Path<group::Id>,
        patch: Result<Json<GroupPatch>, JsonRejection>,
    ) -> crate::Result<impl IntoResponse> {
        let Json(patch) = patch?;
        group_service.update(&id, patch).await?;

        Ok(Json(json!({ "message": "group updated successfully" })))
    }

    pub async fn delete(
        group_service: State<group::Service>,
        Path(id): Path<group::Id>,
    ) -> crate::Result<StatusCode> {
        group_service.delete(&id).await?;
        Ok(StatusCode::NO_CONTENT)
    }

    pub async fn add_participant(
        group_service: State<group::Service>,
        Path(id): Path<group::Id>,
        params: Result<Json<NewParticipant>, JsonRejection>,
    ) -> crate::Result<impl IntoResponse> {
        let Json(params) = params?;
        let participant_id = group_service.add_participant(&id, &params).await?;

        Ok((StatusCode::CREATED, Json(json!({ "part_id": participant_id }))))
    }
}
