use axum::{extract::State, Json};
use garde::Validate;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AppJson, AuthorizedUser},
    model::enrollment::{
        EnrollmentResponse, UpsertEnrollmentRequest, UpsertEnrollmentRequestWithUserId,
    },
};

pub async fn show_enrollment(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<EnrollmentResponse>> {
    registry
        .enrollment_repository()
        .find_by_user_id(user.id())
        .await?
        .map(EnrollmentResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound("参加登録が見つかりませんでした。".into()))
}

pub async fn upsert_enrollment(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<UpsertEnrollmentRequest>,
) -> AppResult<Json<EnrollmentResponse>> {
    req.validate(&())?;

    let enrollment = registry
        .enrollment_repository()
        .upsert(UpsertEnrollmentRequestWithUserId::new(user.id(), req).into())
        .await?;
    Ok(Json(enrollment.into()))
}
