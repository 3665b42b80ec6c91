use axum::{extract::State, Json};
use garde::Validate;
use kernel::model::id::BookingId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AppJson, AppPath, AuthorizedUser},
    model::booking::{
        BookingIdResponse, BookingRequest, BookingResponse, CreateBookingRequestWithUserId,
        UpdateBookingRequestWithIds,
    },
};

pub async fn show_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<BookingResponse>> {
    registry
        .booking_repository()
        .find_by_user_id(user.id())
        .await?
        .map(BookingResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound("予約が見つかりませんでした。".into()))
}

pub async fn create_booking(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<BookingRequest>,
) -> AppResult<Json<BookingIdResponse>> {
    req.validate(&())?;

    // 予約系ではチケット未払いも 403 として返す
    let booking_id = registry
        .booking_repository()
        .create(CreateBookingRequestWithUserId::new(user.id(), req).into())
        .await
        .map_err(AppError::forbid_payment_required)?;

    Ok(Json(BookingIdResponse { booking_id }))
}

pub async fn update_booking(
    user: AuthorizedUser,
    AppPath(booking_id): AppPath<BookingId>,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<BookingRequest>,
) -> AppResult<Json<BookingIdResponse>> {
    req.validate(&())?;

    let booking_id = registry
        .booking_repository()
        .update(UpdateBookingRequestWithIds::new(booking_id, user.id(), req).into())
        .await
        .map_err(AppError::forbid_payment_required)?;

    Ok(Json(BookingIdResponse { booking_id }))
}
