use axum::{extract::State, Json};
use kernel::model::id::{HotelId, UserId};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AppPath, AuthorizedUser},
    model::hotel::{HotelResponse, HotelWithRoomsResponse},
};

// ホテル一覧・詳細の閲覧には、参加登録と「支払い済みかつホテル付き」のチケットが必要
async fn ensure_hotel_listing_allowed(registry: &AppRegistry, user_id: UserId) -> AppResult<()> {
    registry
        .enrollment_repository()
        .find_by_user_id(user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound("参加登録が見つかりませんでした。".into()))?;

    registry
        .ticket_repository()
        .find_paid_with_hotel_by_user_id(user_id)
        .await?;
    Ok(())
}

pub async fn show_hotel_list(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<HotelResponse>>> {
    ensure_hotel_listing_allowed(&registry, user.id()).await?;

    let hotels = registry.hotel_repository().find_all().await?;
    if hotels.is_empty() {
        return Err(AppError::EntityNotFound(
            "ホテルが登録されていません。".into(),
        ));
    }
    Ok(Json(hotels.into_iter().map(HotelResponse::from).collect()))
}

pub async fn show_hotel(
    user: AuthorizedUser,
    AppPath(hotel_id): AppPath<HotelId>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<HotelWithRoomsResponse>> {
    ensure_hotel_listing_allowed(&registry, user.id()).await?;

    registry
        .hotel_repository()
        .find_with_rooms(hotel_id)
        .await?
        .map(HotelWithRoomsResponse::from)
        .map(Json)
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("ホテル（{}）が見つかりませんでした。", hotel_id))
        })
}
