use axum::{extract::State, http::StatusCode, Json};
use garde::Validate;
use kernel::model::{id::TicketTypeId, ticket::event::CreateTicket};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AppJson, AuthorizedUser},
    model::ticket::{CreateTicketRequest, TicketResponse, TicketTypeResponse},
};

pub async fn show_ticket_types(
    _user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<Vec<TicketTypeResponse>>> {
    let types = registry.ticket_repository().find_types().await?;
    Ok(Json(types.into_iter().map(TicketTypeResponse::from).collect()))
}

pub async fn show_ticket(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<TicketResponse>> {
    registry
        .ticket_repository()
        .find_by_user_id(user.id())
        .await?
        .map(TicketResponse::from)
        .map(Json)
        .ok_or_else(|| AppError::EntityNotFound("チケットが見つかりませんでした。".into()))
}

pub async fn create_ticket(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreateTicketRequest>,
) -> AppResult<(StatusCode, Json<TicketResponse>)> {
    req.validate(&())?;

    let ticket = registry
        .ticket_repository()
        .create(CreateTicket::new(
            user.id(),
            TicketTypeId::from(req.ticket_type_id),
        ))
        .await?;
    Ok((StatusCode::CREATED, Json(ticket.into())))
}
