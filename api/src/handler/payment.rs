use axum::{extract::State, Json};
use garde::Validate;
use kernel::model::id::TicketId;
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AppJson, AppQuery, AuthorizedUser},
    model::payment::{
        CreatePaymentRequest, CreatePaymentRequestWithUserId, PaymentQuery, PaymentResponse,
    },
};

pub async fn show_payment(
    user: AuthorizedUser,
    AppQuery(query): AppQuery<PaymentQuery>,
    State(registry): State<AppRegistry>,
) -> AppResult<Json<PaymentResponse>> {
    let ticket_id = TicketId::from(query.ticket_id);

    // 支払いがまだ無い場合も 404 とする
    registry
        .payment_repository()
        .find_by_ticket_id(ticket_id, user.id())
        .await?
        .map(PaymentResponse::from)
        .map(Json)
        .ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "チケット（{}）の支払いが見つかりませんでした。",
                ticket_id
            ))
        })
}

pub async fn process_payment(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    AppJson(req): AppJson<CreatePaymentRequest>,
) -> AppResult<Json<PaymentResponse>> {
    req.validate(&())?;

    let payment = registry
        .payment_repository()
        .create(CreatePaymentRequestWithUserId::new(user.id(), req).into())
        .await?;
    Ok(Json(payment.into()))
}
