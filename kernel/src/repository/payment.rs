use crate::model::{
    id::{TicketId, UserId},
    payment::{event::CreatePayment, Payment},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait PaymentRepository: Send + Sync {
    // 本人のチケットの支払い情報を取得する。未払いなら None
    async fn find_by_ticket_id(
        &self,
        ticket_id: TicketId,
        requested_user: UserId,
    ) -> AppResult<Option<Payment>>;
    // チケットを PAID にして支払いを記録する
    async fn create(&self, event: CreatePayment) -> AppResult<Payment>;
}
