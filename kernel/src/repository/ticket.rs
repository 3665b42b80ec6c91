use crate::model::{
    id::UserId,
    ticket::{event::CreateTicket, Ticket, TicketType},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait TicketRepository: Send + Sync {
    // チケット種別の一覧を取得する
    async fn find_types(&self) -> AppResult<Vec<TicketType>>;
    // ユーザーの参加登録に紐づくチケットを取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Ticket>>;
    // 参加登録に対して RESERVED 状態のチケットを作成する
    async fn create(&self, event: CreateTicket) -> AppResult<Ticket>;
    // ホテルを利用できる（支払い済み・現地参加・ホテル付き）チケットを取得する
    // チケットが無ければ EntityNotFound、条件を満たさなければ PaymentRequired
    async fn find_paid_with_hotel_by_user_id(&self, user_id: UserId) -> AppResult<Ticket>;
}
