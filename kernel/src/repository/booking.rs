use crate::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking,
    },
    id::{BookingId, UserId},
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // ユーザーの予約を部屋の情報付きで取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>>;
    // チケットの確認、部屋の空き確認、予約の作成を 1 つのトランザクションで行う
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // 本人の予約であることを確認してから、予約先の部屋を変更する
    async fn update(&self, event: UpdateBooking) -> AppResult<BookingId>;
}
