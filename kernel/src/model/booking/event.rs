use crate::model::id::{BookingId, RoomId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreateBooking {
    pub user_id: UserId,
    pub room_id: RoomId,
}

// booking_id はリクエストのパスで指定された値。本人の予約と一致するかは更新処理の中で確認する
#[derive(new)]
pub struct UpdateBooking {
    pub booking_id: BookingId,
    pub requested_user: UserId,
    pub room_id: RoomId,
}
