use derive_new::new;
use garde::Validate;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking,
    },
    id::{BookingId, RoomId, UserId},
};
use serde::{Deserialize, Serialize};

use super::hotel::RoomResponse;

// 作成・変更とも、リクエストボディは予約先の部屋 ID のみ
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    #[garde(range(min = 1))]
    pub room_id: i32,
}

#[derive(new)]
pub struct CreateBookingRequestWithUserId(UserId, BookingRequest);

impl From<CreateBookingRequestWithUserId> for CreateBooking {
    fn from(value: CreateBookingRequestWithUserId) -> Self {
        let CreateBookingRequestWithUserId(user_id, BookingRequest { room_id }) = value;
        CreateBooking {
            user_id,
            room_id: RoomId::from(room_id),
        }
    }
}

#[derive(new)]
pub struct UpdateBookingRequestWithIds(BookingId, UserId, BookingRequest);

impl From<UpdateBookingRequestWithIds> for UpdateBooking {
    fn from(value: UpdateBookingRequestWithIds) -> Self {
        let UpdateBookingRequestWithIds(booking_id, requested_user, BookingRequest { room_id }) =
            value;
        UpdateBooking {
            booking_id,
            requested_user,
            room_id: RoomId::from(room_id),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingIdResponse {
    pub booking_id: BookingId,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: BookingId,
    pub room: RoomResponse,
}

impl From<Booking> for BookingResponse {
    fn from(value: Booking) -> Self {
        let Booking {
            booking_id, room, ..
        } = value;
        Self {
            id: booking_id,
            room: room.into(),
        }
    }
}
