use kernel::model::{
    booking::Booking,
    hotel::Room,
    id::{BookingId, HotelId, RoomId, UserId},
};
use sqlx::types::chrono::{DateTime, Utc};

// bookings と rooms を INNER JOIN したレコード
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub room_name: String,
    pub capacity: i32,
    pub occupancy: i32,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            user_id,
            created_at,
            updated_at,
            room_id,
            hotel_id,
            room_name,
            capacity,
            occupancy,
        } = value;
        Booking {
            booking_id,
            user_id,
            created_at,
            updated_at,
            room: Room {
                room_id,
                hotel_id,
                name: room_name,
                capacity,
                occupancy,
            },
        }
    }
}
