use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    hotel::{Hotel, HotelWithRooms, Room},
    id::HotelId,
};
use kernel::repository::hotel::HotelRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    model::hotel::{HotelRow, RoomRow},
    ConnectionPool,
};

#[derive(new)]
pub struct HotelRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl HotelRepository for HotelRepositoryImpl {
    async fn find_all(&self) -> AppResult<Vec<Hotel>> {
        sqlx::query_as::<_, HotelRow>(
            r#"
                SELECT hotel_id, name, image
                FROM hotels
                ORDER BY hotel_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Hotel::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_with_rooms(&self, hotel_id: HotelId) -> AppResult<Option<HotelWithRooms>> {
        let hotel = sqlx::query_as::<_, HotelRow>(
            r#"
                SELECT hotel_id, name, image
                FROM hotels
                WHERE hotel_id = $1
            "#,
        )
        .bind(hotel_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        let Some(hotel) = hotel else {
            return Ok(None);
        };

        // 各部屋の現在の予約数を bookings から集計して一緒に返す
        let rooms = sqlx::query_as::<_, RoomRow>(
            r#"
                SELECT
                r.room_id,
                r.hotel_id,
                r.name,
                r.capacity,
                COUNT(b.booking_id)::INT4 AS occupancy
                FROM rooms AS r
                LEFT OUTER JOIN bookings AS b ON b.room_id = r.room_id
                WHERE r.hotel_id = $1
                GROUP BY r.room_id
                ORDER BY r.room_id ASC
            "#,
        )
        .bind(hotel_id)
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .into_iter()
        .map(Room::from)
        .collect();

        Ok(Some(HotelWithRooms {
            hotel: hotel.into(),
            rooms,
        }))
    }
}
