use kernel::model::{
    hotel::{Hotel, Room},
    id::{HotelId, RoomId},
};

#[derive(sqlx::FromRow)]
pub struct HotelRow {
    pub hotel_id: HotelId,
    pub name: String,
    pub image: String,
}

impl From<HotelRow> for Hotel {
    fn from(value: HotelRow) -> Self {
        let HotelRow {
            hotel_id,
            name,
            image,
        } = value;
        Hotel {
            hotel_id,
            name,
            image,
        }
    }
}

// occupancy は bookings の件数を集計した値
#[derive(sqlx::FromRow)]
pub struct RoomRow {
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: i32,
    pub occupancy: i32,
}

impl From<RoomRow> for Room {
    fn from(value: RoomRow) -> Self {
        let RoomRow {
            room_id,
            hotel_id,
            name,
            capacity,
            occupancy,
        } = value;
        Room {
            room_id,
            hotel_id,
            name,
            capacity,
            occupancy,
        }
    }
}

// 予約処理中に行ロックを取るときの型。occupancy は別途数える
#[derive(sqlx::FromRow)]
pub struct LockedRoomRow {
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: i32,
}

impl LockedRoomRow {
    pub fn into_room(self, occupancy: i32) -> Room {
        let LockedRoomRow {
            room_id,
            hotel_id,
            name,
            capacity,
        } = self;
        Room {
            room_id,
            hotel_id,
            name,
            capacity,
            occupancy,
        }
    }
}
