use crate::model::id::{HotelId, RoomId};
use shared::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hotel {
    pub hotel_id: HotelId,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotelWithRooms {
    pub hotel: Hotel,
    pub rooms: Vec<Room>,
}

// capacity は部屋の定員（固定値）、occupancy はその部屋を参照している予約の件数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub room_id: RoomId,
    pub hotel_id: HotelId,
    pub name: String,
    pub capacity: i32,
    pub occupancy: i32,
}

impl Room {
    pub fn is_full(&self) -> bool {
        self.occupancy >= self.capacity
    }

    pub fn ensure_vacancy(&self) -> AppResult<()> {
        if self.is_full() {
            return Err(AppError::FullRoom(format!(
                "部屋（{}）は満室です（定員 {}）。",
                self.room_id, self.capacity
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room(capacity: i32, occupancy: i32) -> Room {
        Room {
            room_id: RoomId::from(7),
            hotel_id: HotelId::from(1),
            name: "101".into(),
            capacity,
            occupancy,
        }
    }

    #[test]
    fn room_with_free_seat_accepts_booking() {
        assert!(room(1, 0).ensure_vacancy().is_ok());
        assert!(room(3, 2).ensure_vacancy().is_ok());
    }

    #[test]
    fn room_at_capacity_is_full() {
        assert!(matches!(room(1, 1).ensure_vacancy(), Err(AppError::FullRoom(_))));
        assert!(matches!(room(0, 0).ensure_vacancy(), Err(AppError::FullRoom(_))));
        assert!(room(2, 3).is_full());
    }
}
