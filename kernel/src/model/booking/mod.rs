use crate::model::{
    hotel::Room,
    id::{BookingId, UserId},
};
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    pub booking_id: BookingId,
    pub user_id: UserId,
    pub room: Room,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
