use crate::model::id::UserId;
use chrono::{DateTime, Utc};

pub mod event;

#[derive(Debug, PartialEq, Eq)]
pub struct User {
    pub user_id: UserId,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
