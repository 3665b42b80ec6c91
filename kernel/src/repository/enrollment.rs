use crate::model::{
    enrollment::{event::UpsertEnrollment, Enrollment},
    id::UserId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>>;
    async fn upsert(&self, event: UpsertEnrollment) -> AppResult<Enrollment>;
}
