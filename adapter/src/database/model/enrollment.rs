use kernel::model::{
    enrollment::Enrollment,
    id::{EnrollmentId, UserId},
};
use sqlx::types::chrono::NaiveDate;

#[derive(sqlx::FromRow)]
pub struct EnrollmentRow {
    pub enrollment_id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub cpf: String,
    pub birthday: NaiveDate,
    pub phone: String,
}

impl From<EnrollmentRow> for Enrollment {
    fn from(value: EnrollmentRow) -> Self {
        let EnrollmentRow {
            enrollment_id,
            user_id,
            name,
            cpf,
            birthday,
            phone,
        } = value;
        Enrollment {
            enrollment_id,
            user_id,
            name,
            cpf,
            birthday,
            phone,
        }
    }
}
