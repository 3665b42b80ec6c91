use chrono::NaiveDate;
use derive_new::new;
use garde::Validate;
use kernel::model::{
    enrollment::{event::UpsertEnrollment, Enrollment},
    id::{EnrollmentId, UserId},
};
use serde::{Deserialize, Serialize};

use super::only_digits;

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpsertEnrollmentRequest {
    #[garde(length(min = 3))]
    name: String,
    #[garde(length(min = 11, max = 11), custom(only_digits))]
    cpf: String,
    #[garde(skip)]
    birthday: NaiveDate,
    #[garde(length(min = 10, max = 20), custom(only_digits))]
    phone: String,
}

#[derive(new)]
pub struct UpsertEnrollmentRequestWithUserId(UserId, UpsertEnrollmentRequest);

impl From<UpsertEnrollmentRequestWithUserId> for UpsertEnrollment {
    fn from(value: UpsertEnrollmentRequestWithUserId) -> Self {
        let UpsertEnrollmentRequestWithUserId(
            user_id,
            UpsertEnrollmentRequest {
                name,
                cpf,
                birthday,
                phone,
            },
        ) = value;
        UpsertEnrollment {
            user_id,
            name,
            cpf,
            birthday,
            phone,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentResponse {
    pub id: EnrollmentId,
    pub user_id: UserId,
    pub name: String,
    pub cpf: String,
    pub birthday: NaiveDate,
    pub phone: String,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(value: Enrollment) -> Self {
        let Enrollment {
            enrollment_id,
            user_id,
            name,
            cpf,
            birthday,
            phone,
        } = value;
        Self {
            id: enrollment_id,
            user_id,
            name,
            cpf,
            birthday,
            phone,
        }
    }
}
