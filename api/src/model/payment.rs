use chrono::{DateTime, Utc};
use derive_new::new;
use garde::Validate;
use kernel::model::{
    id::{PaymentId, TicketId, UserId},
    payment::{
        event::{CardData, CreatePayment},
        Payment,
    },
};
use serde::{Deserialize, Serialize};

use super::only_digits;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentQuery {
    pub ticket_id: i32,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    #[garde(range(min = 1))]
    ticket_id: i32,
    #[garde(dive)]
    card_data: CardDataRequest,
}

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CardDataRequest {
    #[garde(length(min = 1))]
    issuer: String,
    #[garde(length(min = 4, max = 19), custom(only_digits))]
    number: String,
    #[garde(length(min = 1))]
    name: String,
    #[garde(length(min = 1))]
    expiration_date: String,
    #[garde(length(min = 3, max = 4))]
    cvv: String,
}

#[derive(new)]
pub struct CreatePaymentRequestWithUserId(UserId, CreatePaymentRequest);

impl From<CreatePaymentRequestWithUserId> for CreatePayment {
    fn from(value: CreatePaymentRequestWithUserId) -> Self {
        let CreatePaymentRequestWithUserId(
            requested_user,
            CreatePaymentRequest {
                ticket_id,
                card_data:
                    CardDataRequest {
                        issuer,
                        number,
                        name,
                        expiration_date,
                        cvv,
                    },
            },
        ) = value;
        CreatePayment {
            requested_user,
            ticket_id: TicketId::from(ticket_id),
            card: CardData {
                issuer,
                number,
                name,
                expiration_date,
                cvv,
            },
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub id: PaymentId,
    pub ticket_id: TicketId,
    pub value: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
    pub created_at: DateTime<Utc>,
}

impl From<Payment> for PaymentResponse {
    fn from(value: Payment) -> Self {
        let Payment {
            payment_id,
            ticket_id,
            value,
            card_issuer,
            card_last_digits,
            created_at,
        } = value;
        Self {
            id: payment_id,
            ticket_id,
            value,
            card_issuer,
            card_last_digits,
            created_at,
        }
    }
}
