use kernel::model::{
    id::{PaymentId, TicketId, UserId},
    payment::Payment,
    ticket::TicketStatus,
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct PaymentRow {
    pub payment_id: PaymentId,
    pub ticket_id: TicketId,
    pub value: i32,
    pub card_issuer: String,
    pub card_last_digits: String,
    pub created_at: DateTime<Utc>,
}

impl From<PaymentRow> for Payment {
    fn from(value: PaymentRow) -> Self {
        let PaymentRow {
            payment_id,
            ticket_id,
            value,
            card_issuer,
            card_last_digits,
            created_at,
        } = value;
        Payment {
            payment_id,
            ticket_id,
            value,
            card_issuer,
            card_last_digits,
            created_at,
        }
    }
}

// 支払い前のチェックに使う、チケットの状態と持ち主・価格をまとめた型
#[derive(sqlx::FromRow)]
pub struct PayableTicketRow {
    pub ticket_id: TicketId,
    pub status: TicketStatus,
    pub owner_id: UserId,
    pub price: i32,
}
