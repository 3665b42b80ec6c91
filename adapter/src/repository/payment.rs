use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{TicketId, UserId},
    payment::{event::CreatePayment, Payment},
    ticket::TicketStatus,
};
use kernel::repository::payment::PaymentRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    is_unique_violation,
    model::payment::{PayableTicketRow, PaymentRow},
    ConnectionPool,
};

#[derive(new)]
pub struct PaymentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl PaymentRepository for PaymentRepositoryImpl {
    async fn find_by_ticket_id(
        &self,
        ticket_id: TicketId,
        requested_user: UserId,
    ) -> AppResult<Option<Payment>> {
        // ① チケットと参加登録の存在確認
        let owner_id = sqlx::query_scalar::<_, UserId>(
            r#"
                SELECT e.user_id
                FROM tickets AS t
                INNER JOIN enrollments AS e ON t.enrollment_id = e.enrollment_id
                WHERE t.ticket_id = $1
            "#,
        )
        .bind(ticket_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("チケット（{}）が見つかりませんでした。", ticket_id))
        })?;

        // ② 本人のチケットか確認
        if owner_id != requested_user {
            return Err(AppError::UnauthorizedOperation(format!(
                "チケット（{}）はユーザー（{}）のものではありません。",
                ticket_id, requested_user
            )));
        }

        sqlx::query_as::<_, PaymentRow>(
            r#"
                SELECT payment_id, ticket_id, value, card_issuer, card_last_digits, created_at
                FROM payments
                WHERE ticket_id = $1
            "#,
        )
        .bind(ticket_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Payment::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn create(&self, event: CreatePayment) -> AppResult<Payment> {
        // チケットの状態更新と支払いの記録は同じトランザクションで行い、
        // どちらかが失敗したら両方ロールバックされるようにする
        let mut tx = self.db.begin().await?;

        // ① チケットの存在確認（行ロックを取って二重払いを防ぐ）
        let ticket = sqlx::query_as::<_, PayableTicketRow>(
            r#"
                SELECT
                t.ticket_id,
                t.status,
                e.user_id AS owner_id,
                tt.price
                FROM tickets AS t
                INNER JOIN enrollments AS e ON t.enrollment_id = e.enrollment_id
                INNER JOIN ticket_types AS tt ON t.ticket_type_id = tt.ticket_type_id
                WHERE t.ticket_id = $1
                FOR UPDATE OF t
            "#,
        )
        .bind(event.ticket_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!(
                "チケット（{}）が見つかりませんでした。",
                event.ticket_id
            ))
        })?;

        // ② 支払い済みのチケットには再度支払えない
        if ticket.status == TicketStatus::Paid {
            return Err(AppError::UnauthorizedOperation(format!(
                "チケット（{}）はすでに支払い済みです。",
                ticket.ticket_id
            )));
        }

        // ③ 本人のチケットか確認
        if ticket.owner_id != event.requested_user {
            return Err(AppError::UnauthorizedOperation(format!(
                "チケット（{}）はユーザー（{}）のものではありません。",
                ticket.ticket_id, event.requested_user
            )));
        }

        // ④ チケットを PAID にする
        let res = sqlx::query(
            r#"
                UPDATE tickets
                SET status = $1
                WHERE ticket_id = $2
            "#,
        )
        .bind(TicketStatus::Paid)
        .bind(ticket.ticket_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No ticket record has been updated".into(),
            ));
        }

        // ⑤ チケット種別の価格で支払いを記録する。カード番号は末尾 4 桁のみ保存する
        let payment = sqlx::query_as::<_, PaymentRow>(
            r#"
                INSERT INTO payments (ticket_id, value, card_issuer, card_last_digits)
                VALUES ($1, $2, $3, $4)
                RETURNING payment_id, ticket_id, value, card_issuer, card_last_digits, created_at
            "#,
        )
        .bind(ticket.ticket_id)
        .bind(ticket.price)
        .bind(&event.card.issuer)
        .bind(event.card.last_digits())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::UnauthorizedOperation(format!(
                    "チケット（{}）はすでに支払い済みです。",
                    ticket.ticket_id
                ))
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            payment_id = %payment.payment_id,
            ticket_id = %payment.ticket_id,
            value = payment.value,
            "payment processed"
        );

        Ok(payment.into())
    }
}
