use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::{EnrollmentId, TicketId, UserId},
    ticket::{event::CreateTicket, Ticket, TicketType},
};
use kernel::repository::ticket::TicketRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    is_unique_violation,
    model::ticket::{TicketRow, TicketTypeRow},
    ConnectionPool,
};

#[derive(new)]
pub struct TicketRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl TicketRepository for TicketRepositoryImpl {
    async fn find_types(&self) -> AppResult<Vec<TicketType>> {
        sqlx::query_as::<_, TicketTypeRow>(
            r#"
                SELECT ticket_type_id, name, price, is_remote, includes_hotel
                FROM ticket_types
                ORDER BY ticket_type_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(TicketType::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Ticket>> {
        find_ticket_by_user_id(self.db.inner_ref(), user_id).await
    }

    async fn create(&self, event: CreateTicket) -> AppResult<Ticket> {
        let mut tx = self.db.begin().await?;

        // 事前のチェックとして、以下を調べる。
        // - ユーザーの参加登録が存在するか
        // - 指定のチケット種別が存在するか
        {
            let enrollment_id = sqlx::query_scalar::<_, EnrollmentId>(
                "SELECT enrollment_id FROM enrollments WHERE user_id = $1",
            )
            .bind(event.user_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?
            .ok_or_else(|| {
                AppError::EntityNotFound(format!(
                    "ユーザー（{}）の参加登録が見つかりませんでした。",
                    event.user_id
                ))
            })?;

            let ticket_type_exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS (SELECT 1 FROM ticket_types WHERE ticket_type_id = $1)",
            )
            .bind(event.ticket_type_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::SpecificOperationError)?;

            if !ticket_type_exists {
                return Err(AppError::EntityNotFound(format!(
                    "チケット種別（{}）が見つかりませんでした。",
                    event.ticket_type_id
                )));
            }

            // 参加登録 1 件につきチケットは 1 枚まで
            sqlx::query_scalar::<_, TicketId>(
                r#"
                    INSERT INTO tickets (ticket_type_id, enrollment_id, status)
                    VALUES ($1, $2, 'RESERVED')
                    RETURNING ticket_id
                "#,
            )
            .bind(event.ticket_type_id)
            .bind(enrollment_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::ForbiddenOperation(format!(
                        "ユーザー（{}）はすでにチケットを持っています。",
                        event.user_id
                    ))
                } else {
                    AppError::SpecificOperationError(e)
                }
            })?;
        }

        let ticket = find_ticket_by_user_id(&mut *tx, event.user_id)
            .await?
            .ok_or_else(|| AppError::NoRowsAffectedError("No ticket has been created".into()))?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(ticket)
    }

    async fn find_paid_with_hotel_by_user_id(&self, user_id: UserId) -> AppResult<Ticket> {
        let ticket = find_ticket_by_user_id(self.db.inner_ref(), user_id).await?;
        ensure_hotel_ticket(ticket, user_id)
    }
}

// 参加登録を経由してユーザーのチケットを取得する
// 予約処理のトランザクション内からも使うため、実行先は引数で受け取る
pub(crate) async fn find_ticket_by_user_id<'e, E>(
    executor: E,
    user_id: UserId,
) -> AppResult<Option<Ticket>>
where
    E: sqlx::PgExecutor<'e>,
{
    sqlx::query_as::<_, TicketRow>(
        r#"
            SELECT
            t.ticket_id,
            t.enrollment_id,
            t.status,
            t.created_at,
            t.updated_at,
            tt.ticket_type_id,
            tt.name AS ticket_type_name,
            tt.price,
            tt.is_remote,
            tt.includes_hotel
            FROM tickets AS t
            INNER JOIN enrollments AS e ON t.enrollment_id = e.enrollment_id
            INNER JOIN ticket_types AS tt ON t.ticket_type_id = tt.ticket_type_id
            WHERE e.user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
    .map(|row| row.map(Ticket::from))
    .map_err(AppError::SpecificOperationError)
}

// チケットが無ければ EntityNotFound、ホテルを使えないチケットなら PaymentRequired
pub(crate) fn ensure_hotel_ticket(ticket: Option<Ticket>, user_id: UserId) -> AppResult<Ticket> {
    let ticket = ticket.ok_or_else(|| {
        AppError::EntityNotFound(format!(
            "ユーザー（{}）のチケットが見つかりませんでした。",
            user_id
        ))
    })?;
    ticket.ensure_hotel_access()?;
    Ok(ticket)
}
