use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    booking::{
        event::{CreateBooking, UpdateBooking},
        Booking,
    },
    hotel::Room,
    id::{BookingId, RoomId, UserId},
};
use kernel::repository::booking::BookingRepository;
use shared::error::{AppError, AppResult};

use crate::database::{
    is_unique_violation,
    model::{booking::BookingRow, hotel::LockedRoomRow},
    ConnectionPool,
};
use crate::repository::ticket::{ensure_hotel_ticket, find_ticket_by_user_id};

#[derive(new)]
pub struct BookingRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookingRepository for BookingRepositoryImpl {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Booking>> {
        sqlx::query_as::<_, BookingRow>(
            r#"
                SELECT
                b.booking_id,
                b.user_id,
                b.created_at,
                b.updated_at,
                r.room_id,
                r.hotel_id,
                r.name AS room_name,
                r.capacity,
                (
                    SELECT COUNT(*) FROM bookings AS ob WHERE ob.room_id = r.room_id
                )::INT4 AS occupancy
                FROM bookings AS b
                INNER JOIN rooms AS r ON b.room_id = r.room_id
                WHERE b.user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Booking::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn create(&self, event: CreateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        // 事前のチェックとして、以下を調べる。
        // - ユーザーのチケットでホテルを利用できるか
        // - ユーザーがまだ予約を持っていないか
        // - 指定の部屋が存在し、空きがあるか
        //
        // 部屋の行は FOR UPDATE でロックしてから予約数を数えるので、
        // 同じ部屋への同時予約はここで直列化される
        {
            // ① チケットの確認
            let ticket = find_ticket_by_user_id(&mut *tx, event.user_id).await?;
            ensure_hotel_ticket(ticket, event.user_id)?;

            // ② 1 ユーザー 1 予約
            if self
                .find_booking_id_by_user_id(&mut tx, event.user_id)
                .await?
                .is_some()
            {
                return Err(AppError::ForbiddenOperation(format!(
                    "ユーザー（{}）はすでに予約を持っています。",
                    event.user_id
                )));
            }

            // ③ 部屋の存在確認と空き確認
            let room = self.lock_room(&mut tx, event.room_id, None).await?;
            room.ensure_vacancy()?;
        }

        let booking_id = sqlx::query_scalar::<_, BookingId>(
            r#"
                INSERT INTO bookings (user_id, room_id)
                VALUES ($1, $2)
                RETURNING booking_id
            "#,
        )
        .bind(event.user_id)
        .bind(event.room_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::ForbiddenOperation(format!(
                    "ユーザー（{}）はすでに予約を持っています。",
                    event.user_id
                ))
            } else {
                AppError::SpecificOperationError(e)
            }
        })?;

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            booking_id = %booking_id,
            user_id = %event.user_id,
            room_id = %event.room_id,
            "booking created"
        );

        Ok(booking_id)
    }

    async fn update(&self, event: UpdateBooking) -> AppResult<BookingId> {
        let mut tx = self.db.begin().await?;

        {
            // ① 本人の予約であるかを、部屋のチェックより先に確認する
            let own_booking_id = self
                .find_booking_id_by_user_id(&mut tx, event.requested_user)
                .await?;
            if own_booking_id != Some(event.booking_id) {
                return Err(AppError::ForbiddenOperation(format!(
                    "予約（{}）はユーザー（{}）のものではありません。",
                    event.booking_id, event.requested_user
                )));
            }

            // ② チケットの確認
            let ticket = find_ticket_by_user_id(&mut *tx, event.requested_user).await?;
            ensure_hotel_ticket(ticket, event.requested_user)?;

            // ③ 変更先の部屋の存在確認と空き確認
            // 同じ部屋を指定し直した場合に自分の分を数えないよう、自分の予約は除外する
            let room = self
                .lock_room(&mut tx, event.room_id, Some(event.booking_id))
                .await?;
            room.ensure_vacancy()?;
        }

        let res = sqlx::query(
            r#"
                UPDATE bookings
                SET room_id = $1
                WHERE booking_id = $2
            "#,
        )
        .bind(event.room_id)
        .bind(event.booking_id)
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No booking record has been updated".into(),
            ));
        }

        tx.commit().await.map_err(AppError::TransactionError)?;

        tracing::info!(
            booking_id = %event.booking_id,
            user_id = %event.requested_user,
            room_id = %event.room_id,
            "booking moved to another room"
        );

        Ok(event.booking_id)
    }
}

impl BookingRepositoryImpl {
    // 予約の行もロックして、同じユーザーの同時更新を直列化する
    async fn find_booking_id_by_user_id(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: UserId,
    ) -> AppResult<Option<BookingId>> {
        sqlx::query_scalar::<_, BookingId>(
            r#"
                SELECT booking_id
                FROM bookings
                WHERE user_id = $1
                FOR UPDATE
            "#,
        )
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)
    }

    // 部屋の行をロックしてから、その部屋の予約数を数える
    // excluded に指定した予約は数に含めない
    async fn lock_room(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        room_id: RoomId,
        excluded: Option<BookingId>,
    ) -> AppResult<Room> {
        let row = sqlx::query_as::<_, LockedRoomRow>(
            r#"
                SELECT room_id, hotel_id, name, capacity
                FROM rooms
                WHERE room_id = $1
                FOR UPDATE
            "#,
        )
        .bind(room_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or_else(|| {
            AppError::EntityNotFound(format!("部屋（{}）が見つかりませんでした。", room_id))
        })?;

        let occupancy = sqlx::query_scalar::<_, i32>(
            r#"
                SELECT COUNT(*)::INT4
                FROM bookings
                WHERE room_id = $1
                  AND ($2::INT4 IS NULL OR booking_id <> $2)
            "#,
        )
        .bind(room_id)
        .bind(excluded)
        .fetch_one(&mut **tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(row.into_room(occupancy))
    }
}
