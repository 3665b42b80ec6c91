use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    enrollment::{event::UpsertEnrollment, Enrollment},
    id::UserId,
};
use kernel::repository::enrollment::EnrollmentRepository;
use shared::error::{AppError, AppResult};

use crate::database::{is_unique_violation, model::enrollment::EnrollmentRow, ConnectionPool};

#[derive(new)]
pub struct EnrollmentRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl EnrollmentRepository for EnrollmentRepositoryImpl {
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Option<Enrollment>> {
        sqlx::query_as::<_, EnrollmentRow>(
            r#"
                SELECT enrollment_id, user_id, name, cpf, birthday, phone
                FROM enrollments
                WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Enrollment::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn upsert(&self, event: UpsertEnrollment) -> AppResult<Enrollment> {
        // user_id は一意なので、既に登録があれば内容を上書きする
        sqlx::query_as::<_, EnrollmentRow>(
            r#"
                INSERT INTO enrollments (user_id, name, cpf, birthday, phone)
                VALUES ($1, $2, $3, $4, $5)
                ON CONFLICT (user_id) DO UPDATE SET
                    name = EXCLUDED.name,
                    cpf = EXCLUDED.cpf,
                    birthday = EXCLUDED.birthday,
                    phone = EXCLUDED.phone
                RETURNING enrollment_id, user_id, name, cpf, birthday, phone
            "#,
        )
        .bind(event.user_id)
        .bind(&event.name)
        .bind(&event.cpf)
        .bind(event.birthday)
        .bind(&event.phone)
        .fetch_one(self.db.inner_ref())
        .await
        .map(Enrollment::from)
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(format!("CPF（{}）はすでに登録されています。", event.cpf))
            } else {
                AppError::SpecificOperationError(e)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("common")))]
    async fn test_upsert_enrollment(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool));
        let erin = UserId::from(5);
        let birthday = NaiveDate::from_ymd_opt(1995, 5, 5).unwrap();

        assert!(repo.find_by_user_id(erin).await?.is_none());

        let created = repo
            .upsert(UpsertEnrollment::new(
                erin,
                "Erin".into(),
                "55555555555".into(),
                birthday,
                "21999990005".into(),
            ))
            .await?;
        assert_eq!(created.name, "Erin");

        let updated = repo
            .upsert(UpsertEnrollment::new(
                erin,
                "Erin Souza".into(),
                "55555555555".into(),
                birthday,
                "21999990005".into(),
            ))
            .await?;
        assert_eq!(updated.enrollment_id, created.enrollment_id);
        assert_eq!(
            repo.find_by_user_id(erin).await?.map(|e| e.name),
            Some("Erin Souza".to_string())
        );
        Ok(())
    }

    #[sqlx::test(fixtures(path = "../../fixtures", scripts("common")))]
    async fn test_cpf_must_be_unique(pool: sqlx::PgPool) -> anyhow::Result<()> {
        let repo = EnrollmentRepositoryImpl::new(ConnectionPool::new(pool));

        let res = repo
            .upsert(UpsertEnrollment::new(
                UserId::from(5),
                "Erin".into(),
                "11111111111".into(),
                NaiveDate::from_ymd_opt(1995, 5, 5).unwrap(),
                "21999990005".into(),
            ))
            .await;
        assert!(matches!(res, Err(AppError::Conflict(_))));
        Ok(())
    }
}
