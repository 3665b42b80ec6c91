use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{event::CreateUser, User},
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{is_unique_violation, model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let password_hash = hash_password(&event.password)?;

        sqlx::query_as::<_, UserRow>(
            r#"
                INSERT INTO users (email, password_hash)
                VALUES ($1, $2)
                RETURNING user_id, email, created_at
            "#,
        )
        .bind(&event.email)
        .bind(password_hash)
        .fetch_one(self.db.inner_ref())
        .await
        .map(User::from)
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict(format!(
                    "メールアドレス（{}）はすでに登録されています。",
                    event.email
                ))
            } else {
                AppError::SpecificOperationError(e)
            }
        })
    }

    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, email, created_at
                FROM users
                WHERE user_id = $1
            "#,
        )
        .bind(current_user_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(User::from))
        .map_err(AppError::SpecificOperationError)
    }
}

fn hash_password(password: &str) -> AppResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(AppError::from)
}
