use crate::model::{
    auth::{event::CreateToken, AccessToken},
    id::UserId,
};
use async_trait::async_trait;
use shared::error::AppResult;

#[async_trait]
pub trait AuthRepository: Send + Sync {
    // アクセストークンから有効期限内のセッションを探し、ユーザー ID を返す
    async fn fetch_user_id_from_token(&self, access_token: &AccessToken)
        -> AppResult<Option<UserId>>;
    // メールアドレスとパスワードが正しいか検証する
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId>;
    // セッションを作成してアクセストークンを返す
    async fn create_token(&self, event: CreateToken) -> AppResult<AccessToken>;
    // セッションを削除する
    async fn delete_token(&self, access_token: AccessToken) -> AppResult<()>;
}
