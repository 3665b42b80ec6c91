use crate::model::id::UserId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ログイン成功時に返す情報
#[derive(Debug)]
pub struct Session {
    pub user_id: UserId,
    pub access_token: AccessToken,
}
