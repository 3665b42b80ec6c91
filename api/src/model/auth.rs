use garde::Validate;
use kernel::model::{auth::Session, id::UserId};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessTokenResponse {
    pub user_id: UserId,
    pub access_token: String,
}

impl From<Session> for AccessTokenResponse {
    fn from(value: Session) -> Self {
        let Session {
            user_id,
            access_token,
        } = value;
        Self {
            user_id,
            access_token: access_token.0,
        }
    }
}
