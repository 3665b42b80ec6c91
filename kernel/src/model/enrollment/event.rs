use crate::model::id::UserId;
use chrono::NaiveDate;
use derive_new::new;

// 参加登録はユーザーごとに 1 件なので、作成と更新を同じイベントで扱う
#[derive(new)]
pub struct UpsertEnrollment {
    pub user_id: UserId,
    pub name: String,
    pub cpf: String,
    pub birthday: NaiveDate,
    pub phone: String,
}
