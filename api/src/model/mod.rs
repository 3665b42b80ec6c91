pub mod auth;
pub mod booking;
pub mod enrollment;
pub mod hotel;
pub mod payment;
pub mod ticket;
pub mod user;

// CPF・電話番号・カード番号など、数字だけで構成される項目の検証
pub(crate) fn only_digits(value: &str, _ctx: &()) -> garde::Result {
    if value.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(garde::Error::new("must contain only digits"))
    }
}
