use crate::model::id::{TicketId, UserId};
use derive_new::new;

#[derive(new)]
pub struct CreatePayment {
    pub requested_user: UserId,
    pub ticket_id: TicketId,
    pub card: CardData,
}

#[derive(new)]
pub struct CardData {
    pub issuer: String,
    pub number: String,
    pub name: String,
    pub expiration_date: String,
    pub cvv: String,
}

impl CardData {
    // カード番号は保存せず、末尾 4 桁だけを残す
    pub fn last_digits(&self) -> String {
        let digits: Vec<char> = self.number.chars().filter(char::is_ascii_digit).collect();
        let start = digits.len().saturating_sub(4);
        digits[start..].iter().collect()
    }
}
