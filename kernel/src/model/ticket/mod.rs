use crate::model::id::{EnrollmentId, TicketId, TicketTypeId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::error::{AppError, AppResult};
use strum::{Display, EnumString};

pub mod event;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, sqlx::Type,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
#[sqlx(type_name = "ticket_status", rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketType {
    pub ticket_type_id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub ticket_id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub ticket_type: TicketType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    // 支払い済み・現地参加・ホテル付きのチケットだけがホテルを利用できる
    pub fn ensure_hotel_access(&self) -> AppResult<()> {
        if self.status != TicketStatus::Paid {
            return Err(AppError::PaymentRequired(format!(
                "チケット（{}）は支払いが完了していません。",
                self.ticket_id
            )));
        }
        if self.ticket_type.is_remote {
            return Err(AppError::PaymentRequired(format!(
                "チケット（{}）はオンライン参加用のため、ホテルを利用できません。",
                self.ticket_id
            )));
        }
        if !self.ticket_type.includes_hotel {
            return Err(AppError::PaymentRequired(format!(
                "チケット（{}）にはホテルが含まれていません。",
                self.ticket_id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(status: TicketStatus, is_remote: bool, includes_hotel: bool) -> Ticket {
        Ticket {
            ticket_id: TicketId::from(1),
            enrollment_id: EnrollmentId::from(1),
            status,
            ticket_type: TicketType {
                ticket_type_id: TicketTypeId::from(1),
                name: "Presencial + Hotel".into(),
                price: 600,
                is_remote,
                includes_hotel,
            },
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn paid_on_site_ticket_with_hotel_is_eligible() {
        assert!(ticket(TicketStatus::Paid, false, true)
            .ensure_hotel_access()
            .is_ok());
    }

    #[test]
    fn other_tickets_require_payment() {
        let cases = [
            ticket(TicketStatus::Reserved, false, true),
            ticket(TicketStatus::Paid, true, true),
            ticket(TicketStatus::Paid, false, false),
            ticket(TicketStatus::Paid, true, false),
            ticket(TicketStatus::Reserved, true, false),
        ];
        for t in cases {
            assert!(matches!(
                t.ensure_hotel_access(),
                Err(AppError::PaymentRequired(_))
            ));
        }
    }

    #[test]
    fn status_uses_upper_case_names() {
        assert_eq!(TicketStatus::Paid.to_string(), "PAID");
        assert_eq!("RESERVED".parse::<TicketStatus>().ok(), Some(TicketStatus::Reserved));
    }
}
