use kernel::model::{
    id::{EnrollmentId, TicketId, TicketTypeId},
    ticket::{Ticket, TicketStatus, TicketType},
};
use sqlx::types::chrono::{DateTime, Utc};

#[derive(sqlx::FromRow)]
pub struct TicketTypeRow {
    pub ticket_type_id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl From<TicketTypeRow> for TicketType {
    fn from(value: TicketTypeRow) -> Self {
        let TicketTypeRow {
            ticket_type_id,
            name,
            price,
            is_remote,
            includes_hotel,
        } = value;
        TicketType {
            ticket_type_id,
            name,
            price,
            is_remote,
            includes_hotel,
        }
    }
}

// tickets と ticket_types を INNER JOIN したレコード
#[derive(sqlx::FromRow)]
pub struct TicketRow {
    pub ticket_id: TicketId,
    pub enrollment_id: EnrollmentId,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ticket_type_id: TicketTypeId,
    pub ticket_type_name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl From<TicketRow> for Ticket {
    fn from(value: TicketRow) -> Self {
        let TicketRow {
            ticket_id,
            enrollment_id,
            status,
            created_at,
            updated_at,
            ticket_type_id,
            ticket_type_name,
            price,
            is_remote,
            includes_hotel,
        } = value;
        Ticket {
            ticket_id,
            enrollment_id,
            status,
            created_at,
            updated_at,
            ticket_type: TicketType {
                ticket_type_id,
                name: ticket_type_name,
                price,
                is_remote,
                includes_hotel,
            },
        }
    }
}
