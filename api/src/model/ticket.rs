use chrono::{DateTime, Utc};
use garde::Validate;
use kernel::model::{
    id::{EnrollmentId, TicketId, TicketTypeId},
    ticket::{Ticket, TicketStatus, TicketType},
};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketRequest {
    #[garde(range(min = 1))]
    pub ticket_type_id: i32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTypeResponse {
    pub id: TicketTypeId,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl From<TicketType> for TicketTypeResponse {
    fn from(value: TicketType) -> Self {
        let TicketType {
            ticket_type_id,
            name,
            price,
            is_remote,
            includes_hotel,
        } = value;
        Self {
            id: ticket_type_id,
            name,
            price,
            is_remote,
            includes_hotel,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketResponse {
    pub id: TicketId,
    pub status: TicketStatus,
    pub ticket_type_id: TicketTypeId,
    pub enrollment_id: EnrollmentId,
    pub ticket_type: TicketTypeResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Ticket> for TicketResponse {
    fn from(value: Ticket) -> Self {
        let Ticket {
            ticket_id,
            enrollment_id,
            status,
            ticket_type,
            created_at,
            updated_at,
        } = value;
        Self {
            id: ticket_id,
            status,
            ticket_type_id: ticket_type.ticket_type_id,
            enrollment_id,
            ticket_type: ticket_type.into(),
            created_at,
            updated_at,
        }
    }
}
