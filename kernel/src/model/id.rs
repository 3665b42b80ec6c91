use serde::{Deserialize, Serialize};

// テーブルの主キーは SERIAL（i32）なので、取り違えを防ぐためにテーブルごとに型を分ける
macro_rules! define_id {
    ($id_type: ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type,
        )]
        #[serde(transparent)]
        #[sqlx(transparent)]
        pub struct $id_type(i32);

        impl $id_type {
            pub fn raw(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $id_type {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl std::fmt::Display for $id_type {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

define_id!(UserId);
define_id!(EnrollmentId);
define_id!(TicketTypeId);
define_id!(TicketId);
define_id!(PaymentId);
define_id!(HotelId);
define_id!(RoomId);
define_id!(BookingId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_wrap_raw_serial_values() {
        let id = BookingId::from(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.raw(), 42);
        assert_ne!(RoomId::from(1), RoomId::from(2));
    }
}
