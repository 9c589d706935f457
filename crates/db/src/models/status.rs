//! Order status enum mapping to the SMALLSERIAL `order_statuses` lookup
//! table.
//!
//! Variant discriminants match the seed data order (1-based) in the
//! database table.

/// Status ID type matching SMALLINT/SMALLSERIAL in the database.
pub type StatusId = i16;

macro_rules! define_status_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $val:expr ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[repr(i16)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $val ),+
        }

        impl $name {
            /// Return the database status ID.
            pub fn id(self) -> StatusId {
                self as StatusId
            }
        }

        impl From<$name> for StatusId {
            fn from(value: $name) -> Self {
                value as StatusId
            }
        }
    };
}

define_status_enum! {
    /// Customer order lifecycle status.
    OrderStatus {
        New = 1,
        Confirmed = 2,
        Paid = 3,
        Cancelled = 4,
    }
}

impl OrderStatus {
    /// Look up a variant from its database status ID.
    pub fn from_id(id: StatusId) -> Option<Self> {
        match id {
            1 => Some(Self::New),
            2 => Some(Self::Confirmed),
            3 => Some(Self::Paid),
            4 => Some(Self::Cancelled),
            _ => None,
        }
    }

    /// Whether the lifecycle permits moving from `self` to `next`.
    ///
    /// New orders are confirmed, then paid; cancellation is possible
    /// until payment. Paid and Cancelled are terminal.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (New, Confirmed) | (Confirmed, Paid) | (New, Cancelled) | (Confirmed, Cancelled)
        )
    }
}
