//! Customer entity.

use serde::{Deserialize, Serialize};

use cafe_central_core::{CustomerId, Phone};

/// A registered customer.
///
/// Created once at registration and immutable afterwards; this core never
/// deletes customers. The phone number is the unique contact key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    /// Unique customer id.
    pub id: CustomerId,
    /// Display name.
    pub name: String,
    /// Unique contact number.
    pub phone: Phone,
}
