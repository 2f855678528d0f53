use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `address` table. `customer_id` must name an existing customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub id: Option<i64>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zipcode: String,
    pub customer_id: i64,
}
