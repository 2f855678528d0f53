use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::model::address::Address;

/// Row of the `customers` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

/// A customer together with every address that points at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerWithAddresses {
    pub customer: Customer,
    pub addresses: Vec<Address>,
}
