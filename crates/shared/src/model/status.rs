use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Order lifecycle label, seeded by migrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Status {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Status {
    pub const CLEARED: i32 = 1;
    pub const REFUNDED: i32 = 2;
    pub const CANCELLED: i32 = 3;
}

/// Transaction lifecycle label, seeded by migrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TransactionStatus {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl TransactionStatus {
    pub const PENDING: i32 = 1;
    pub const CLEARED: i32 = 2;
    pub const DECLINED: i32 = 3;
    pub const REFUNDED: i32 = 4;
    pub const PARTIALLY_REFUNDED: i32 = 5;
}
