use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A product for sale. Prices are in minor currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Mac {
    pub id: i32,
    pub name: String,
    pub price: i64,
    pub description: String,
    pub inventory_level: i32,
    pub image: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Mac {
    /// Currency every catalogue price is quoted in.
    pub const CURRENCY: &'static str = "usd";
}
