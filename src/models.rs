// src/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// RFC3339 with fixed millisecond precision. Every timestamp has the same
/// width, so string comparison in the store matches time order. Documents
/// written before this service carry `createdAt` as a BSON date; reads
/// accept both forms, writes always produce the string.
pub mod ts_millis {
    use chrono::{DateTime, SecondsFormat, Utc};
    use mongodb::bson::Bson;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Bson::deserialize(deserializer)? {
            Bson::String(raw) => DateTime::parse_from_rfc3339(&raw)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(de::Error::custom),
            Bson::DateTime(dt) => DateTime::from_timestamp_millis(dt.timestamp_millis())
                .ok_or_else(|| de::Error::custom("timestamp out of range")),
            _ => Err(de::Error::custom("expected RFC3339 string or BSON date")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PaymentStatus {
    Pending,
    Paid,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub plan: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub message: String,
    /// Major currency units as submitted; minor-unit conversion happens
    /// only at the gateway boundary.
    pub amount: f64,
    pub payment_status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub razorpay_payment_id: Option<String>,
    #[serde(with = "ts_millis")]
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        plan: String,
        name: String,
        email: String,
        phone: String,
        message: String,
        amount: f64,
    ) -> Self {
        Self {
            order_id: new_order_id(),
            plan,
            name,
            email,
            phone,
            message,
            amount,
            payment_status: PaymentStatus::Pending,
            razorpay_payment_id: None,
            created_at: Utc::now(),
        }
    }
}

/// Order ids keep the customer-visible `AVX` prefix but draw the rest from
/// a v4 uuid, so two orders created in the same instant cannot collide.
pub fn new_order_id() -> String {
    format!("AVX{}", Uuid::new_v4().simple())
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    // Pre-existing documents lack this field.
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan: String,
    #[serde(default)]
    pub message: String,
    #[serde(with = "ts_millis")]
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl Lead {
    pub fn new(name: String, email: String, phone: String, plan: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            email,
            phone,
            plan,
            message,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DemoRequest {
    pub name: String,
    pub phone: String,
    pub business: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub requirement: String,
    #[serde(with = "ts_millis")]
    #[schema(value_type = String)]
    pub created_at: DateTime<Utc>,
}

impl DemoRequest {
    pub fn new(name: String, phone: String, business: String, kind: String, requirement: String) -> Self {
        Self {
            name,
            phone,
            business,
            kind,
            requirement,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Admin {
    pub email: String,
    /// bcrypt hash, never the plain password.
    pub password: String,
}
