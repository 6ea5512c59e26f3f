// src/store/mod.rs

pub mod memory;
pub mod mongo;

pub use memory::MemStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Admin, DemoRequest, Lead, Order};

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("mongodb error: {0}")]
    Mongo(#[from] mongodb::error::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence behind the handlers. Production uses [`MongoStore`];
/// [`MemStore`] backs the test suite.
#[async_trait]
pub trait Store: Send + Sync {
    /// One-time bootstrap (unique indexes on `orderId` and admin email).
    async fn init(&self) -> Result<()>;

    async fn insert_order(&self, order: &Order) -> Result<()>;

    /// Newest first. `limit` of `None` returns everything.
    async fn list_orders(&self, limit: Option<i64>) -> Result<Vec<Order>>;

    /// Conditional `Pending -> Paid` transition in a single write.
    /// Returns `false` when no order matched `order_id`.
    async fn mark_order_paid(&self, order_id: &str, payment_id: &str) -> Result<bool>;

    async fn insert_lead(&self, lead: &Lead) -> Result<()>;

    async fn list_leads(&self, limit: Option<i64>) -> Result<Vec<Lead>>;

    /// Returns `false` when no lead matched `id`.
    async fn delete_lead(&self, id: &str) -> Result<bool>;

    async fn insert_demo_request(&self, demo: &DemoRequest) -> Result<()>;

    async fn list_demo_requests(&self, limit: Option<i64>) -> Result<Vec<DemoRequest>>;

    async fn find_admin(&self, email: &str) -> Result<Option<Admin>>;

    async fn insert_admin(&self, admin: &Admin) -> Result<()>;
}
