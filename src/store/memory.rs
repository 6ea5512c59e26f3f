// src/store/memory.rs

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Result, Store, StoreError};
use crate::models::{Admin, DemoRequest, Lead, Order, PaymentStatus};

/// In-memory store. Backs the test suite and works as a throwaway local
/// backend; failure toggles let tests exercise the storage-error paths.
#[derive(Default)]
pub struct MemStore {
    orders: RwLock<Vec<Order>>,
    leads: RwLock<Vec<Lead>>,
    demos: RwLock<Vec<DemoRequest>>,
    admins: RwLock<Vec<Admin>>,
    fail_reads: RwLock<bool>,
    fail_writes: RwLock<bool>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.write().await = fail;
    }

    pub async fn set_fail_writes(&self, fail: bool) {
        *self.fail_writes.write().await = fail;
    }

    async fn check_read(&self) -> Result<()> {
        if *self.fail_reads.read().await {
            return Err(StoreError::Unavailable("injected read failure".into()));
        }
        Ok(())
    }

    async fn check_write(&self) -> Result<()> {
        if *self.fail_writes.read().await {
            return Err(StoreError::Unavailable("injected write failure".into()));
        }
        Ok(())
    }
}

fn newest_first<T, F>(mut items: Vec<T>, key: F, limit: Option<i64>) -> Vec<T>
where
    F: Fn(&T) -> chrono::DateTime<chrono::Utc>,
{
    items.sort_by(|a, b| key(b).cmp(&key(a)));
    if let Some(n) = limit {
        items.truncate(n.max(0) as usize);
    }
    items
}

#[async_trait]
impl Store for MemStore {
    async fn init(&self) -> Result<()> {
        Ok(())
    }

    async fn insert_order(&self, order: &Order) -> Result<()> {
        self.check_write().await?;
        self.orders.write().await.push(order.clone());
        Ok(())
    }

    async fn list_orders(&self, limit: Option<i64>) -> Result<Vec<Order>> {
        self.check_read().await?;
        let orders = self.orders.read().await.clone();
        Ok(newest_first(orders, |o| o.created_at, limit))
    }

    async fn mark_order_paid(&self, order_id: &str, payment_id: &str) -> Result<bool> {
        self.check_write().await?;
        let mut orders = self.orders.write().await;
        match orders.iter_mut().find(|o| o.order_id == order_id) {
            Some(order) => {
                order.payment_status = PaymentStatus::Paid;
                order.razorpay_payment_id = Some(payment_id.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_lead(&self, lead: &Lead) -> Result<()> {
        self.check_write().await?;
        self.leads.write().await.push(lead.clone());
        Ok(())
    }

    async fn list_leads(&self, limit: Option<i64>) -> Result<Vec<Lead>> {
        self.check_read().await?;
        let leads = self.leads.read().await.clone();
        Ok(newest_first(leads, |l| l.created_at, limit))
    }

    async fn delete_lead(&self, id: &str) -> Result<bool> {
        self.check_write().await?;
        let mut leads = self.leads.write().await;
        match leads.iter().position(|l| l.id == id) {
            Some(idx) => {
                leads.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn insert_demo_request(&self, demo: &DemoRequest) -> Result<()> {
        self.check_write().await?;
        self.demos.write().await.push(demo.clone());
        Ok(())
    }

    async fn list_demo_requests(&self, limit: Option<i64>) -> Result<Vec<DemoRequest>> {
        self.check_read().await?;
        let demos = self.demos.read().await.clone();
        Ok(newest_first(demos, |d| d.created_at, limit))
    }

    async fn find_admin(&self, email: &str) -> Result<Option<Admin>> {
        self.check_read().await?;
        let admins = self.admins.read().await;
        Ok(admins.iter().find(|a| a.email == email).cloned())
    }

    async fn insert_admin(&self, admin: &Admin) -> Result<()> {
        self.check_write().await?;
        self.admins.write().await.push(admin.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn order_at(id: &str, offset_ms: i64) -> Order {
        let mut order = Order::new(
            "Starter".into(),
            "Test".into(),
            "test@example.com".into(),
            "9000000000".into(),
            "hello".into(),
            4999.0,
        );
        order.order_id = id.to_string();
        order.created_at = Utc.with_ymd_and_hms(2024, 2, 5, 9, 0, 0).single().expect("ts")
            + Duration::milliseconds(offset_ms);
        order
    }

    #[tokio::test]
    async fn orders_list_newest_first_with_limit() {
        let store = MemStore::new();
        for (id, offset) in [("AVXa", 0), ("AVXb", 10), ("AVXc", 20)] {
            store.insert_order(&order_at(id, offset)).await.expect("insert");
        }

        let all = store.list_orders(None).await.expect("list");
        let ids: Vec<_> = all.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, ["AVXc", "AVXb", "AVXa"]);

        let top = store.list_orders(Some(2)).await.expect("list limited");
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].order_id, "AVXc");
    }

    #[tokio::test]
    async fn mark_order_paid_is_conditional_and_idempotent() {
        let store = MemStore::new();
        store.insert_order(&order_at("AVXpay", 0)).await.expect("insert");

        assert!(store.mark_order_paid("AVXpay", "pay_1").await.expect("first"));
        assert!(store.mark_order_paid("AVXpay", "pay_1").await.expect("repeat"));
        assert!(!store.mark_order_paid("AVXmissing", "pay_2").await.expect("missing"));

        let orders = store.list_orders(None).await.expect("list");
        assert_eq!(orders[0].payment_status, PaymentStatus::Paid);
        assert_eq!(orders[0].razorpay_payment_id.as_deref(), Some("pay_1"));
    }

    #[tokio::test]
    async fn delete_lead_reports_missing() {
        let store = MemStore::new();
        let lead = Lead::new(
            "Ravi".into(),
            "ravi@example.com".into(),
            "8000000000".into(),
            "Business".into(),
            "inquiry".into(),
        );
        store.insert_lead(&lead).await.expect("insert");

        assert!(store.delete_lead(&lead.id).await.expect("delete"));
        assert!(!store.delete_lead(&lead.id).await.expect("repeat delete"));
    }

    #[tokio::test]
    async fn failure_toggles_surface_as_store_errors() {
        let store = MemStore::new();
        store.set_fail_reads(true).await;
        assert!(matches!(
            store.list_orders(None).await,
            Err(StoreError::Unavailable(_))
        ));

        store.set_fail_reads(false).await;
        store.set_fail_writes(true).await;
        assert!(matches!(
            store.insert_lead(&Lead::new(
                "x".into(),
                "x@example.com".into(),
                "1".into(),
                "Starter".into(),
                "m".into()
            ))
            .await,
            Err(StoreError::Unavailable(_))
        ));
    }
}
