// src/store/mongo.rs

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::{FindOptions, IndexOptions};
use mongodb::{Client, Collection, Database, IndexModel};

use super::{Result, Store};
use crate::models::{Admin, DemoRequest, Lead, Order};

/// MongoDB-backed store. Collection names (`orders`, `leads`,
/// `demorequests`, `admins`) are part of the deployed data layout and
/// must not change.
pub struct MongoStore {
    orders: Collection<Order>,
    leads: Collection<Lead>,
    demos: Collection<DemoRequest>,
    admins: Collection<Admin>,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        Ok(Self::new(&client.database(database)))
    }

    pub fn new(db: &Database) -> Self {
        Self {
            orders: db.collection::<Order>("orders"),
            leads: db.collection::<Lead>("leads"),
            demos: db.collection::<DemoRequest>("demorequests"),
            admins: db.collection::<Admin>("admins"),
        }
    }
}

#[async_trait]
impl Store for MongoStore {
    async fn init(&self) -> Result<()> {
        let order_id_index = IndexModel::builder()
            .keys(doc! { "orderId": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.orders.create_index(order_id_index).await?;

        let admin_email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.admins.create_index(admin_email_index).await?;

        Ok(())
    }

    async fn insert_order(&self, order: &Order) -> Result<()> {
        self.orders.insert_one(order).await?;
        Ok(())
    }

    async fn list_orders(&self, limit: Option<i64>) -> Result<Vec<Order>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .limit(limit)
            .build();
        let cursor = self.orders.find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn mark_order_paid(&self, order_id: &str, payment_id: &str) -> Result<bool> {
        let result = self
            .orders
            .update_one(
                doc! { "orderId": order_id },
                doc! { "$set": { "paymentStatus": "Paid", "razorpayPaymentId": payment_id } },
            )
            .await?;
        Ok(result.matched_count > 0)
    }

    async fn insert_lead(&self, lead: &Lead) -> Result<()> {
        self.leads.insert_one(lead).await?;
        Ok(())
    }

    async fn list_leads(&self, limit: Option<i64>) -> Result<Vec<Lead>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .limit(limit)
            .build();
        let cursor = self.leads.find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn delete_lead(&self, id: &str) -> Result<bool> {
        let result = self.leads.delete_one(doc! { "id": id }).await?;
        Ok(result.deleted_count > 0)
    }

    async fn insert_demo_request(&self, demo: &DemoRequest) -> Result<()> {
        self.demos.insert_one(demo).await?;
        Ok(())
    }

    async fn list_demo_requests(&self, limit: Option<i64>) -> Result<Vec<DemoRequest>> {
        let options = FindOptions::builder()
            .sort(doc! { "createdAt": -1 })
            .limit(limit)
            .build();
        let cursor = self.demos.find(doc! {}).with_options(options).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_admin(&self, email: &str) -> Result<Option<Admin>> {
        Ok(self.admins.find_one(doc! { "email": email }).await?)
    }

    async fn insert_admin(&self, admin: &Admin) -> Result<()> {
        self.admins.insert_one(admin).await?;
        Ok(())
    }
}
