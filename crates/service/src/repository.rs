use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;
use models::{attendant, product};

/// Create/update payload for a product. Ids are assigned by storage and
/// never accepted from clients.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductInput {
    pub name: String,
    pub price: Decimal,
    pub category: String,
    pub stock: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create/update payload for an attendant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AttendantInput {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub mobile: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl AttendantInput {
    /// Collapse blank optional fields to `None` so the duplicate checks and
    /// the unique indexes only ever see real values.
    pub fn normalized(self) -> Self {
        fn clean(v: Option<String>) -> Option<String> {
            v.filter(|s| !s.trim().is_empty())
        }
        Self {
            name: self.name,
            address: clean(self.address),
            mobile: clean(self.mobile),
            email: clean(self.email),
            comments: clean(self.comments),
        }
    }
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn insert(&self, input: &ProductInput) -> Result<product::Model, ServiceError>;
    /// Full-field replace keyed by the model's id.
    async fn update(&self, model: product::Model) -> Result<product::Model, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
    async fn find_by_category(&self, category: &str)
        -> Result<Vec<product::Model>, ServiceError>;
    async fn find_by_name_containing(&self, keyword: &str)
        -> Result<Vec<product::Model>, ServiceError>;
    async fn find_by_stock_less_than(&self, threshold: i32)
        -> Result<Vec<product::Model>, ServiceError>;
}

#[async_trait]
pub trait AttendantRepository: Send + Sync {
    async fn insert(&self, input: &AttendantInput) -> Result<attendant::Model, ServiceError>;
    /// Full-field replace keyed by the model's id.
    async fn update(&self, model: attendant::Model) -> Result<attendant::Model, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<attendant::Model>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<attendant::Model>, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
    async fn find_by_email(&self, email: &str)
        -> Result<Option<attendant::Model>, ServiceError>;
    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError>;
    async fn exists_by_mobile(&self, mobile: &str) -> Result<bool, ServiceError>;
    async fn find_by_name_containing(&self, keyword: &str)
        -> Result<Vec<attendant::Model>, ServiceError>;
}
