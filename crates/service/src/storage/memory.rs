//! In-memory repository backends.
//!
//! Swappable stand-ins for the SeaORM repositories: the whole store is a
//! `RwLock<HashMap>` plus an atomic id counter. Used by the test suites and
//! by anyone who wants to run the server without a database.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::ServiceError;
use crate::repository::{
    AttendantInput, AttendantRepository, ProductInput, ProductRepository,
};
use models::{attendant, product};

pub struct MemoryProductRepository {
    rows: RwLock<HashMap<i32, product::Model>>,
    next_id: AtomicI32,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for MemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    async fn insert(&self, input: &ProductInput) -> Result<product::Model, ServiceError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let model = product::Model {
            id,
            name: input.name.clone(),
            price: input.price,
            category: input.category.clone(),
            stock: input.stock,
            description: input.description.clone(),
        };
        self.rows.write().await.insert(id, model.clone());
        Ok(model)
    }

    async fn update(&self, model: product::Model) -> Result<product::Model, ServiceError> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&model.id) {
            return Err(ServiceError::not_found("product"));
        }
        rows.insert(model.id, model.clone());
        Ok(model)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.rows.read().await.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        self.rows.write().await.remove(&id);
        Ok(())
    }

    async fn find_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<product::Model>, ServiceError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn find_by_name_containing(
        &self,
        keyword: &str,
    ) -> Result<Vec<product::Model>, ServiceError> {
        let needle = keyword.to_lowercase();
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_by_stock_less_than(
        &self,
        threshold: i32,
    ) -> Result<Vec<product::Model>, ServiceError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|p| p.stock < threshold)
            .cloned()
            .collect())
    }
}

pub struct MemoryAttendantRepository {
    rows: RwLock<HashMap<i32, attendant::Model>>,
    next_id: AtomicI32,
}

impl MemoryAttendantRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

impl Default for MemoryAttendantRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AttendantRepository for MemoryAttendantRepository {
    async fn insert(&self, input: &AttendantInput) -> Result<attendant::Model, ServiceError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let model = attendant::Model {
            id,
            name: input.name.clone(),
            address: input.address.clone(),
            mobile: input.mobile.clone(),
            email: input.email.clone(),
            comments: input.comments.clone(),
        };
        self.rows.write().await.insert(id, model.clone());
        Ok(model)
    }

    async fn update(&self, model: attendant::Model) -> Result<attendant::Model, ServiceError> {
        let mut rows = self.rows.write().await;
        if !rows.contains_key(&model.id) {
            return Err(ServiceError::not_found("attendant"));
        }
        rows.insert(model.id, model.clone());
        Ok(model)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<attendant::Model>, ServiceError> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<attendant::Model>, ServiceError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.rows.read().await.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        self.rows.write().await.remove(&id);
        Ok(())
    }

    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<attendant::Model>, ServiceError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .find(|a| a.email.as_deref() == Some(email))
            .cloned())
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .any(|a| a.email.as_deref() == Some(email)))
    }

    async fn exists_by_mobile(&self, mobile: &str) -> Result<bool, ServiceError> {
        Ok(self
            .rows
            .read()
            .await
            .values()
            .any(|a| a.mobile.as_deref() == Some(mobile)))
    }

    async fn find_by_name_containing(
        &self,
        keyword: &str,
    ) -> Result<Vec<attendant::Model>, ServiceError> {
        let needle = keyword.to_lowercase();
        Ok(self
            .rows
            .read()
            .await
            .values()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}
