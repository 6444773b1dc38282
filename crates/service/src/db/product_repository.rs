use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ActiveValue::Unchanged,
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use crate::errors::ServiceError;
use crate::repository::{ProductInput, ProductRepository};
use models::product;

/// SeaORM-backed product repository.
pub struct SeaOrmProductRepository {
    db: DatabaseConnection,
}

impl SeaOrmProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn insert(&self, input: &ProductInput) -> Result<product::Model, ServiceError> {
        let am = product::ActiveModel {
            id: NotSet,
            name: Set(input.name.clone()),
            price: Set(input.price),
            category: Set(input.category.clone()),
            stock: Set(input.stock),
            description: Set(input.description.clone()),
        };
        am.insert(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn update(&self, model: product::Model) -> Result<product::Model, ServiceError> {
        let am = product::ActiveModel {
            id: Unchanged(model.id),
            name: Set(model.name),
            price: Set(model.price),
            category: Set(model.category),
            stock: Set(model.stock),
            description: Set(model.description),
        };
        am.update(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<product::Model>, ServiceError> {
        product::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        product::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn find_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::Category.eq(category))
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_name_containing(
        &self,
        keyword: &str,
    ) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(product::Column::Name)))
                    .like(format!("%{}%", keyword.to_lowercase())),
            )
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_stock_less_than(
        &self,
        threshold: i32,
    ) -> Result<Vec<product::Model>, ServiceError> {
        product::Entity::find()
            .filter(product::Column::Stock.lt(threshold))
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}
