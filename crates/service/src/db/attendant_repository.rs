use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ActiveValue::Set, ActiveValue::Unchanged,
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, SqlErr,
};

use crate::errors::ServiceError;
use crate::repository::{AttendantInput, AttendantRepository};
use models::attendant;

/// SeaORM-backed attendant repository.
///
/// The unique indexes on email and mobile are the authoritative duplicate
/// guard; the service-level pre-check can race with a concurrent insert, so
/// constraint violations surfacing here are folded back into the same
/// validation errors the pre-check produces.
pub struct SeaOrmAttendantRepository {
    db: DatabaseConnection,
}

impl SeaOrmAttendantRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn map_write_err(e: DbErr) -> ServiceError {
    if let Some(SqlErr::UniqueConstraintViolation(msg)) = e.sql_err() {
        if msg.contains("uniq_attendants_mobile") {
            return ServiceError::Validation("mobile number already exists".into());
        }
        if msg.contains("uniq_attendants_email") {
            return ServiceError::Validation("email already exists".into());
        }
        return ServiceError::Validation(msg);
    }
    ServiceError::Db(e.to_string())
}

#[async_trait]
impl AttendantRepository for SeaOrmAttendantRepository {
    async fn insert(&self, input: &AttendantInput) -> Result<attendant::Model, ServiceError> {
        let am = attendant::ActiveModel {
            id: NotSet,
            name: Set(input.name.clone()),
            address: Set(input.address.clone()),
            mobile: Set(input.mobile.clone()),
            email: Set(input.email.clone()),
            comments: Set(input.comments.clone()),
        };
        am.insert(&self.db).await.map_err(map_write_err)
    }

    async fn update(&self, model: attendant::Model) -> Result<attendant::Model, ServiceError> {
        let am = attendant::ActiveModel {
            id: Unchanged(model.id),
            name: Set(model.name),
            address: Set(model.address),
            mobile: Set(model.mobile),
            email: Set(model.email),
            comments: Set(model.comments),
        };
        am.update(&self.db).await.map_err(map_write_err)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<attendant::Model>, ServiceError> {
        attendant::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_all(&self) -> Result<Vec<attendant::Model>, ServiceError> {
        attendant::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        attendant::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<attendant::Model>, ServiceError> {
        attendant::Entity::find()
            .filter(attendant::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, ServiceError> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn exists_by_mobile(&self, mobile: &str) -> Result<bool, ServiceError> {
        let found = attendant::Entity::find()
            .filter(attendant::Column::Mobile.eq(mobile))
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found.is_some())
    }

    async fn find_by_name_containing(
        &self,
        keyword: &str,
    ) -> Result<Vec<attendant::Model>, ServiceError> {
        attendant::Entity::find()
            .filter(
                Expr::expr(Func::lower(Expr::col(attendant::Column::Name)))
                    .like(format!("%{}%", keyword.to_lowercase())),
            )
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }
}
