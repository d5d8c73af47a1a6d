//! User gateway backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use super::gateway::{Gateway, GatewayError, GatewayResult};
use crate::domain::{User, UserFields, UserResource};

/// Concrete implementation of the user gateway
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn active_model(id: ActiveValue<i32>, fields: UserFields) -> ActiveModel {
    ActiveModel {
        id,
        name: Set(fields.name),
        email: Set(fields.email),
        password: Set(fields.password),
        tel: Set(fields.tel),
        role: Set(fields.role),
    }
}

#[async_trait]
impl Gateway<UserResource> for UserStore {
    async fn find_many(&self) -> GatewayResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> GatewayResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(User::from))
    }

    async fn create(&self, fields: UserFields) -> GatewayResult<User> {
        let model = active_model(ActiveValue::NotSet, fields)
            .insert(&self.db)
            .await?;

        Ok(User::from(model))
    }

    async fn update_by_id(&self, id: i32, fields: UserFields) -> GatewayResult<User> {
        let model = active_model(ActiveValue::Unchanged(id), fields)
            .update(&self.db)
            .await?;

        Ok(User::from(model))
    }

    async fn delete_by_id(&self, id: i32) -> GatewayResult<User> {
        let txn = self.db.begin().await?;

        let model = UserEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(GatewayError::NotFound)?;

        let result = UserEntity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(GatewayError::NotFound);
        }

        txn.commit().await?;
        Ok(User::from(model))
    }
}
