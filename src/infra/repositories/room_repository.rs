//! Room gateway backed by SeaORM.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, EntityTrait, QueryOrder, Set,
    TransactionTrait,
};

use super::entities::room::{self, ActiveModel, Entity as RoomEntity};
use super::gateway::{Gateway, GatewayError, GatewayResult};
use crate::domain::{Room, RoomFields, RoomResource};

pub struct RoomStore {
    db: DatabaseConnection,
}

impl RoomStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Gateway<RoomResource> for RoomStore {
    async fn find_many(&self) -> GatewayResult<Vec<Room>> {
        let models = RoomEntity::find()
            .order_by_asc(room::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Room::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> GatewayResult<Option<Room>> {
        Ok(RoomEntity::find_by_id(id).one(&self.db).await?.map(Room::from))
    }

    async fn create(&self, fields: RoomFields) -> GatewayResult<Room> {
        let active = ActiveModel {
            id: ActiveValue::NotSet,
            name: Set(fields.name),
            description: Set(fields.description),
        };

        Ok(Room::from(active.insert(&self.db).await?))
    }

    async fn update_by_id(&self, id: i32, fields: RoomFields) -> GatewayResult<Room> {
        let active = ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: Set(fields.name),
            description: Set(fields.description),
        };

        Ok(Room::from(active.update(&self.db).await?))
    }

    async fn delete_by_id(&self, id: i32) -> GatewayResult<Room> {
        // Read and remove under one transaction so the removed row can be returned
        let txn = self.db.begin().await?;

        let model = RoomEntity::find_by_id(id)
            .one(&txn)
            .await?
            .ok_or(GatewayError::NotFound)?;

        if RoomEntity::delete_by_id(id).exec(&txn).await?.rows_affected == 0 {
            return Err(GatewayError::NotFound);
        }

        txn.commit().await?;
        Ok(Room::from(model))
    }
}
