use super::{
    entity::{NotificationFindEntity, NotificationInsertEntity},
    Error, NewNotification, Notification, NotificationsRepository,
};
use axum::async_trait;
use bson::{doc, oid::ObjectId, Bson, DateTime, Document};
use futures_util::TryStreamExt;
use mongodb::{error::ErrorKind, options::IndexOptions, Database, IndexModel};
use std::sync::Arc;

const NOTIFICATIONS: &str = "notifications";
const INDEX_NAME_TO_USER: &str = "index_to_user";

pub struct NotificationsRepositoryImpl {
    database: Database,
}

impl NotificationsRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        let collection_names = database.list_collection_names().await?;
        if !collection_names.iter().any(|name| name == NOTIFICATIONS) {
            tracing::debug!(collection = NOTIFICATIONS, "creating collection");
            database.create_collection(NOTIFICATIONS).await?;
        }

        let collection = database.collection::<Document>(NOTIFICATIONS);

        tracing::debug!("fetching index names");
        let index_names = collection.list_index_names().await?;

        if !index_names.contains(&INDEX_NAME_TO_USER.to_string()) {
            // _id is part of the key so listing by recipient
            // is served in insertion order straight from the index
            collection
                .create_index(
                    IndexModel::builder()
                        .keys(doc! {
                            "to_user": 1,
                            "_id": 1,
                        })
                        .options(
                            IndexOptions::builder()
                                .name(INDEX_NAME_TO_USER.to_string())
                                .build(),
                        )
                        .build(),
                )
                .await?;
            tracing::debug!(
                collection = NOTIFICATIONS,
                index = INDEX_NAME_TO_USER,
                "created index"
            );
        }

        Ok(Self { database })
    }
}

#[async_trait]
impl NotificationsRepository for NotificationsRepositoryImpl {
    async fn save(&self, notification: NewNotification) -> Result<Notification, Error> {
        // bson DateTime keeps only milliseconds
        let event_date = DateTime::from(notification.event_date);

        let insert_entity = NotificationInsertEntity {
            to_user: &notification.to_user,
            from_user: &notification.from_user,
            title: &notification.title,
            event: &notification.event,
            event_date,
            reference: &notification.reference,
            url: &notification.url,
        };

        let insert_result = self
            .database
            .collection::<NotificationInsertEntity>(NOTIFICATIONS)
            .insert_one(&insert_entity)
            .await?;

        let Bson::ObjectId(id) = insert_result.inserted_id else {
            tracing::error!("invalid type of inserted '_id'");
            return Err(Error::Mongo(
                ErrorKind::Custom(Arc::new("invalid type of inserted '_id'")).into(),
            ));
        };

        let mut notification = notification.into_notification(id);
        notification.event_date = event_date.into();

        Ok(notification)
    }

    async fn find_by_recipient(&self, user_id: &str) -> Result<Vec<Notification>, Error> {
        let notifications = self
            .database
            .collection::<NotificationFindEntity>(NOTIFICATIONS)
            .find(doc! {
                "to_user": user_id,
            })
            .sort(doc! { "_id": 1 })
            .await?
            .map_ok(Notification::from)
            .try_collect()
            .await?;

        Ok(notifications)
    }

    async fn delete_if_owned_by(&self, id: ObjectId, user_id: &str) -> Result<bool, Error> {
        let delete_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .delete_one(doc! {
                "_id": id,
                "to_user": user_id,
            })
            .await?;

        Ok(delete_result.deleted_count == 1)
    }

    async fn delete_all_by_recipient(&self, user_id: &str) -> Result<u64, Error> {
        let delete_result = self
            .database
            .collection::<Document>(NOTIFICATIONS)
            .delete_many(doc! {
                "to_user": user_id,
            })
            .await?;

        Ok(delete_result.deleted_count)
    }
}
