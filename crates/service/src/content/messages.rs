//! Contact-form messages: append-only, read back newest first.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, NotSet, QueryOrder, Set};

use models::messages;

use crate::errors::ServiceError;

/// Record an inbound message, stamping it with the current time.
pub async fn create_message(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    message: &str,
) -> Result<messages::Model, ServiceError> {
    let am = messages::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        message: Set(message.to_string()),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))?)
}

/// List all messages, newest first.
pub async fn list_messages(db: &DatabaseConnection) -> Result<Vec<messages::Model>, ServiceError> {
    Ok(messages::Entity::find()
        .order_by_desc(messages::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_db;

    /// Messages are stamped on arrival and listed newest first.
    #[tokio::test]
    async fn messages_are_listed_newest_first() -> Result<(), anyhow::Error> {
        let db = memory_db().await?;

        let before = Utc::now();
        let first = create_message(&db, "Ann", "ann@example.com", "Hello").await?;
        assert!(first.created_at >= before);

        // distinct timestamps so the ordering is observable
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = create_message(&db, "Ben", "ben@example.com", "Quote please").await?;

        let all = list_messages(&db).await?;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
        assert_eq!(all[0].message, "Quote please");
        Ok(())
    }
}
