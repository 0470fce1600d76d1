use super::database::Database;
use super::error::{Result, StoreError};
use crate::model::{NewUser, User, UserUpdate};

const ENTITY: &str = "User";

/// CRUD operations on the `users` table.
pub struct Users<'a> {
    db: &'a Database,
}

impl<'a> Users<'a> {
    pub(super) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn find_many(&self) -> Result<Vec<User>> {
        tracing::debug!("Listing users");
        self.db.read(|t| t.users.clone()).await
    }

    pub async fn find_unique(&self, id: i32) -> Result<Option<User>> {
        tracing::debug!(id, "Looking up user");
        self.db
            .read(|t| t.users.iter().find(|u| u.id == id).cloned())
            .await
    }

    pub async fn create(&self, data: NewUser) -> Result<User> {
        tracing::debug!(name = %data.name, "Creating user");
        let user = self
            .db
            .write(|t| {
                let id = t.allocate_user_id()?;
                let user = data.into_user(id);
                t.users.push(user.clone());
                Ok(user)
            })
            .await?;
        tracing::info!(id = user.id, "Created user");
        Ok(user)
    }

    pub async fn update(&self, id: i32, data: UserUpdate) -> Result<User> {
        tracing::info!(id, "Updating user");
        self.db
            .write(|t| {
                let user = t
                    .users
                    .iter_mut()
                    .find(|u| u.id == id)
                    .ok_or(StoreError::NotFound { entity: ENTITY, id })?;
                data.apply(user);
                Ok(user.clone())
            })
            .await
    }

    /// Remove a user. Refuses while any post still references it.
    pub async fn delete(&self, id: i32) -> Result<User> {
        tracing::info!(id, "Deleting user");
        self.db
            .write(|t| {
                let pos = t
                    .users
                    .iter()
                    .position(|u| u.id == id)
                    .ok_or(StoreError::NotFound { entity: ENTITY, id })?;

                let owned = t.posts.iter().filter(|p| p.user_id == id).count();
                if owned > 0 {
                    return Err(StoreError::ConstraintViolation(format!(
                        "User {} is still referenced by {} post(s)",
                        id, owned
                    )));
                }

                Ok(t.users.remove(pos))
            })
            .await
    }
}
