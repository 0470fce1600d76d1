use super::database::Database;
use super::error::{Result, StoreError};
use crate::model::{NewPost, Post, PostUpdate};

const ENTITY: &str = "Post";

/// CRUD operations on the `posts` table.
pub struct Posts<'a> {
    db: &'a Database,
}

impl<'a> Posts<'a> {
    pub(super) fn new(db: &'a Database) -> Self {
        Self { db }
    }

    pub async fn find_many(&self) -> Result<Vec<Post>> {
        tracing::debug!("Listing posts");
        self.db.read(|t| t.posts.clone()).await
    }

    /// All posts owned by `user_id`. Empty when the user has none or does
    /// not exist.
    pub async fn find_many_by_user(&self, user_id: i32) -> Result<Vec<Post>> {
        tracing::debug!(user_id, "Listing posts for user");
        self.db
            .read(|t| {
                t.posts
                    .iter()
                    .filter(|p| p.user_id == user_id)
                    .cloned()
                    .collect()
            })
            .await
    }

    pub async fn find_unique(&self, id: i32) -> Result<Option<Post>> {
        tracing::debug!(id, "Looking up post");
        self.db
            .read(|t| t.posts.iter().find(|p| p.id == id).cloned())
            .await
    }

    pub async fn create(&self, data: NewPost) -> Result<Post> {
        tracing::info!(user_id = data.user_id, "Creating post");
        self.db
            .write(|t| {
                if !t.users.iter().any(|u| u.id == data.user_id) {
                    return Err(StoreError::ConstraintViolation(format!(
                        "Post.userId references missing user {}",
                        data.user_id
                    )));
                }
                let id = t.allocate_post_id()?;
                let post = data.into_post(id);
                t.posts.push(post.clone());
                Ok(post)
            })
            .await
    }

    pub async fn update(&self, id: i32, data: PostUpdate) -> Result<Post> {
        tracing::info!(id, "Updating post");
        self.db
            .write(|t| {
                let post = t
                    .posts
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or(StoreError::NotFound { entity: ENTITY, id })?;
                data.apply(post);
                Ok(post.clone())
            })
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<Post> {
        tracing::info!(id, "Deleting post");
        self.db
            .write(|t| {
                let pos = t
                    .posts
                    .iter()
                    .position(|p| p.id == id)
                    .ok_or(StoreError::NotFound { entity: ENTITY, id })?;
                Ok(t.posts.remove(pos))
            })
            .await
    }
}
