use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use super::error::{Operation, OperationResultExt};
use super::types::*;
use crate::model::{NewPost, NewUser, PostUpdate, UserUpdate};
use crate::storage::Database;

pub type PostboardSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema around an already opened database. The handle is shared
/// by every request executed against the schema.
pub fn build_schema(db: Arc<Database>) -> PostboardSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(db)
        .finish()
}

pub(super) fn database<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<Database>> {
    ctx.data::<Arc<Database>>()
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// All users
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let db = database(ctx)?;
        let users = db
            .users()
            .find_many()
            .await
            .or_fail(Operation::FetchUsers)?;
        Ok(users.into_iter().map(User::from).collect())
    }

    /// A single user by ID, or null if there is none
    async fn user(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<User>> {
        let db = database(ctx)?;
        let user = db
            .users()
            .find_unique(id)
            .await
            .or_fail(Operation::FetchUser)?;
        Ok(user.map(User::from))
    }

    /// All posts
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let db = database(ctx)?;
        let posts = db
            .posts()
            .find_many()
            .await
            .or_fail(Operation::FetchPosts)?;
        Ok(posts.into_iter().map(Post::from).collect())
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Create a new user
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        email: String,
    ) -> async_graphql::Result<User> {
        let db = database(ctx)?;
        let user = db
            .users()
            .create(NewUser::new(name, email))
            .await
            .or_fail(Operation::CreateUser)?;
        Ok(user.into())
    }

    /// Replace the name and email of an existing user
    async fn update_user(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: String,
        email: String,
    ) -> async_graphql::Result<User> {
        let db = database(ctx)?;
        let update = UserUpdate {
            name: Some(name),
            email: Some(email),
        };
        let user = db
            .users()
            .update(id, update)
            .await
            .or_fail(Operation::UpdateUser)?;
        Ok(user.into())
    }

    /// Delete a user that owns no posts
    async fn delete_user(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<User> {
        let db = database(ctx)?;
        let user = db
            .users()
            .delete(id)
            .await
            .or_fail(Operation::DeleteUser)?;
        Ok(user.into())
    }

    /// Create a post owned by an existing user
    async fn create_post(
        &self,
        ctx: &Context<'_>,
        details: String,
        user_id: i32,
    ) -> async_graphql::Result<Post> {
        let db = database(ctx)?;
        let post = db
            .posts()
            .create(NewPost::new(details, user_id))
            .await
            .or_fail(Operation::CreatePost)?;
        Ok(post.into())
    }

    /// Replace the details of an existing post
    async fn update_post(
        &self,
        ctx: &Context<'_>,
        id: i32,
        details: String,
    ) -> async_graphql::Result<Post> {
        let db = database(ctx)?;
        let update = PostUpdate {
            details: Some(details),
        };
        let post = db
            .posts()
            .update(id, update)
            .await
            .or_fail(Operation::UpdatePost)?;
        Ok(post.into())
    }

    /// Delete a post
    async fn delete_post(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Post> {
        let db = database(ctx)?;
        let post = db
            .posts()
            .delete(id)
            .await
            .or_fail(Operation::DeletePost)?;
        Ok(post.into())
    }
}
