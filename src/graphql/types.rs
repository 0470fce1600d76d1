use async_graphql::{ComplexObject, Context, SimpleObject};

use super::error::{Operation, OperationResultExt};
use super::schema::database;
use crate::model::{Post as ModelPost, User as ModelUser};
use crate::storage::StoreError;

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

#[ComplexObject]
impl User {
    /// Posts owned by this user
    async fn posts(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Post>> {
        let db = database(ctx)?;
        let posts = db
            .posts()
            .find_many_by_user(self.id)
            .await
            .or_fail(Operation::FetchUserPosts)?;
        Ok(posts.into_iter().map(Post::from).collect())
    }
}

impl From<ModelUser> for User {
    fn from(u: ModelUser) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Post {
    pub id: i32,
    pub details: String,
    pub user_id: i32,
}

#[ComplexObject]
impl Post {
    /// The user this post belongs to
    async fn user(&self, ctx: &Context<'_>) -> async_graphql::Result<User> {
        let db = database(ctx)?;
        let user = db
            .users()
            .find_unique(self.user_id)
            .await
            .and_then(|found| {
                found.ok_or(StoreError::NotFound {
                    entity: "User",
                    id: self.user_id,
                })
            })
            .or_fail(Operation::FetchPostUser)?;
        Ok(user.into())
    }
}

impl From<ModelPost> for Post {
    fn from(p: ModelPost) -> Self {
        Self {
            id: p.id,
            details: p.details,
            user_id: p.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Database;
    use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
    use std::sync::Arc;

    /// Hands out parents without touching the database, so only the
    /// relation resolvers hit it.
    struct ParentsRoot;

    #[Object]
    impl ParentsRoot {
        async fn user(&self) -> User {
            User {
                id: 1,
                name: "Ada".to_string(),
                email: "ada@x.com".to_string(),
            }
        }

        async fn post(&self) -> Post {
            Post {
                id: 1,
                details: "hello".to_string(),
                user_id: 1,
            }
        }
    }

    async fn closed_schema() -> Schema<ParentsRoot, EmptyMutation, EmptySubscription> {
        let db = Arc::new(Database::open_in_memory());
        db.close().await.unwrap();
        Schema::build(ParentsRoot, EmptyMutation, EmptySubscription)
            .data(db)
            .finish()
    }

    fn first_error(response: &async_graphql::Response) -> serde_json::Value {
        let body = serde_json::to_value(response).unwrap();
        body["errors"][0].clone()
    }

    #[tokio::test]
    async fn test_user_posts_failure_is_generic() {
        let schema = closed_schema().await;

        let response = schema.execute("{ user { posts { id } } }").await;

        let error = first_error(&response);
        assert_eq!(error["message"], "Failed to fetch user posts");
        assert_eq!(error["extensions"]["code"], "CONNECTION_ERROR");
        assert_eq!(error["path"], serde_json::json!(["user", "posts"]));
    }

    #[tokio::test]
    async fn test_post_user_failure_is_generic() {
        let schema = closed_schema().await;

        let response = schema.execute("{ post { user { id } } }").await;

        let error = first_error(&response);
        assert_eq!(error["message"], "Failed to fetch post user");
        assert_eq!(error["extensions"]["code"], "CONNECTION_ERROR");
    }

    #[tokio::test]
    async fn test_post_user_dangling_is_not_found() {
        let db = Arc::new(Database::open_in_memory());
        let schema = Schema::build(ParentsRoot, EmptyMutation, EmptySubscription)
            .data(db)
            .finish();

        let response = schema.execute("{ post { user { id } } }").await;

        let error = first_error(&response);
        assert_eq!(error["message"], "Failed to fetch post user");
        assert_eq!(error["extensions"]["code"], "NOT_FOUND");
    }
}
