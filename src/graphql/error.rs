//! Translation of persistence failures into GraphQL field errors.
//!
//! Every resolver names itself with an [`Operation`]. On failure the full
//! [`StoreError`] is logged and the client only sees the operation's generic
//! message plus a `code` extension carrying the [`ErrorKind`].

use async_graphql::ErrorExtensions;

use crate::storage::{ErrorKind, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    FetchUsers,
    FetchUser,
    FetchPosts,
    CreateUser,
    UpdateUser,
    DeleteUser,
    CreatePost,
    UpdatePost,
    DeletePost,
    FetchUserPosts,
    FetchPostUser,
}

impl Operation {
    /// Client-visible message.
    pub fn message(self) -> &'static str {
        match self {
            Operation::FetchUsers => "Failed to fetch users",
            Operation::FetchUser => "Failed to fetch user",
            Operation::FetchPosts => "Failed to fetch posts",
            Operation::CreateUser => "Failed to create user",
            Operation::UpdateUser => "Failed to update user",
            Operation::DeleteUser => "Failed to delete user",
            Operation::CreatePost => "Failed to create post",
            Operation::UpdatePost => "Failed to update post",
            Operation::DeletePost => "Failed to delete post",
            Operation::FetchUserPosts => "Failed to fetch user posts",
            Operation::FetchPostUser => "Failed to fetch post user",
        }
    }

    fn log_message(self) -> &'static str {
        match self {
            Operation::FetchUsers => "Error fetching users",
            Operation::FetchUser => "Error fetching user",
            Operation::FetchPosts => "Error fetching posts",
            Operation::CreateUser => "Error creating user",
            Operation::UpdateUser => "Error updating user",
            Operation::DeleteUser => "Error deleting user",
            Operation::CreatePost => "Error creating post",
            Operation::UpdatePost => "Error updating post",
            Operation::DeletePost => "Error deleting post",
            Operation::FetchUserPosts => "Error fetching user posts",
            Operation::FetchPostUser => "Error fetching post user",
        }
    }

    /// Log `err` in full and turn it into the generic error for this operation.
    pub fn fail(self, err: StoreError) -> async_graphql::Error {
        let kind = err.kind();
        tracing::error!(operation = ?self, kind = %kind, error = %err, "{}", self.log_message());
        public_error(self, kind)
    }
}

fn public_error(op: Operation, kind: ErrorKind) -> async_graphql::Error {
    async_graphql::Error::new(op.message()).extend_with(|_, e| e.set("code", kind.code()))
}

pub trait OperationResultExt<T> {
    fn or_fail(self, op: Operation) -> async_graphql::Result<T>;
}

impl<T> OperationResultExt<T> for crate::storage::Result<T> {
    fn or_fail(self, op: Operation) -> async_graphql::Result<T> {
        self.map_err(|e| op.fail(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_graphql::Value;

    #[test]
    fn test_detail_is_not_exposed() {
        let err = Operation::UpdateUser.fail(StoreError::NotFound {
            entity: "User",
            id: 42,
        });

        assert_eq!(err.message, "Failed to update user");
        assert!(!err.message.contains("42"));

        let code = err.extensions.as_ref().and_then(|ext| ext.get("code"));
        assert_eq!(code, Some(&Value::from("NOT_FOUND")));
    }

    #[test]
    fn test_kind_reaches_code_extension() {
        let cases = [
            (
                StoreError::ConstraintViolation("fk".to_string()),
                "CONSTRAINT_VIOLATION",
            ),
            (StoreError::Connection("disk".to_string()), "CONNECTION_ERROR"),
            (StoreError::Closed, "CONNECTION_ERROR"),
            (StoreError::Corrupt("bad".to_string()), "UNKNOWN"),
        ];

        for (store_err, expected) in cases {
            let err = Operation::CreatePost.fail(store_err);
            assert_eq!(err.message, "Failed to create post");
            let code = err.extensions.as_ref().and_then(|ext| ext.get("code"));
            assert_eq!(code, Some(&Value::from(expected)));
        }
    }

    #[test]
    fn test_or_fail_passes_values_through() {
        let ok: crate::storage::Result<i32> = Ok(7);
        assert_eq!(ok.or_fail(Operation::FetchUser).unwrap(), 7);
    }
}
