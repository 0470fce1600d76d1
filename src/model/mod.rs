//! Data models for postboard.
//!
//! - [`User`]: an account that owns zero or more posts
//! - [`Post`]: a piece of text owned by exactly one user
//!
//! The `New*` and `*Update` structs are the field sets accepted by the
//! persistence layer for creates and updates.

mod post;
mod user;

pub use post::{NewPost, Post, PostUpdate};
pub use user::{NewUser, User, UserUpdate};
