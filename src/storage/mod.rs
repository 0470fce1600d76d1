//! Persistence layer for postboard.
//!
//! A single [`Database`] handle is opened at startup and shared by every
//! request. Both tables live in memory and are mirrored to one JSON document
//! on disk after each committed write.
//!
//! ## Document Format
//!
//! ```json
//! {
//!   "next_user_id": 2,
//!   "next_post_id": 2,
//!   "users": [{ "id": 1, "name": "Ada", "email": "ada@x.com" }],
//!   "posts": [{ "id": 1, "details": "hello", "userId": 1 }]
//! }
//! ```
//!
//! Missing counters default to 1 and are raised past the highest stored id
//! on open.
//!
//! ## Components
//!
//! - [`Database`]: lifecycle (`open`, `open_in_memory`, `close`)
//! - [`Users`]: CRUD for users
//! - [`Posts`]: CRUD for posts, plus the by-owner lookup
//! - [`StoreError`] / [`ErrorKind`]: failure taxonomy

mod database;
mod error;
mod posts;
mod users;

pub use database::Database;
pub use error::{ErrorKind, Result, StoreError};
pub use posts::Posts;
pub use users::Users;
