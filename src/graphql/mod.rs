//! GraphQL schema, resolvers and HTTP server for postboard.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server on port 4000
//! postboard serve
//!
//! # Execute a query from the CLI
//! postboard query '{ users { id name posts { details } } }'
//!
//! # Execute a mutation from the CLI
//! postboard mutate 'createUser(name: "Ada", email: "ada@x.com") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `users`, `user`, `posts`
//! - **Mutations**: `createUser`, `updateUser`, `deleteUser`, `createPost`,
//!   `updatePost`, `deletePost`
//! - **Relations**: `User.posts`, `Post.user`, each resolved with one lookup
//!   per parent object

mod error;
mod schema;
mod server;
mod types;

pub use error::{Operation, OperationResultExt};
pub use schema::{MutationRoot, PostboardSchema, QueryRoot, build_schema};
pub use server::{router, serve};
pub use types::*;
