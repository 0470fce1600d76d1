//! # Postboard - a GraphQL CRUD service for users and posts
//!
//! Postboard serves a small relational schema over GraphQL: users, posts,
//! and the one-to-many relation between them. Every resolver makes exactly
//! one call into the persistence layer.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write .postboard.toml and create the data directory
//! postboard init
//!
//! # Serve GraphQL on http://127.0.0.1:4000/
//! postboard serve
//!
//! # Or talk to the database directly
//! postboard mutate 'createUser(name: "Ada", email: "ada@x.com") { id }'
//! postboard query '{ users { name posts { details } } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and management
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (User, Post)
//! - [`storage`]: The persistence client

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.postboard.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server that exposes it.
pub mod graphql;

/// Data models for users and posts.
pub mod model;

/// Persistence layer.
///
/// A shared database handle with per-entity CRUD operations.
pub mod storage;

pub mod logging;
