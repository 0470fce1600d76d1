use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "postboard")]
#[command(
    author,
    version,
    about = "A GraphQL CRUD service for users and their posts"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .postboard.toml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to the database file (overrides config)
    #[arg(long, global = true)]
    pub database: Option<String>,

    /// Keep all data in memory for the lifetime of the process
    #[arg(long, global = true)]
    pub in_memory: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .postboard.toml and create the data directory
    Init,

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "POSTBOARD_PORT")]
        port: Option<u16>,
    },

    /// Execute a GraphQL query against the local database
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}
