use anyhow::{Context, Result};

use super::CommandContext;
use crate::graphql::build_schema;

pub fn handle_query(ctx: CommandContext, query: String, variables: Option<String>) -> Result<()> {
    let response = tokio::runtime::Runtime::new()?.block_on(execute(&ctx, &query, variables))?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Run one GraphQL document against the configured database, closing it
/// afterwards so every write is on disk before the process exits.
pub(super) async fn execute(
    ctx: &CommandContext,
    document: &str,
    variables: Option<String>,
) -> Result<async_graphql::Response> {
    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(&v).context("Invalid --variables JSON")?,
        None => async_graphql::Variables::default(),
    };

    let db = ctx.open_database().await?;
    let schema = build_schema(db.clone());
    let request = async_graphql::Request::new(document).variables(vars);
    let response = schema.execute(request).await;
    db.close().await?;

    Ok(response)
}
