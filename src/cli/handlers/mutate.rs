use anyhow::Result;

use super::CommandContext;
use super::query::execute;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
) -> Result<()> {
    // Auto-wrap in mutation { }
    let document = format!("mutation {{ {} }}", mutation);
    let response =
        tokio::runtime::Runtime::new()?.block_on(execute(&ctx, &document, variables))?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
