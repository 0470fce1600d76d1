use std::sync::Arc;

use anyhow::Result;

use crate::graphql::build_schema;
use crate::storage::Database;

pub fn handle_schema() -> Result<()> {
    let schema = build_schema(Arc::new(Database::open_in_memory()));
    print!("{}", schema.sdl());
    Ok(())
}
