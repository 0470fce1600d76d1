use anyhow::{Context, Result};
use colored::Colorize;
use tokio::net::TcpListener;

use super::CommandContext;
use crate::graphql::{build_schema, serve};

pub fn handle_serve(
    mut ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
) -> Result<()> {
    if let Some(host) = host {
        ctx.config.server.host = host;
    }
    if let Some(port) = port {
        ctx.config.server.port = port;
    }

    let server = ctx.config.server.clone();
    let addr = server.bind_address();

    tokio::runtime::Runtime::new()?.block_on(async {
        let listener = TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;
        let local = listener.local_addr()?;

        let db = ctx.open_database().await?;
        let schema = build_schema(db.clone());

        println!("{} http://{}/", "Server listening at".green(), local);
        if server.graphiql {
            println!("GraphiQL IDE: http://{}/", local);
        }

        let served = serve(listener, schema, server.graphiql, shutdown_signal()).await;
        db.close().await?;
        served?;
        Ok::<(), anyhow::Error>(())
    })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested");
}
