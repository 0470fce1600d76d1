use std::future::Future;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::{
    Router,
    response::{Html, IntoResponse},
    routing::{get, get_service},
};
use tokio::net::TcpListener;

use super::schema::PostboardSchema;
use crate::error::Result;

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}

/// All GraphQL traffic goes to `/`. `GET` serves the GraphiQL IDE when
/// enabled, otherwise it executes query-string requests like `POST` does.
pub fn router(schema: PostboardSchema, graphiql_enabled: bool) -> Router {
    let service = GraphQL::new(schema);
    let route = if graphiql_enabled {
        get(graphiql).post_service(service)
    } else {
        get_service(service.clone()).post_service(service)
    };
    Router::new().route("/", route)
}

/// Serve on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(
    listener: TcpListener,
    schema: PostboardSchema,
    graphiql_enabled: bool,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "GraphQL server listening");

    axum::serve(listener, router(schema, graphiql_enabled))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("GraphQL server stopped");
    Ok(())
}
