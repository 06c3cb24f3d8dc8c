//! # GraphQL Schema
//!
//! Placeholder GraphQL surface with a single static `hello` field.
//! Malformed queries get the standard GraphQL error envelope from
//! async-graphql; nothing here can otherwise fail.

use crate::state::AppState;
use async_graphql::{EmptyMutation, EmptySubscription, Object, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::extract::State;

/// Greeting returned by the `hello` field
pub const GREETING: &str = "Hello! The WhatsApp gateway GraphQL server is running.";

/// Root query type
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Static greeting, proves the GraphQL endpoint is wired up
    async fn hello(&self) -> &'static str {
        GREETING
    }
}

/// Schema type for the gateway
pub type GatewaySchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

/// Build the gateway schema
pub fn create_schema() -> GatewaySchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription).finish()
}

/// Execute a GraphQL request against the shared schema
pub async fn graphql_handler(
    State(state): State<AppState>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_hello_query() {
        let schema = create_schema();
        let response = schema.execute("{ hello }").await;

        assert!(response.errors.is_empty());
        let data = response.data.into_json().unwrap();
        assert_eq!(data["hello"], GREETING);
    }

    #[tokio::test]
    async fn test_malformed_query_returns_errors() {
        let schema = create_schema();
        let response = schema.execute("{ hello").await;
        assert!(!response.errors.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_field_returns_errors() {
        let schema = create_schema();
        let response = schema.execute("{ goodbye }").await;
        assert!(!response.errors.is_empty());
    }
}
