// GraphQL server host for the person directory
// This binds a schema variant into a running Axum request handler

use std::net::SocketAddr;
use std::sync::Arc;

use async_graphql::{EmptySubscription, ObjectType, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
    Router, Server,
};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::engine::{
    graphql::{build_proxy_schema, build_static_schema},
    store::{PersonStore, RestStore, RestStoreConfig, StaticStore},
};
use crate::models::{seed_persons, IdGenerator, Person, UuidGenerator};

/// GraphQL server configuration
#[derive(Debug, Clone)]
pub struct GraphQLServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_enabled: bool,
}

impl Default for GraphQLServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4000,
            cors_enabled: true,
        }
    }
}

// Which store backs the service; selected at build time, not per request
enum Variant {
    Static { seed: Vec<Person> },
    Proxied { config: RestStoreConfig },
}

/// GraphQL server
///
/// Hosts one of the two service variants:
/// - static: the in-memory directory, optionally seeded
/// - proxied: the REST-provider-backed directory, with `editNumber`
pub struct GraphQLServer {
    config: GraphQLServerConfig,
    variant: Variant,
    ids: Arc<dyn IdGenerator>,
}

impl GraphQLServer {
    /// A static-variant server over the sample directory
    pub fn new() -> Self {
        Self {
            config: GraphQLServerConfig::default(),
            variant: Variant::Static {
                seed: seed_persons(),
            },
            ids: Arc::new(UuidGenerator),
        }
    }

    pub fn with_config(mut self, config: GraphQLServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Back the server with a static directory holding the given records
    pub fn with_seed(mut self, seed: Vec<Person>) -> Self {
        self.variant = Variant::Static { seed };
        self
    }

    /// Back the server with the REST-proxied store (enables `editNumber`)
    pub fn with_proxy(mut self, config: RestStoreConfig) -> Self {
        self.variant = Variant::Proxied { config };
        self
    }

    /// Substitute the id-generation capability (tests use a deterministic one)
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = match self.variant {
            Variant::Static { seed } => {
                info!("📇 Starting server with the static in-memory directory");
                let store: Arc<dyn PersonStore> = Arc::new(StaticStore::with_seed(seed));
                build_router(
                    build_static_schema(store, self.ids),
                    self.config.cors_enabled,
                )
            }
            Variant::Proxied { config } => {
                info!(
                    endpoint = %config.endpoint,
                    "🔗 Starting server proxying the REST person provider"
                );
                let store: Arc<dyn PersonStore> = Arc::new(RestStore::new(config));
                build_router(
                    build_proxy_schema(store, self.ids),
                    self.config.cors_enabled,
                )
            }
        };

        let addr: SocketAddr = format!("{}:{}", self.config.host, self.config.port).parse()?;
        let server = Server::bind(&addr).serve(app.into_make_service());

        // The one startup line clients look for: the reachable address
        info!("🚀 GraphQL server listening on http://{}", server.local_addr());

        server.await?;
        Ok(())
    }
}

impl Default for GraphQLServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for server setup
pub struct GraphQLServerBuilder {
    server: GraphQLServer,
}

impl GraphQLServerBuilder {
    pub fn new() -> Self {
        Self {
            server: GraphQLServer::new(),
        }
    }

    pub fn with_port(mut self, port: u16) -> Self {
        let mut config = self.server.config.clone();
        config.port = port;
        self.server = self.server.with_config(config);
        self
    }

    pub fn with_seed(mut self, seed: Vec<Person>) -> Self {
        self.server = self.server.with_seed(seed);
        self
    }

    pub fn with_proxy(mut self, config: RestStoreConfig) -> Self {
        self.server = self.server.with_proxy(config);
        self
    }

    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.server = self.server.with_id_generator(ids);
        self
    }

    pub async fn build_and_run(self) -> Result<(), Box<dyn std::error::Error>> {
        self.server.run().await
    }
}

impl Default for GraphQLServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// Assemble the route table for either schema variant
fn build_router<Q, M>(schema: Schema<Q, M, EmptySubscription>, cors_enabled: bool) -> Router
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
{
    let mut app = Router::new()
        .route("/", get(graphiql).post(graphql_handler::<Q, M>))
        .route("/graphql", post(graphql_handler::<Q, M>))
        .route("/health", get(health_check))
        .with_state(schema);

    if cors_enabled {
        app = app.layer(CorsLayer::permissive());
    }

    app
}

// GraphQL handler
async fn graphql_handler<Q, M>(
    State(schema): State<Schema<Q, M, EmptySubscription>>,
    req: GraphQLRequest,
) -> GraphQLResponse
where
    Q: ObjectType + 'static,
    M: ObjectType + 'static,
{
    schema.execute(req.into_inner()).await.into()
}

// GraphiQL interface
async fn graphiql() -> impl IntoResponse {
    Html(
        r#"
<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <meta name="robots" content="noindex">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="referrer" content="origin">
    <title>GraphiQL IDE</title>
    <style>
      body {
        height: 100%;
        margin: 0;
        width: 100%;
        overflow: hidden;
      }
      #graphiql {
        height: 100vh;
      }
    </style>
    <script crossorigin src="https://unpkg.com/react@18/umd/react.development.js"></script>
    <script crossorigin src="https://unpkg.com/react-dom@18/umd/react-dom.development.js"></script>
    <link rel="icon" href="https://graphql.org/favicon.ico">
    <link rel="stylesheet" href="https://unpkg.com/graphiql@3/graphiql.min.css" />
  </head>
  <body>
    <div id="graphiql">Loading...</div>
    <script src="https://unpkg.com/graphiql@3/graphiql.min.js" type="application/javascript"></script>
    <script>
      const root = ReactDOM.createRoot(document.getElementById('graphiql'));

      const fetcher = GraphiQL.createFetcher({
        url: '/graphql',
      });

      root.render(React.createElement(GraphiQL, {
        fetcher: fetcher,
        defaultEditorToolsVisibility: true,
      }));
    </script>
  </body>
</html>
"#,
    )
}

// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "Phonebook GraphQL server is running!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_enables_cors_on_4000() {
        let config = GraphQLServerConfig::default();
        assert_eq!(config.port, 4000);
        assert!(config.cors_enabled);
    }

    #[tokio::test]
    async fn health_check_reports_ok() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn graphiql_serves_html() {
        let response = graphiql().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
