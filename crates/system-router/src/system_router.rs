// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use async_trait::async_trait;
use common::env_const::GQL_ENABLE_PLAYGROUND;
use common::http::{RequestPayload, ResponsePayload};
use common::router::{CompositeRouter, Router};
use gql_env::{EnvError, Environment};
use graphql_router::{GraphQLRouter, QueryExecutor};
use playground_router::{PlaygroundRouter, PlaygroundRouterConfig};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum SystemLoadingError {
    #[error("Could not build the schema: {0}")]
    Schema(String),

    #[error(transparent)]
    Config(#[from] EnvError),
}

/// Build the schema and the routers serving it.
///
/// The schema is built exactly once here; every request afterwards shares it read-only.
pub fn create_system_router(env: Arc<dyn Environment>) -> Result<SystemRouter, SystemLoadingError> {
    let schema = demo_schema::build_schema()
        .map_err(|e| SystemLoadingError::Schema(format!("{e:?}")))?;

    SystemRouter::new(Arc::new(schema), env)
}

type BoxedRouter = Box<dyn Router + Send + Sync>;

/// Top-level router: GraphQL requests first, then the playground page. Anything else is a 404.
pub struct SystemRouter {
    underlying: CompositeRouter,
}

impl SystemRouter {
    pub fn new(
        executor: Arc<dyn QueryExecutor>,
        env: Arc<dyn Environment>,
    ) -> Result<Self, SystemLoadingError> {
        let mut routers: Vec<BoxedRouter> =
            vec![Box::new(GraphQLRouter::new(executor, env.as_ref()))];

        if env.enabled(GQL_ENABLE_PLAYGROUND, true)? {
            let playground_config = Arc::new(PlaygroundRouterConfig::new(env.clone()));
            routers.push(Box::new(PlaygroundRouter::new(playground_config)));
        } else {
            debug!("Playground disabled");
        }

        Ok(Self {
            underlying: CompositeRouter::new(routers),
        })
    }
}

#[async_trait]
impl Router for SystemRouter {
    async fn route(&self, request: &mut (dyn RequestPayload + Send)) -> Option<ResponsePayload> {
        self.underlying.route(request).await
    }
}
