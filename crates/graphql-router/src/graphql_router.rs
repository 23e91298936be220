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
use common::env_const::get_graphql_http_path;
use common::http::{RequestHead, RequestPayload, ResponsePayload};
use common::router::Router;
use gql_env::Environment;
use http::{Method, StatusCode};
use serde_json::json;
use tracing::{debug, instrument};

use crate::{
    ExecutionResult, GRAPHQL_MEDIA_TYPE, QueryExecutor, QueryRequest, RequestError,
    ResolutionError, execute_query, to_response,
};

pub struct GraphQLRouter {
    executor: Arc<dyn QueryExecutor>,
    graphql_path: String,
}

impl GraphQLRouter {
    pub fn new(executor: Arc<dyn QueryExecutor>, env: &dyn Environment) -> Self {
        Self {
            executor,
            graphql_path: get_graphql_http_path(env),
        }
    }

    fn suitable(&self, request_head: &(dyn RequestHead + Send + Sync)) -> bool {
        request_head.get_path() == self.graphql_path
    }

    /// Extract the query request, then execute it. Extraction always completes before the
    /// executor is invoked, and a failed extraction never reaches the executor.
    async fn resolve(
        &self,
        request: &mut (dyn RequestPayload + Send),
        method: &Method,
    ) -> Result<ExecutionResult, ResolutionError> {
        let query_request = extract_query_request(request, method)?;
        debug!(
            operation_name = query_request.operation_name.as_deref(),
            has_variables = query_request.variables.is_some(),
            "Extracted GraphQL request"
        );

        Ok(execute_query(self.executor.as_ref(), query_request).await?)
    }
}

#[async_trait]
impl Router for GraphQLRouter {
    /// Resolves an incoming query, returning a JSON response. Query-level errors are part of a
    /// successful (200) response; only malformed requests (400) and execution faults (500)
    /// change the status code.
    #[instrument(
        name = "graphql_router::route",
        skip(self, request)
    )]
    async fn route(&self, request: &mut (dyn RequestPayload + Send)) -> Option<ResponsePayload> {
        let request_head = request.get_head();

        if !self.suitable(request_head) {
            return None;
        }

        let method = request_head.get_method();

        if method != Method::GET && method != Method::POST {
            return Some(method_not_allowed(&method));
        }

        if accepts_graphql_media_type(request_head) {
            debug!("Client accepts {GRAPHQL_MEDIA_TYPE}; responding with application/json");
        }

        Some(to_response(self.resolve(request, &method).await))
    }
}

fn extract_query_request(
    request: &mut (dyn RequestPayload + Send),
    method: &Method,
) -> Result<QueryRequest, RequestError> {
    if method == Method::GET {
        QueryRequest::from_query_string(&request.get_head().get_query_string())
    } else {
        QueryRequest::from_json_body(&request.take_body())
    }
}

fn accepts_graphql_media_type(request_head: &(dyn RequestHead + Send + Sync)) -> bool {
    request_head
        .get_headers(http::header::ACCEPT.as_str())
        .iter()
        .flat_map(|value| value.split(','))
        .filter_map(|media_range| media_range.split(';').next())
        .any(|media_type| media_type.trim().eq_ignore_ascii_case(GRAPHQL_MEDIA_TYPE))
}

fn method_not_allowed(method: &Method) -> ResponsePayload {
    let mut response = ResponsePayload::json(
        StatusCode::METHOD_NOT_ALLOWED,
        json!({ "error": format!("Method {method} is not supported; use GET or POST") })
            .to_string()
            .into_bytes(),
    );
    response
        .headers
        .insert(http::header::ALLOW.to_string(), "GET, POST".to_string());
    response
}
