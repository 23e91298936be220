// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::any::Any;
use std::panic::AssertUnwindSafe;

use async_graphql::Variables;
use async_graphql::dynamic::Schema;
use async_trait::async_trait;
use futures::FutureExt;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::{ExecutionFault, QueryRequest};

/// Input handed to the query engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionInput {
    pub query: String,
    pub operation_name: Option<String>,
    pub variables: Map<String, Value>,
}

impl From<QueryRequest> for ExecutionInput {
    fn from(request: QueryRequest) -> Self {
        Self {
            query: request.query,
            operation_name: request.operation_name,
            variables: request.variables.unwrap_or_default(),
        }
    }
}

/// The engine's output. Both fields are always serialized, even when `data` is null or
/// `errors` is empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionResult {
    pub data: Value,
    pub errors: Vec<Value>,
}

/// An engine able to execute a GraphQL document against a schema.
///
/// Implementations must report query-level problems in [ExecutionResult::errors] and reserve
/// `Err` for failures of the execution machinery itself.
#[async_trait]
pub trait QueryExecutor: Send + Sync {
    async fn execute(&self, input: ExecutionInput) -> Result<ExecutionResult, ExecutionFault>;
}

#[async_trait]
impl QueryExecutor for Schema {
    async fn execute(&self, input: ExecutionInput) -> Result<ExecutionResult, ExecutionFault> {
        let mut request = async_graphql::Request::new(input.query);

        if let Some(operation_name) = input.operation_name {
            request = request.operation_name(operation_name);
        }

        if !input.variables.is_empty() {
            request = request.variables(Variables::from_json(Value::Object(input.variables)));
        }

        let response = Schema::execute(self, request).await;

        let errors = response
            .errors
            .into_iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ExecutionResult {
            data: response.data.into_json()?,
            errors,
        })
    }
}

/// Execute a request, invoking the executor exactly once.
///
/// A panic inside the executor is reported as [ExecutionFault::Panicked] instead of unwinding
/// into the caller.
#[instrument(
    name = "graphql::execute_query",
    skip_all,
    fields(operation_name = request.operation_name.as_deref())
)]
pub async fn execute_query(
    executor: &dyn QueryExecutor,
    request: QueryRequest,
) -> Result<ExecutionResult, ExecutionFault> {
    AssertUnwindSafe(executor.execute(request.into()))
        .catch_unwind()
        .await
        .map_err(|panic| ExecutionFault::Panicked(panic_message(panic.as_ref())))?
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
