// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use common::http::ResponsePayload;
use http::StatusCode;
use serde_json::json;

use crate::{ExecutionResult, ResolutionError};

macro_rules! error_msg {
    ($msg:literal) => {
        concat!("{\"error\":\"", $msg, "\"}").as_bytes()
    };
}

/// Map the outcome of a GraphQL request onto an HTTP response.
///
/// - a completed execution is a 200, even if the result carries query errors
/// - a request error is a 400 with a descriptive `{"error": ...}` body
/// - an execution fault is a 500 with a fixed body
pub fn to_response(outcome: Result<ExecutionResult, ResolutionError>) -> ResponsePayload {
    match outcome {
        Ok(result) => match serde_json::to_vec(&result) {
            Ok(body) => ResponsePayload::json(StatusCode::OK, body),
            Err(err) => {
                tracing::error!("Error serializing execution result: {}", err);
                execution_fault_response()
            }
        },
        Err(ResolutionError::Request(err)) => {
            tracing::debug!("Rejecting GraphQL request: {}", err);
            ResponsePayload::json(
                StatusCode::BAD_REQUEST,
                json!({ "error": err.to_string() }).to_string().into_bytes(),
            )
        }
        Err(ResolutionError::Execution(err)) => {
            tracing::error!("Error while executing query: {}", err);
            execution_fault_response()
        }
    }
}

fn execution_fault_response() -> ResponsePayload {
    ResponsePayload::json(
        StatusCode::INTERNAL_SERVER_ERROR,
        error_msg!("Error executing query").to_vec(),
    )
}

#[cfg(test)]
mod tests {
    use serde_json::Value;

    use super::*;
    use crate::{ExecutionFault, RequestError};

    fn body_json(response: &ResponsePayload) -> Value {
        serde_json::from_slice(response.body.as_bytes()).unwrap()
    }

    #[test]
    fn completed_execution_keeps_both_fields() {
        let response = to_response(Ok(ExecutionResult {
            data: Value::Null,
            errors: vec![json!({"message": "Unknown field"})],
        }));

        assert_eq!(response.status_code, StatusCode::OK);
        assert_eq!(
            response.headers.get("content-type").as_deref(),
            Some("application/json")
        );
        assert_eq!(
            body_json(&response),
            json!({"data": null, "errors": [{"message": "Unknown field"}]})
        );
    }

    #[test]
    fn empty_errors_are_serialized() {
        let response = to_response(Ok(ExecutionResult {
            data: json!({"hello": "world"}),
            errors: vec![],
        }));

        assert_eq!(
            String::from_utf8(response.body.as_bytes().to_vec()).unwrap(),
            r#"{"data":{"hello":"world"},"errors":[]}"#
        );
    }

    #[test]
    fn request_errors_are_bad_requests() {
        let response = to_response(Err(RequestError::MissingQuery.into()));

        assert_eq!(response.status_code, StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(&response),
            json!({"error": "Missing required parameter 'query'"})
        );
    }

    #[test]
    fn execution_faults_are_server_errors() {
        let response = to_response(Err(
            ExecutionFault::Panicked("internal detail".to_string()).into()
        ));

        assert_eq!(response.status_code, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&response), json!({"error": "Error executing query"}));
    }
}
