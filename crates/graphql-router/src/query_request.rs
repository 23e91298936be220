// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Deserialize;
use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::RequestError;
use crate::variables::{decode_variables, not_an_object};

/// The normalized `{query, operationName, variables}` triple of a GraphQL request.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub query: String,
    pub operation_name: Option<String>,
    pub variables: Option<Map<String, Value>>,
}

impl QueryRequest {
    /// Extract from the raw (still percent-encoded) query string of a GET request.
    ///
    /// Each parameter is URL-decoded exactly once. If a parameter repeats, its first occurrence
    /// is used. Empty `operationName` and `variables` values are treated as absent.
    pub fn from_query_string(query_string: &str) -> Result<Self, RequestError> {
        let mut query = None;
        let mut operation_name = None;
        let mut variables = None;

        for (key, value) in form_urlencoded::parse(query_string.as_bytes()) {
            let slot = match key.as_ref() {
                "query" => &mut query,
                "operationName" => &mut operation_name,
                "variables" => &mut variables,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        let query = query
            .filter(|query| !query.trim().is_empty())
            .ok_or(RequestError::MissingQuery)?;

        let variables = variables
            .filter(|variables| !variables.trim().is_empty())
            .map(|variables| decode_variables(&variables))
            .transpose()?;

        Ok(Self {
            query,
            operation_name: operation_name.filter(|name| !name.is_empty()),
            variables,
        })
    }

    /// Extract from the JSON body of a POST request.
    pub fn from_json_body(body: &[u8]) -> Result<Self, RequestError> {
        #[derive(Debug, Deserialize)]
        struct RawQueryRequest {
            query: String,
            #[serde(rename = "operationName")]
            operation_name: Option<String>,
            variables: Option<Value>,
        }

        let raw = serde_json::from_slice::<RawQueryRequest>(body)
            .map_err(|e| RequestError::MalformedBody(e.to_string()))?;

        if raw.query.trim().is_empty() {
            return Err(RequestError::MalformedBody(
                "'query' must not be empty".to_string(),
            ));
        }

        let variables = match raw.variables {
            None | Some(Value::Null) => None,
            Some(Value::Object(variables)) => Some(variables),
            Some(other) => return Err(not_an_object(&other)),
        };

        Ok(Self {
            query: raw.query,
            operation_name: raw.operation_name.filter(|name| !name.is_empty()),
            variables,
        })
    }
}
