// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde_json::{Map, Value};

use crate::RequestError;

/// Decode the (already URL-decoded) `variables` parameter of a GET request.
///
/// The text must be a JSON object. Nested values are passed through untouched; the engine
/// validates them against the operation's variable definitions. A repeated key keeps its last
/// value.
pub fn decode_variables(raw: &str) -> Result<Map<String, Value>, RequestError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(variables)) => Ok(variables),
        Ok(other) => Err(not_an_object(&other)),
        Err(e) => Err(RequestError::MalformedVariables(e.to_string())),
    }
}

pub(crate) fn not_an_object(value: &Value) -> RequestError {
    RequestError::MalformedVariables(format!(
        "expected a JSON object, found {}",
        json_type_name(value)
    ))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
