// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use thiserror::Error;

/// A problem with the request itself, detected before the query reaches the engine.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("Missing required parameter 'query'")]
    MissingQuery,

    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    #[error("Malformed variables: {0}")]
    MalformedVariables(String),
}

/// The execution machinery failed without producing a result.
///
/// Query-level failures (syntax, validation, resolver errors) are not faults: the engine reports
/// them inside [crate::ExecutionResult::errors].
#[derive(Error, Debug)]
pub enum ExecutionFault {
    #[error("Query execution panicked: {0}")]
    Panicked(String),

    #[error("Could not serialize the execution result: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Reported by executors whose engine can fail outright (for example, a remote engine).
    #[error("{0}")]
    Engine(String),
}

#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Execution(#[from] ExecutionFault),
}
