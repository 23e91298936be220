// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! Provides core functionality for handling incoming GraphQL requests without depending
//! on any specific web framework.
//!
//! A request flows through four stages:
//! - extraction of a [QueryRequest] from the query string (GET) or the JSON body (POST)
//! - decoding of URL-supplied variables
//! - execution through a [QueryExecutor]
//! - mapping of the outcome to a [common::http::ResponsePayload]

mod error;
mod executor;
mod graphql_router;
mod query_request;
mod response;
mod variables;

pub use error::{ExecutionFault, RequestError, ResolutionError};
pub use executor::{ExecutionInput, ExecutionResult, QueryExecutor, execute_query};
pub use graphql_router::GraphQLRouter;
pub use query_request::QueryRequest;
pub use response::to_response;
pub use variables::decode_variables;

/// Media type registered for GraphQL documents.
///
/// Responses are always serialized as `application/json`, even when a client asks for this type.
pub const GRAPHQL_MEDIA_TYPE: &str = "application/graphql";
