// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use gql_env::{EnvError, Environment, get_parsed};

pub const GQL_SERVER_HOST: &str = "GQL_SERVER_HOST";
pub const GQL_SERVER_PORT: &str = "GQL_SERVER_PORT";

pub const GQL_GRAPHQL_HTTP_PATH: &str = "GQL_GRAPHQL_HTTP_PATH";
pub const GQL_PLAYGROUND_HTTP_PATH: &str = "GQL_PLAYGROUND_HTTP_PATH";

pub const GQL_ENABLE_PLAYGROUND: &str = "GQL_ENABLE_PLAYGROUND";

pub const GQL_MAX_REQUEST_BODY_SIZE: &str = "GQL_MAX_REQUEST_BODY_SIZE";

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8080;
pub const DEFAULT_MAX_REQUEST_BODY_SIZE: usize = 16 * 1024 * 1024;

pub fn get_graphql_http_path(env: &dyn Environment) -> String {
    env.get_or_else(GQL_GRAPHQL_HTTP_PATH, "/graphql")
}

pub fn get_playground_http_path(env: &dyn Environment) -> String {
    env.get_or_else(GQL_PLAYGROUND_HTTP_PATH, "/")
}

/// Upper bound, in bytes, on a buffered request body.
pub fn get_max_request_body_size(env: &dyn Environment) -> Result<usize, EnvError> {
    get_parsed(env, GQL_MAX_REQUEST_BODY_SIZE, DEFAULT_MAX_REQUEST_BODY_SIZE)
}
