// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use gql_env::Environment;
use serde::Serialize;

use common::env_const::{get_graphql_http_path, get_playground_http_path};

static GRAPHIQL_HTML: &str = include_str!("../assets/graphiql.html");

const CONFIG_PLACEHOLDER: &str = "window.playgroundConfig = {}";

/// The explorer page, with the configuration for this server substituted in.
pub fn index_html(env: &dyn Environment) -> Result<Vec<u8>, serde_json::Error> {
    let playground_config = PlaygroundConfig {
        playground_http_path: get_playground_http_path(env),
        graphql_http_path: get_graphql_http_path(env),
    };

    let html = GRAPHIQL_HTML.replace(
        CONFIG_PLACEHOLDER,
        &format!(
            "window.playgroundConfig = {}",
            serde_json::to_string(&playground_config)?
        ),
    );

    Ok(html.into_bytes())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlaygroundConfig {
    playground_http_path: String,
    graphql_http_path: String,
}
