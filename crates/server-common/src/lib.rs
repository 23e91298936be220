// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use common::logging_tracing;
use gql_env::Environment;
use system_router::{SystemLoadingError, SystemRouter, create_system_router};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerInitError {
    #[error(transparent)]
    SystemLoading(#[from] SystemLoadingError),
}

/// Initialize the server by:
/// - Initializing tracing
/// - Creating the system router (and returning it)
///
/// Must be called before the server starts accepting connections, so that the schema is
/// fully built before the first request arrives.
pub fn init(env: Arc<dyn Environment>) -> Result<SystemRouter, ServerInitError> {
    logging_tracing::init();

    Ok(create_system_router(env)?)
}
