// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use actix_web::{App, HttpServer, middleware, web};

use server_actix::configure_router;
use thiserror::Error;
use tracing_actix_web::TracingLogger;

use std::net::SocketAddr;
use std::time::Instant;
use std::{io::ErrorKind, sync::Arc};

use common::env_const::{
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, GQL_ENABLE_PLAYGROUND, GQL_SERVER_HOST,
    GQL_SERVER_PORT, get_graphql_http_path, get_max_request_body_size, get_playground_http_path,
};

use gql_env::{EnvError, Environment, SystemEnvironment, get_parsed};

#[derive(Error)]
enum ServerError {
    #[error("Port {0} is already in use. Check if there is another process running at that port.")]
    PortInUse(u16),
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    EnvError(#[from] EnvError),
    #[error("{0}")]
    ServerInitError(#[from] server_common::ServerInitError),
}

// A custom `Debug` implementation for `ServerError` (that delegate to the `Display` impl), so that
// we don't print the default `Debug` implementation's message when the server exits.
impl std::fmt::Debug for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self}")
    }
}

/// Run the GraphQL server
#[actix_web::main]
async fn main() -> Result<(), ServerError> {
    let start_time = Instant::now();

    let env: Arc<dyn Environment> = Arc::new(SystemEnvironment);

    let server_port = get_parsed(env.as_ref(), GQL_SERVER_PORT, DEFAULT_SERVER_PORT)?;
    let server_host = env.get_or_else(GQL_SERVER_HOST, DEFAULT_SERVER_HOST);
    let max_body_size = get_max_request_body_size(env.as_ref())?;

    let system_router = web::Data::new(server_common::init(env.clone())?);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .wrap(middleware::NormalizePath::new(
                middleware::TrailingSlash::Trim,
            ))
            .configure(configure_router(system_router.clone(), max_body_size))
    });

    match server.bind((server_host.as_str(), server_port)) {
        Ok(server) => {
            let pretty_addr = pretty_addr(&server.addrs());

            println!(
                "Started server on {} in {:.2} ms",
                pretty_addr,
                start_time.elapsed().as_micros() as f64 / 1000.0
            );
            println!("- GraphQL endpoint hosted at:");
            println!(
                "\thttp://{pretty_addr}{}",
                get_graphql_http_path(env.as_ref())
            );

            if env.enabled(GQL_ENABLE_PLAYGROUND, true)? {
                println!("- Playground hosted at:");
                println!(
                    "\thttp://{pretty_addr}{}",
                    get_playground_http_path(env.as_ref())
                );
            }

            Ok(server.run().await?)
        }
        Err(e) => Err(if e.kind() == ErrorKind::AddrInUse {
            ServerError::PortInUse(server_port)
        } else {
            ServerError::Io(e)
        }),
    }
}

fn pretty_addr(addrs: &[SocketAddr]) -> String {
    let loopback_addr = addrs.iter().find(|addr| addr.ip().is_loopback());

    match loopback_addr {
        Some(addr) => format!("localhost:{}", addr.port()),
        None => match addrs {
            // Print single address without square brackets
            [addr] => format!("{addr}"),
            _ => {
                format!("{addrs:?}")
            }
        },
    }
}
