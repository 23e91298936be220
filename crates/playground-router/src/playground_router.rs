// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use async_trait::async_trait;
use common::http::{Headers, RequestHead, RequestPayload, ResponseBody, ResponsePayload};
use common::router::Router;
use common::{env_const::get_playground_http_path, http::strip_leading_slash};
use gql_env::Environment;
use http::StatusCode;

use crate::playground;

pub struct PlaygroundRouterConfig {
    playground_path: String,
    env: Arc<dyn Environment>,
}

impl PlaygroundRouterConfig {
    pub fn new(env: Arc<dyn Environment>) -> Self {
        Self {
            playground_path: strip_leading_slash(&get_playground_http_path(env.as_ref())),
            env,
        }
    }

    pub fn suitable(&self, request_path: &str, request_method: http::Method) -> bool {
        strip_leading_slash(request_path) == self.playground_path
            && request_method == http::Method::GET
    }
}

/// Serves the GraphiQL explorer page.
pub struct PlaygroundRouter {
    config: Arc<PlaygroundRouterConfig>,
}

impl PlaygroundRouter {
    pub fn new(config: Arc<PlaygroundRouterConfig>) -> Self {
        Self { config }
    }

    fn suitable(&self, request_head: &(dyn RequestHead + Send + Sync)) -> bool {
        self.config
            .suitable(&request_head.get_path(), request_head.get_method())
    }
}

#[async_trait]
impl Router for PlaygroundRouter {
    async fn route(&self, request: &mut (dyn RequestPayload + Send)) -> Option<ResponsePayload> {
        if !self.suitable(request.get_head()) {
            return None;
        }

        match playground::index_html(self.config.env.as_ref()) {
            Ok(html) => Some(ResponsePayload {
                body: ResponseBody::Bytes(html),
                // we shouldn't cache the index page, as we substitute in the endpoint path dynamically
                headers: Headers::from_vec(vec![
                    (
                        http::header::CONTENT_TYPE.to_string(),
                        "text/html; charset=utf-8".to_string(),
                    ),
                    (
                        http::header::CACHE_CONTROL.to_string(),
                        "no-cache".to_string(),
                    ),
                ]),
                status_code: StatusCode::OK,
            }),
            Err(err) => {
                tracing::error!("Error rendering playground page: {}", err);
                Some(ResponsePayload::empty(StatusCode::INTERNAL_SERVER_ERROR))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use gql_env::MapEnvironment;

    use super::*;

    struct TestRequest {
        method: http::Method,
        path: &'static str,
    }

    impl RequestHead for TestRequest {
        fn get_headers(&self, _key: &str) -> Vec<String> {
            vec![]
        }

        fn get_path(&self) -> String {
            self.path.to_string()
        }

        fn get_query_string(&self) -> String {
            String::new()
        }

        fn get_method(&self) -> http::Method {
            self.method.clone()
        }
    }

    impl RequestPayload for TestRequest {
        fn get_head(&self) -> &(dyn RequestHead + Send + Sync) {
            self
        }

        fn take_body(&mut self) -> Bytes {
            Bytes::new()
        }
    }

    fn router(env: MapEnvironment) -> PlaygroundRouter {
        PlaygroundRouter::new(Arc::new(PlaygroundRouterConfig::new(Arc::new(env))))
    }

    #[tokio::test]
    async fn serves_page_at_root() {
        let router = router(MapEnvironment::new());

        for path in ["/", ""] {
            let mut request = TestRequest {
                method: http::Method::GET,
                path,
            };
            let response = router.route(&mut request).await.unwrap();

            assert_eq!(response.status_code, StatusCode::OK);
            assert_eq!(
                response.headers.get("content-type").as_deref(),
                Some("text/html; charset=utf-8")
            );
            let html = String::from_utf8_lossy(response.body.as_bytes());
            assert!(html.contains(r#""graphqlHttpPath":"/graphql""#));
        }
    }

    #[tokio::test]
    async fn declines_other_requests() {
        let router = router(MapEnvironment::new());

        for (method, path) in [
            (http::Method::POST, "/"),
            (http::Method::GET, "/graphql"),
            (http::Method::GET, "/index.html"),
        ] {
            let mut request = TestRequest { method, path };
            assert!(router.route(&mut request).await.is_none(), "for {path}");
        }
    }

    #[tokio::test]
    async fn configured_path() {
        let router = router(MapEnvironment::from([("GQL_PLAYGROUND_HTTP_PATH", "/explorer")]));

        let mut request = TestRequest {
            method: http::Method::GET,
            path: "/explorer",
        };
        assert!(router.route(&mut request).await.is_some());

        let mut request = TestRequest {
            method: http::Method::GET,
            path: "/",
        };
        assert!(router.route(&mut request).await.is_none());
    }
}
