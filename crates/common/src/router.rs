// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::http::{RequestPayload, ResponsePayload};
use async_trait::async_trait;
use http::StatusCode;

/// A router inspects a request and either handles it (returning `Some`) or declines (returning
/// `None`) so that another router may try.
#[async_trait]
pub trait Router: Sync {
    async fn route(&self, request: &mut (dyn RequestPayload + Send)) -> Option<ResponsePayload>;
}

pub struct CompositeRouter {
    routers: Vec<Box<dyn Router + Send + Sync>>,
}

impl CompositeRouter {
    pub fn new(routers: Vec<Box<dyn Router + Send + Sync>>) -> Self {
        Self { routers }
    }
}

#[async_trait]
impl Router for CompositeRouter {
    async fn route(&self, request: &mut (dyn RequestPayload + Send)) -> Option<ResponsePayload> {
        for router in self.routers.iter() {
            if let Some(response) = router.route(request).await {
                return Some(response);
            }
        }

        Some(ResponsePayload::empty(StatusCode::NOT_FOUND))
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::http::RequestHead;

    struct PathHead(&'static str);

    impl RequestHead for PathHead {
        fn get_headers(&self, _key: &str) -> Vec<String> {
            vec![]
        }

        fn get_path(&self) -> String {
            self.0.to_string()
        }

        fn get_query_string(&self) -> String {
            String::new()
        }

        fn get_method(&self) -> http::Method {
            http::Method::GET
        }
    }

    struct PathRequest(PathHead);

    impl RequestPayload for PathRequest {
        fn get_head(&self) -> &(dyn RequestHead + Send + Sync) {
            &self.0
        }

        fn take_body(&mut self) -> Bytes {
            Bytes::new()
        }
    }

    struct FixedPathRouter {
        path: &'static str,
        status_code: StatusCode,
    }

    #[async_trait]
    impl Router for FixedPathRouter {
        async fn route(
            &self,
            request: &mut (dyn RequestPayload + Send),
        ) -> Option<ResponsePayload> {
            (request.get_head().get_path() == self.path)
                .then(|| ResponsePayload::empty(self.status_code))
        }
    }

    fn composite() -> CompositeRouter {
        CompositeRouter::new(vec![
            Box::new(FixedPathRouter {
                path: "/a",
                status_code: StatusCode::OK,
            }),
            Box::new(FixedPathRouter {
                path: "/a",
                status_code: StatusCode::ACCEPTED,
            }),
            Box::new(FixedPathRouter {
                path: "/b",
                status_code: StatusCode::CREATED,
            }),
        ])
    }

    async fn status_for(path: &'static str) -> StatusCode {
        let mut request = PathRequest(PathHead(path));
        composite()
            .route(&mut request)
            .await
            .map(|response| response.status_code)
            .unwrap()
    }

    #[tokio::test]
    async fn first_suitable_router_wins() {
        assert_eq!(status_for("/a").await, StatusCode::OK);
        assert_eq!(status_for("/b").await, StatusCode::CREATED);
    }

    #[tokio::test]
    async fn unmatched_request_is_not_found() {
        assert_eq!(status_for("/c").await, StatusCode::NOT_FOUND);
    }
}
