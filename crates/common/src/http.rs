// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use bytes::Bytes;
use http::StatusCode;

pub trait RequestPayload {
    fn get_head(&self) -> &(dyn RequestHead + Send + Sync);

    /// Take the buffered request body. Subsequent calls return an empty body.
    fn take_body(&mut self) -> Bytes;
}

#[derive(Debug, Clone, Default)]
pub struct Headers {
    inner: Vec<(String, String)>,
}

impl Headers {
    pub fn new() -> Self {
        Self { inner: vec![] }
    }

    pub fn from_vec(vec: Vec<(String, String)>) -> Self {
        let mut headers = vec![];
        for (key, value) in vec {
            headers.push((key.to_lowercase(), value));
        }
        Self { inner: headers }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner
            .iter()
            .find(|(k, _)| k == &key.to_lowercase())
            .map(|(_, v)| v.clone())
    }

    pub fn insert(&mut self, key: String, value: String) {
        self.inner.push((key.to_lowercase(), value));
    }
}

impl IntoIterator for Headers {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

#[derive(Debug)]
pub struct ResponsePayload {
    pub body: ResponseBody,
    pub headers: Headers,
    pub status_code: StatusCode,
}

impl ResponsePayload {
    /// A response carrying an already serialized JSON body.
    pub fn json(status_code: StatusCode, body: Vec<u8>) -> Self {
        Self {
            body: ResponseBody::Bytes(body),
            headers: Headers::from_vec(vec![(
                http::header::CONTENT_TYPE.to_string(),
                "application/json".to_string(),
            )]),
            status_code,
        }
    }

    pub fn empty(status_code: StatusCode) -> Self {
        Self {
            body: ResponseBody::None,
            headers: Headers::new(),
            status_code,
        }
    }
}

#[derive(Debug)]
pub enum ResponseBody {
    Bytes(Vec<u8>),
    None,
}

impl ResponseBody {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ResponseBody::Bytes(bytes) => bytes,
            ResponseBody::None => &[],
        }
    }
}

/// Represents a HTTP request from which information can be extracted
pub trait RequestHead {
    // return all header values that have the following key
    fn get_headers(&self, key: &str) -> Vec<String>;

    fn get_path(&self) -> String;

    /// The query string exactly as received (still percent-encoded), without the leading `?`
    fn get_query_string(&self) -> String;

    fn get_method(&self) -> http::Method;
}

pub fn strip_leading_slash(path: &str) -> String {
    path.strip_prefix('/').unwrap_or(path).to_string()
}
