// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod request;

use actix_web::{
    HttpRequest, HttpResponse,
    web::{self, ServiceConfig},
};
use bytes::Bytes;
use system_router::SystemRouter;

use common::http::{RequestHead, RequestPayload, ResponseBody, ResponsePayload};
use common::router::Router;
use request::ActixRequestHead;

macro_rules! error_msg {
    ($msg:literal) => {
        concat!("{\"error\":\"", $msg, "\"}").as_bytes()
    };
}

/// Register the system router as the default service.
///
/// Request bodies larger than `max_body_size` bytes are rejected with a JSON 413 response.
pub fn configure_router(
    system_router: web::Data<SystemRouter>,
    max_body_size: usize,
) -> impl FnOnce(&mut ServiceConfig) {
    move |app| {
        app.app_data(system_router)
            .app_data(web::PayloadConfig::new(max_body_size))
            .default_service(web::to(resolve));
    }
}

struct ActixRequestPayload {
    head: ActixRequestHead,
    body: Bytes,
}

impl RequestPayload for ActixRequestPayload {
    fn get_head(&self) -> &(dyn RequestHead + Send + Sync) {
        &self.head
    }

    fn take_body(&mut self) -> Bytes {
        std::mem::take(&mut self.body)
    }
}

/// Resolve any request by handing it to the system router.
async fn resolve(
    http_request: HttpRequest,
    body: Result<web::Bytes, actix_web::Error>,
    system_router: web::Data<SystemRouter>,
) -> HttpResponse {
    let body = match body {
        Ok(body) => body,
        Err(err) => return payload_error_response(&err),
    };

    let Some(head) = ActixRequestHead::from_request(&http_request) else {
        return HttpResponse::MethodNotAllowed()
            .content_type("application/json")
            .body(error_msg!("Unsupported method"));
    };

    let mut request = ActixRequestPayload { head, body };

    let response = system_router.route(&mut request).await;

    match response {
        Some(ResponsePayload {
            body,
            headers,
            status_code,
        }) => {
            let actix_status_code = match to_actix_status_code(status_code) {
                Ok(status_code) => status_code,
                Err(err) => {
                    tracing::error!("Invalid status code: {}", err);
                    return HttpResponse::InternalServerError()
                        .content_type("application/json")
                        .body(error_msg!("Invalid status code"));
                }
            };

            let mut builder = HttpResponse::build(actix_status_code);

            for header in headers.into_iter() {
                builder.append_header(header);
            }

            match body {
                ResponseBody::Bytes(bytes) => builder.body(bytes),
                ResponseBody::None => builder.finish(),
            }
        }
        None => HttpResponse::InternalServerError()
            .content_type("application/json")
            .body(error_msg!("Error resolving request")),
    }
}

fn payload_error_response(err: &actix_web::Error) -> HttpResponse {
    let status_code = err.error_response().status();
    tracing::debug!("Could not read request body: {}", err);

    if status_code == actix_web::http::StatusCode::PAYLOAD_TOO_LARGE {
        HttpResponse::PayloadTooLarge()
            .content_type("application/json")
            .body(error_msg!("Request body is too large"))
    } else {
        HttpResponse::build(status_code)
            .content_type("application/json")
            .body(error_msg!("Could not read request body"))
    }
}

fn to_actix_status_code(
    status_code: http::StatusCode,
) -> Result<actix_web::http::StatusCode, String> {
    actix_web::http::StatusCode::from_u16(status_code.as_u16())
        .map_err(|_| format!("Invalid status code {status_code}"))
}
