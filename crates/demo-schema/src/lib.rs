// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

//! The fixed schema served by the process.
//!
//! The schema is built once at startup and shared, read-only, by every request.

use async_graphql::Value as GqlValue;
use async_graphql::dynamic::{Field, FieldFuture, InputValue, Object, Schema, SchemaError, TypeRef};
use tracing::trace;

const QUERY_TYPE: &str = "Query";

pub fn build_schema() -> Result<Schema, SchemaError> {
    let query = Object::new(QUERY_TYPE)
        .description("Entry points of the demo schema")
        .field(hello_field())
        .field(greeting_field())
        .field(add_field())
        .field(echo_field());

    Schema::build(QUERY_TYPE, None, None)
        .register(query)
        .finish()
}

fn hello_field() -> Field {
    Field::new("hello", TypeRef::named_nn(TypeRef::STRING), |_| {
        FieldFuture::new(async { Ok(Some(GqlValue::from("world"))) })
    })
}

fn greeting_field() -> Field {
    Field::new("greeting", TypeRef::named_nn(TypeRef::STRING), |ctx| {
        FieldFuture::new(async move {
            let name = ctx.args.try_get("name")?.string()?.to_string();
            let punctuation = match ctx.args.get("punctuation") {
                Some(punctuation) => punctuation.string()?.to_string(),
                None => "!".to_string(),
            };
            trace!(%name, %punctuation, "resolving greeting");

            Ok(Some(GqlValue::from(format!("Hello, {name}{punctuation}"))))
        })
    })
    .argument(InputValue::new("name", TypeRef::named_nn(TypeRef::STRING)))
    .argument(
        InputValue::new("punctuation", TypeRef::named(TypeRef::STRING))
            .default_value(GqlValue::from("!")),
    )
}

fn add_field() -> Field {
    Field::new("add", TypeRef::named_nn(TypeRef::INT), |ctx| {
        FieldFuture::new(async move {
            let a = ctx.args.try_get("a")?.i64()?;
            let b = ctx.args.try_get("b")?.i64()?;

            // GraphQL `Int` is a signed 32-bit integer
            let sum = i32::try_from(a + b).map_err(|_| "Integer overflow")?;
            Ok(Some(GqlValue::from(sum)))
        })
    })
    .argument(InputValue::new("a", TypeRef::named_nn(TypeRef::INT)))
    .argument(InputValue::new("b", TypeRef::named_nn(TypeRef::INT)))
}

fn echo_field() -> Field {
    Field::new("echo", TypeRef::named(TypeRef::STRING), |ctx| {
        FieldFuture::new(async move {
            match ctx.args.get("message") {
                Some(message) if !message.is_null() => {
                    Ok(Some(GqlValue::from(message.string()?.to_string())))
                }
                _ => Ok(None),
            }
        })
    })
    .argument(InputValue::new("message", TypeRef::named(TypeRef::STRING)))
}
