// Copyright Exograph, Inc. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file at the root of this repository.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

mod map;

pub use map::MapEnvironment;

use std::str::FromStr;

/// Source of configuration values (typically the process environment).
pub trait Environment: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;

    fn enabled(&self, key: &str, default_value: bool) -> Result<bool, EnvError> {
        match self.get(key) {
            Some(value) => match value.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" | "enabled" | "enable" => Ok(true),
                "false" | "0" | "no" | "off" | "disabled" | "disable" => Ok(false),
                _ => Err(EnvError::InvalidBoolean {
                    key: key.to_string(),
                    value,
                }),
            },
            None => Ok(default_value),
        }
    }

    fn get_or_else(&self, key: &str, default_value: &str) -> String {
        self.get(key).unwrap_or(default_value.to_string())
    }
}

/// Parse the value of `key`, falling back to `default_value` if it is not set.
pub fn get_parsed<T: FromStr>(
    env: &dyn Environment,
    key: &str,
    default_value: T,
) -> Result<T, EnvError> {
    match env.get(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| EnvError::InvalidValue {
                key: key.to_string(),
                value,
                expected: std::any::type_name::<T>(),
            }),
        None => Ok(default_value),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error(
        "Invalid value for {key}: {value}. Expected true, 1, yes, on, enabled, enable OR false, 0, no, off, disabled, disable"
    )]
    InvalidBoolean { key: String, value: String },

    #[error("Invalid value for {key}: {value}. Expected a value of type {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_values() {
        let env = MapEnvironment::from([("ON", "Yes"), ("OFF", "disabled"), ("BAD", "maybe")]);

        assert!(env.enabled("ON", false).unwrap());
        assert!(!env.enabled("OFF", true).unwrap());
        assert!(env.enabled("MISSING", true).unwrap());
        assert!(matches!(
            env.enabled("BAD", true),
            Err(EnvError::InvalidBoolean { .. })
        ));
    }

    #[test]
    fn parsed_values() {
        let env = MapEnvironment::from([("PORT", " 9000 "), ("BAD_PORT", "70000")]);

        assert_eq!(get_parsed::<u16>(&env, "PORT", 8080).unwrap(), 9000);
        assert_eq!(get_parsed::<u16>(&env, "MISSING", 8080).unwrap(), 8080);

        let err = get_parsed::<u16>(&env, "BAD_PORT", 8080).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid value for BAD_PORT: 70000. Expected a value of type u16"
        );
    }
}
