// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ApiErrorCode {
    DirectorNotFound,
    ActorNotFound,
    EmptyPersonName,
    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>, details: Value) -> Self {
        Self {
            code,
            message: message.into(),
            details,
        }
    }

    #[must_use]
    pub fn director_not_found(name: &str) -> Self {
        Self::new(
            ApiErrorCode::DirectorNotFound,
            "director not found",
            json!({"name": name}),
        )
    }

    #[must_use]
    pub fn actor_not_found(name: &str) -> Self {
        Self::new(
            ApiErrorCode::ActorNotFound,
            "actor not found",
            json!({"name": name}),
        )
    }

    #[must_use]
    pub fn empty_person_name() -> Self {
        Self::new(
            ApiErrorCode::EmptyPersonName,
            "person name must not be empty",
            json!({}),
        )
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Internal, message, json!({}))
    }
}

const _: fn() = || {
    fn assert_traits<T: Serialize + for<'de> Deserialize<'de>>() {}
    assert_traits::<ApiErrorCode>();
};
