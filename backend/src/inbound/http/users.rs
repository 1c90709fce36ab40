//! User registration handler.
//!
//! ```text
//! POST /api/users {"username":"ada","email":"ada@example.com"}
//! ```

use actix_web::{HttpResponse, post, web};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{Error, NewUser, User, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/users`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreateUserRequest {
    /// Required, non-blank.
    #[serde(default)]
    #[schema(example = "ada")]
    pub username: Option<String>,
    /// Optional; blank is treated as absent.
    #[serde(default)]
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
}

/// Response body for a created user.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateUserResponse {
    #[schema(example = "User created successfully")]
    pub message: String,
    pub user_id: i64,
    pub username: String,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<User> for CreateUserResponse {
    fn from(user: User) -> Self {
        Self {
            message: "User created successfully".to_owned(),
            user_id: user.id().get(),
            username: user.username().to_string(),
            email: user.email().map(|email| email.as_ref().to_owned()),
            created_at: user.created_at(),
        }
    }
}

fn map_user_validation_error(err: UserValidationError) -> Error {
    match err {
        UserValidationError::MissingUsername => {
            Error::invalid_request(err.to_string()).with_details(json!({ "field": "username" }))
        }
    }
}

/// Register a blogger.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Username missing or body malformed", body = Error),
        (status = 409, description = "Username or email already exists", body = Error),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<HttpResponse> {
    let CreateUserRequest { username, email } = payload.into_inner();
    let new_user = NewUser::try_from_parts(username.as_deref(), email.as_deref())
        .map_err(map_user_validation_error)?;
    let user = state.users.create_user(new_user).await?;
    Ok(HttpResponse::Created().json(CreateUserResponse::from(user)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{InMemoryBlog, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::rstest;
    use serde_json::Value;
    use std::sync::Arc;

    async fn post_user(blog: Arc<InMemoryBlog>, body: Value) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(blog)).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .set_json(&body)
            .to_request();
        let response = actix_test::call_service(&app, request).await;
        let status = response.status();
        (status, actix_test::read_body_json(response).await)
    }

    #[rstest]
    #[actix_web::test]
    async fn creates_user_with_assigned_id() {
        let (status, body) = post_user(
            Arc::new(InMemoryBlog::new()),
            json!({ "username": "ada", "email": "ada@example.com" }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "User created successfully");
        assert_eq!(body["user_id"], 1);
        assert_eq!(body["username"], "ada");
        assert_eq!(body["email"], "ada@example.com");
        assert!(body["created_at"].is_string());
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "username": "" }))]
    #[case(json!({ "username": "   ", "email": "x@example.com" }))]
    #[actix_web::test]
    async fn missing_username_is_rejected(#[case] body: Value) {
        let (status, body) = post_user(Arc::new(InMemoryBlog::new()), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["code"], "invalid_request");
        assert_eq!(body["message"], "Username is required");
        assert_eq!(body["details"]["field"], "username");
    }

    #[rstest]
    #[actix_web::test]
    async fn duplicate_username_conflicts() {
        let blog = Arc::new(InMemoryBlog::new());
        let (first, _) = post_user(blog.clone(), json!({ "username": "ada" })).await;
        assert_eq!(first, StatusCode::CREATED);

        let (status, body) = post_user(blog, json!({ "username": "ada" })).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["message"], "Username or email already exists.");
    }

    #[rstest]
    #[actix_web::test]
    async fn malformed_json_is_invalid_request() {
        let app = actix_test::init_service(test_app(Arc::new(InMemoryBlog::new()))).await;
        let request = actix_test::TestRequest::post()
            .uri("/api/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"username\": ")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "invalid_request");
        assert!(body["traceId"].is_string());
    }

    #[rstest]
    #[actix_web::test]
    async fn storage_failure_surfaces_raw_message() {
        let blog = Arc::new(InMemoryBlog::new());
        blog.fail_with(Error::internal("disk I/O error"));

        let (status, body) = post_user(blog, json!({ "username": "ada" })).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "disk I/O error");
    }
}
