//! Post handlers.
//!
//! ```text
//! POST /api/posts {"user_id":1,"title":"Hello","content":"World"}
//! GET /api/posts
//! GET /api/users/{user_id}/posts
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::NaiveDateTime;
use serde::de::{self, Deserializer, Unexpected};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::{
    Error, NewPost, Post, PostValidationError, PostWithAuthor, UserId, no_posts_message,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/posts`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct CreatePostRequest {
    /// Author; must reference an existing user. A numeric string such as
    /// `"1"` is accepted, and a blank string counts as absent.
    #[serde(default, deserialize_with = "id_or_numeric_string")]
    #[schema(example = 1)]
    pub user_id: Option<i64>,
    #[serde(default)]
    #[schema(example = "Hello")]
    pub title: Option<String>,
    #[serde(default)]
    #[schema(example = "First post")]
    pub content: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IdField {
    Number(i64),
    Text(String),
}

fn id_or_numeric_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<IdField>::deserialize(deserializer)? {
        None => Ok(None),
        Some(IdField::Number(id)) => Ok(Some(id)),
        Some(IdField::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse().map(Some).map_err(|_| {
                de::Error::invalid_value(Unexpected::Str(&text), &"an integer user id")
            })
        }
    }
}

/// Response body for a created post.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatePostResponse {
    #[schema(example = "Post created successfully")]
    pub message: String,
    pub post_id: i64,
    pub user_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Post> for CreatePostResponse {
    fn from(post: Post) -> Self {
        Self {
            message: "Post created successfully".to_owned(),
            post_id: post.id.get(),
            user_id: post.user_id.get(),
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Feed entry: a post with its author's columns.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FeedPostResponse {
    pub post_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub user_id: i64,
    pub username: String,
    pub email: Option<String>,
}

impl From<PostWithAuthor> for FeedPostResponse {
    fn from(PostWithAuthor { post, author }: PostWithAuthor) -> Self {
        Self {
            post_id: post.id.get(),
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
            user_id: author.user_id.get(),
            username: author.username.into(),
            email: author.email.map(Into::into),
        }
    }
}

/// One of a user's posts, labelled with the username.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserPostResponse {
    pub post_id: i64,
    pub title: String,
    pub content: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub username: String,
}

impl From<PostWithAuthor> for UserPostResponse {
    fn from(PostWithAuthor { post, author }: PostWithAuthor) -> Self {
        Self {
            post_id: post.id.get(),
            title: post.title,
            content: post.content,
            created_at: post.created_at,
            updated_at: post.updated_at,
            username: author.username.into(),
        }
    }
}

fn map_post_validation_error(err: PostValidationError) -> Error {
    let message = err.to_string();
    match err {
        PostValidationError::MissingFields { fields } => {
            Error::invalid_request(message).with_details(json!({ "fields": fields }))
        }
    }
}

/// Publish a post.
#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created", body = CreatePostResponse),
        (status = 400, description = "Missing field or malformed body", body = Error),
        (status = 404, description = "Author does not exist", body = Error),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["posts"],
    operation_id = "createPost"
)]
#[post("/posts")]
pub async fn create_post(
    state: web::Data<HttpState>,
    payload: web::Json<CreatePostRequest>,
) -> ApiResult<HttpResponse> {
    let CreatePostRequest {
        user_id,
        title,
        content,
    } = payload.into_inner();
    let new_post = NewPost::try_from_parts(user_id, title.as_deref(), content.as_deref())
        .map_err(map_post_validation_error)?;
    let post = state.posts.create_post(new_post).await?;
    Ok(HttpResponse::Created().json(CreatePostResponse::from(post)))
}

/// Every post with its author, newest first.
#[utoipa::path(
    get,
    path = "/api/posts",
    responses(
        (status = 200, description = "All posts", body = [FeedPostResponse]),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["posts"],
    operation_id = "listPosts"
)]
#[get("/posts")]
pub async fn list_posts(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<FeedPostResponse>>> {
    let posts = state.posts_query.list_posts().await?;
    Ok(web::Json(posts.into_iter().map(Into::into).collect()))
}

/// One user's posts, newest first.
///
/// A user without posts and an unknown user both yield 404, as does a
/// non-numeric id.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/posts",
    params(("user_id" = i64, Path, description = "Author identifier")),
    responses(
        (status = 200, description = "The user's posts", body = [UserPostResponse]),
        (status = 404, description = "No posts for this user, or no such user", body = Error),
        (status = 500, description = "Storage failure", body = Error)
    ),
    tags = ["posts"],
    operation_id = "listUserPosts"
)]
#[get("/users/{user_id}/posts")]
pub async fn list_user_posts(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<UserPostResponse>>> {
    let raw = path.into_inner();
    let user_id = raw
        .parse::<i64>()
        .map(UserId::new)
        .map_err(|_| Error::not_found(no_posts_message(&raw)))?;
    let posts = state.posts_query.list_user_posts(user_id).await?;
    Ok(web::Json(posts.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewUser;
    use crate::domain::ports::UsersCommand;
    use crate::inbound::http::test_utils::{InMemoryBlog, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use rstest::{fixture, rstest};
    use serde_json::Value;
    use std::sync::Arc;

    #[fixture]
    async fn blog_with_users() -> Arc<InMemoryBlog> {
        let blog = Arc::new(InMemoryBlog::new());
        for name in ["ada", "grace"] {
            let email = format!("{name}@example.com");
            let user =
                NewUser::try_from_parts(Some(name), Some(email.as_str())).expect("valid user");
            blog.create_user(user).await.expect("user created");
        }
        blog
    }

    async fn call(blog: Arc<InMemoryBlog>, request: actix_test::TestRequest) -> (StatusCode, Value) {
        let app = actix_test::init_service(test_app(blog)).await;
        let response = actix_test::call_service(&app, request.to_request()).await;
        let status = response.status();
        (status, actix_test::read_body_json(response).await)
    }

    async fn publish(blog: &Arc<InMemoryBlog>, user_id: i64, title: &str) -> (StatusCode, Value) {
        call(
            blog.clone(),
            actix_test::TestRequest::post()
                .uri("/api/posts")
                .set_json(json!({ "user_id": user_id, "title": title, "content": "Body" })),
        )
        .await
    }

    #[rstest]
    #[actix_web::test]
    async fn creates_post_for_existing_user(#[future] blog_with_users: Arc<InMemoryBlog>) {
        let blog = blog_with_users.await;
        let (status, body) = publish(&blog, 1, "Hello").await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], "Post created successfully");
        assert_eq!(body["post_id"], 1);
        assert_eq!(body["user_id"], 1);
        assert_eq!(body["title"], "Hello");
        assert_eq!(body["created_at"], body["updated_at"]);
    }

    #[rstest]
    #[actix_web::test]
    async fn unknown_author_is_not_found(#[future] blog_with_users: Arc<InMemoryBlog>) {
        let (status, body) = publish(&blog_with_users.await, 999_999, "Hello").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "User with ID 999999 not found.");
    }

    #[rstest]
    #[case(json!("1"), 1)]
    #[case(json!(" 2 "), 2)]
    #[actix_web::test]
    async fn numeric_string_author_is_accepted(
        #[future] blog_with_users: Arc<InMemoryBlog>,
        #[case] user_id: Value,
        #[case] expected: i64,
    ) {
        let (status, body) = call(
            blog_with_users.await,
            actix_test::TestRequest::post()
                .uri("/api/posts")
                .set_json(json!({ "user_id": user_id, "title": "Hello", "content": "Body" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["user_id"], expected);
    }

    #[rstest]
    #[actix_web::test]
    async fn non_numeric_author_is_a_bad_request() {
        let (status, _) = call(
            Arc::new(InMemoryBlog::new()),
            actix_test::TestRequest::post()
                .uri("/api/posts")
                .set_json(json!({ "user_id": "ada", "title": "t", "content": "c" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[rstest]
    #[case(json!({ "title": "t", "content": "c" }), json!(["user_id"]))]
    #[case(json!({ "user_id": "", "title": "t", "content": "c" }), json!(["user_id"]))]
    #[case(json!({ "user_id": 1, "title": "", "content": "c" }), json!(["title"]))]
    #[case(json!({ "user_id": 1, "title": "t" }), json!(["content"]))]
    #[actix_web::test]
    async fn missing_fields_are_rejected(#[case] body: Value, #[case] fields: Value) {
        let (status, body) = call(
            Arc::new(InMemoryBlog::new()),
            actix_test::TestRequest::post().uri("/api/posts").set_json(body),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "User ID, title, and content are required.");
        assert_eq!(body["details"]["fields"], fields);
    }

    #[rstest]
    #[actix_web::test]
    async fn feed_is_newest_first_with_author(#[future] blog_with_users: Arc<InMemoryBlog>) {
        let blog = blog_with_users.await;
        publish(&blog, 1, "first").await;
        publish(&blog, 2, "second").await;

        let (status, body) = call(blog, actix_test::TestRequest::get().uri("/api/posts")).await;

        assert_eq!(status, StatusCode::OK);
        let titles: Vec<_> = body
            .as_array()
            .expect("array body")
            .iter()
            .map(|entry| entry["title"].as_str().expect("title"))
            .collect();
        assert_eq!(titles, vec!["second", "first"]);
        assert_eq!(body[0]["username"], "grace");
        assert_eq!(body[0]["email"], "grace@example.com");
        assert_eq!(body[0]["user_id"], 2);
    }

    #[rstest]
    #[actix_web::test]
    async fn empty_feed_is_an_empty_array() {
        let (status, body) = call(
            Arc::new(InMemoryBlog::new()),
            actix_test::TestRequest::get().uri("/api/posts"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[rstest]
    #[actix_web::test]
    async fn user_listing_has_username_only(#[future] blog_with_users: Arc<InMemoryBlog>) {
        let blog = blog_with_users.await;
        publish(&blog, 1, "mine").await;
        publish(&blog, 2, "theirs").await;

        let (status, body) = call(blog, actix_test::TestRequest::get().uri("/api/users/1/posts")).await;

        assert_eq!(status, StatusCode::OK);
        let entries = body.as_array().expect("array body");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0]["title"], "mine");
        assert_eq!(entries[0]["username"], "ada");
        assert!(entries[0].get("email").is_none());
        assert!(entries[0].get("user_id").is_none());
    }

    #[rstest]
    #[case("/api/users/2/posts", "No posts found for user ID 2, or user does not exist.")]
    #[case("/api/users/42/posts", "No posts found for user ID 42, or user does not exist.")]
    #[case("/api/users/abc/posts", "No posts found for user ID abc, or user does not exist.")]
    #[actix_web::test]
    async fn user_listing_without_posts_is_not_found(
        #[future] blog_with_users: Arc<InMemoryBlog>,
        #[case] uri: &str,
        #[case] message: &str,
    ) {
        let (status, body) = call(blog_with_users.await, actix_test::TestRequest::get().uri(uri)).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "not_found");
        assert_eq!(body["message"], message);
    }
}
