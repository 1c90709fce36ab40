//! Test doubles for inbound HTTP handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::ports::{PostsCommand, PostsQuery, StatsQuery, UsersCommand};
use crate::domain::{
    Author, DUPLICATE_USER_MESSAGE, Error, NewPost, NewUser, Post, PostId, PostWithAuthor, User,
    UserId, no_posts_message, unknown_user_message,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{configure_api, json_config};

/// In-memory blog implementing every driving port.
///
/// Each insert advances a fake clock by one minute so ordering is
/// deterministic. Set `failure` to make every call return that error.
#[derive(Default)]
pub struct InMemoryBlog {
    inner: Mutex<Store>,
}

#[derive(Default)]
struct Store {
    users: Vec<User>,
    posts: Vec<Post>,
    minutes: i64,
    failure: Option<Error>,
}

impl Store {
    fn tick(&mut self) -> NaiveDateTime {
        self.minutes += 1;
        base_time() + chrono::Duration::minutes(self.minutes)
    }

    fn check(&self) -> Result<(), Error> {
        self.failure.clone().map_or(Ok(()), Err)
    }

    fn entry(&self, post: &Post) -> Option<PostWithAuthor> {
        let user = self.users.iter().find(|user| user.id() == post.user_id)?;
        Some(PostWithAuthor {
            post: post.clone(),
            author: Author {
                user_id: user.id(),
                username: user.username().clone(),
                email: user.email().cloned(),
            },
        })
    }

    fn listing(&self, filter: impl Fn(&Post) -> bool) -> Vec<PostWithAuthor> {
        let mut entries: Vec<_> = self
            .posts
            .iter()
            .filter(|post| filter(post))
            .filter_map(|post| self.entry(post))
            .collect();
        entries.sort_by(|a, b| {
            (b.post.created_at, b.post.id).cmp(&(a.post.created_at, a.post.id))
        });
        entries
    }
}

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .unwrap_or_default()
}

impl InMemoryBlog {
    /// Empty blog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: Error) {
        self.lock().failure = Some(error);
    }

    fn lock(&self) -> MutexGuard<'_, Store> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UsersCommand for InMemoryBlog {
    async fn create_user(&self, user: NewUser) -> Result<User, Error> {
        let mut store = self.lock();
        store.check()?;
        let taken = store.users.iter().any(|existing| {
            existing.username() == user.username()
                || (user.email().is_some() && existing.email() == user.email())
        });
        if taken {
            return Err(Error::conflict(DUPLICATE_USER_MESSAGE));
        }
        let id = UserId::new(i64::try_from(store.users.len()).unwrap_or_default() + 1);
        let created_at = store.tick();
        let stored = User::new(id, user.username().clone(), user.email().cloned(), created_at);
        store.users.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl PostsCommand for InMemoryBlog {
    async fn create_post(&self, post: NewPost) -> Result<Post, Error> {
        let mut store = self.lock();
        store.check()?;
        if !store.users.iter().any(|user| user.id() == post.user_id()) {
            return Err(Error::not_found(unknown_user_message(post.user_id())));
        }
        let id = PostId::new(i64::try_from(store.posts.len()).unwrap_or_default() + 1);
        let created_at = store.tick();
        let stored = Post {
            id,
            user_id: post.user_id(),
            title: post.title().to_owned(),
            content: post.content().to_owned(),
            created_at,
            updated_at: created_at,
        };
        store.posts.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl PostsQuery for InMemoryBlog {
    async fn list_posts(&self) -> Result<Vec<PostWithAuthor>, Error> {
        let store = self.lock();
        store.check()?;
        Ok(store.listing(|_| true))
    }

    async fn list_user_posts(&self, user_id: UserId) -> Result<Vec<PostWithAuthor>, Error> {
        let store = self.lock();
        store.check()?;
        let entries = store.listing(|post| post.user_id == user_id);
        if entries.is_empty() {
            return Err(Error::not_found(no_posts_message(user_id)));
        }
        Ok(entries)
    }
}

#[async_trait]
impl StatsQuery for InMemoryBlog {
    async fn total_bloggers(&self) -> Result<i64, Error> {
        let store = self.lock();
        store.check()?;
        Ok(i64::try_from(store.users.len()).unwrap_or_default())
    }

    async fn total_posts(&self) -> Result<i64, Error> {
        let store = self.lock();
        store.check()?;
        Ok(i64::try_from(store.posts.len()).unwrap_or_default())
    }
}

/// App serving the blog API over `blog`, as mounted by the server.
pub fn test_app(
    blog: Arc<InMemoryBlog>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::from_shared(blog)))
        .app_data(json_config())
        .wrap(crate::Trace)
        .configure(configure_api)
}
