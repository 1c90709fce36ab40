//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod post_repository;
mod posts_command;
mod posts_query;
mod stats_query;
mod user_repository;
mod users_command;

#[cfg(test)]
pub use post_repository::MockPostRepository;
pub use post_repository::{PostPersistenceError, PostRepository};
pub use posts_command::PostsCommand;
pub use posts_query::PostsQuery;
pub use stats_query::StatsQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
pub use users_command::UsersCommand;
