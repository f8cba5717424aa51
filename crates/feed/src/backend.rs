use std::future::Future;

use quill_api::{client::Client, error::Error};
use quill_types::{
    category::CategoryStat,
    post::{Post, PostStatus},
    session::Session,
    stats::UserStats,
};

/// The calls the list pipeline makes against the blog backend.
pub trait BlogBackend: Send + Sync {
    fn list_published(&self, limit: usize) -> impl Future<Output = Result<Vec<Post>, Error>> + Send;

    /// Returns the post's like set after toggling the caller's membership.
    fn toggle_like(
        &self,
        session: &Session,
        post_id: &str,
    ) -> impl Future<Output = Result<Vec<String>, Error>> + Send;

    fn category_stats(&self) -> impl Future<Output = Result<Vec<CategoryStat>, Error>> + Send;

    fn user_stats(&self, session: &Session) -> impl Future<Output = Result<UserStats, Error>> + Send;
}

impl BlogBackend for Client {
    async fn list_published(&self, limit: usize) -> Result<Vec<Post>, Error> {
        self.get_blogs(limit, PostStatus::Published).await
    }

    async fn toggle_like(&self, session: &Session, post_id: &str) -> Result<Vec<String>, Error> {
        Client::toggle_like(self, session, post_id).await
    }

    async fn category_stats(&self) -> Result<Vec<CategoryStat>, Error> {
        Client::category_stats(self).await
    }

    async fn user_stats(&self, session: &Session) -> Result<UserStats, Error> {
        Client::user_stats(self, session).await
    }
}
