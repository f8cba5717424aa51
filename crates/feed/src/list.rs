use quill_types::{post::Post, session::Session};
use tracing::{debug, error, info};

use crate::{
    backend::BlogBackend,
    config::FeedConfig,
    error::Error,
    paginate::{Page, Paginator},
    search::SearchQuery,
    source::BlogDataSource,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ListView<'a> {
    pub posts: Vec<&'a Post>,
    pub page: usize,
    pub has_more: bool,
    pub total_matches: usize,
}

impl<'a> ListView<'a> {
    fn from_page(page: Page<'_, &'a Post>, total_matches: usize) -> Self {
        ListView {
            posts: page.items.to_vec(),
            page: page.number,
            has_more: page.has_more,
            total_matches,
        }
    }
}

/// State behind the public blog list: the fetched posts, the active search
/// and the current page. Views are recomputed from the posts on every call.
#[derive(Debug)]
pub struct BlogList {
    posts: Vec<Post>,
    query: SearchQuery,
    page: usize,
    paginator: Paginator,
}

impl BlogList {
    const FIRST_PAGE: usize = 1;

    pub fn new(posts: Vec<Post>, cfg: &FeedConfig) -> Self {
        Self {
            posts,
            query: SearchQuery::default(),
            page: Self::FIRST_PAGE,
            paginator: Paginator::new(cfg.page_size),
        }
    }

    pub fn from_source(source: BlogDataSource, cfg: &FeedConfig) -> Self {
        Self::new(source.into_posts(), cfg)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Replaces the active search. The page is left alone.
    pub fn set_query(&mut self, raw: &str) {
        debug!("Search query set to {:?}", raw);
        self.query = SearchQuery::new(raw);
    }

    pub fn reset_page(&mut self) {
        self.page = Self::FIRST_PAGE;
    }

    pub fn matches(&self) -> Vec<&Post> {
        self.query.filter(&self.posts)
    }

    /// The current page of matching posts.
    pub fn view(&self) -> ListView<'_> {
        let matches = self.matches();
        ListView::from_page(self.paginator.page(matches.as_slice(), self.page), matches.len())
    }

    /// Every matching post up to the end of the current page.
    pub fn revealed(&self) -> ListView<'_> {
        let matches = self.matches();
        ListView::from_page(self.paginator.revealed(matches.as_slice(), self.page), matches.len())
    }

    /// Moves to the next page if there is one.
    pub fn load_more(&mut self) -> bool {
        if self.view().has_more {
            self.page += 1;
            true
        } else {
            false
        }
    }

    /// Toggles the caller's like on `post_id`. On success the post's like set
    /// is replaced with the server's and the new membership is returned. On
    /// failure nothing changes.
    pub async fn toggle_like<B: BlogBackend>(
        &mut self,
        backend: &B,
        session: &Session,
        post_id: &str,
    ) -> Result<bool, Error> {
        let user_id = match session.user_id() {
            Some(id) if session.is_authenticated() => id.to_string(),
            _ => return Err(Error::Unauthenticated),
        };
        let index = self
            .posts
            .iter()
            .position(|p| p.id == post_id)
            .ok_or_else(|| Error::PostNotFound(post_id.to_string()))?;
        match backend.toggle_like(session, post_id).await {
            Ok(likes) => {
                let post = &mut self.posts[index];
                post.likes = likes;
                let liked = post.is_liked_by(&user_id);
                info!("Post {} liked by {}: {}", post_id, user_id, liked);
                Ok(liked)
            }
            Err(e) => {
                error!("Error toggling like on {}: {}", post_id, e);
                Err(e.into())
            }
        }
    }
}
