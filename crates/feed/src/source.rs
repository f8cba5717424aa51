use quill_types::post::Post;
use tracing::{debug, error, info};

use crate::{backend::BlogBackend, config::FeedConfig};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Loading,
    Ready(Vec<Post>),
    Failed(String),
}

/// Owns the one fetch of published posts a list view makes when it mounts.
/// A failed fetch stays failed; build a new source to try again.
#[derive(Debug)]
pub struct BlogDataSource {
    limit: usize,
    state: LoadState,
}

impl BlogDataSource {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            state: LoadState::Loading,
        }
    }

    pub async fn mount<B: BlogBackend>(backend: &B, cfg: &FeedConfig) -> Self {
        let mut source = Self::new(cfg.list_limit);
        source.load(backend).await;
        source
    }

    /// Fetches posts if nothing has been fetched yet. Later calls return the
    /// settled state without touching the network.
    pub async fn load<B: BlogBackend>(&mut self, backend: &B) -> &LoadState {
        if !self.is_loading() {
            debug!("Blog source already settled, skipping fetch");
            return &self.state;
        }
        self.state = match backend.list_published(self.limit).await {
            Ok(posts) => {
                let fetched = posts.len();
                let posts: Vec<Post> = posts.into_iter().filter(|p| p.is_published()).collect();
                if posts.len() != fetched {
                    debug!("Dropped {} unpublished posts", fetched - posts.len());
                }
                info!("Loaded {} posts", posts.len());
                LoadState::Ready(posts)
            }
            Err(e) => {
                error!("Error fetching posts: {}", e);
                LoadState::Failed(e.to_string())
            }
        };
        &self.state
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn posts(&self) -> &[Post] {
        match &self.state {
            LoadState::Ready(posts) => posts,
            _ => &[],
        }
    }

    pub fn into_posts(self) -> Vec<Post> {
        match self.state {
            LoadState::Ready(posts) => posts,
            _ => vec![],
        }
    }
}
