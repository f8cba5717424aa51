use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    },
};

use chrono::{DateTime, Utc};
use quill_api::error::Error;
use quill_types::{
    category::CategoryStat,
    post::{Author, Post, PostStatus},
    session::{Session, User},
    stats::UserStats,
};

use crate::backend::BlogBackend;

pub(crate) fn post(id: &str, title: &str, tags: &[&str]) -> Post {
    Post {
        id: id.to_string(),
        slug: None,
        title: title.to_string(),
        content: String::new(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category: None,
        author: Author {
            id: "a1".to_string(),
            name: "Ada Lovelace".to_string(),
        },
        likes: vec![],
        comments: vec![],
        created_at: DateTime::<Utc>::UNIX_EPOCH,
        updated_at: None,
        status: PostStatus::Published,
        thumbnail: None,
    }
}

pub(crate) fn numbered_posts(n: usize) -> Vec<Post> {
    (0..n)
        .map(|i| post(&format!("p{}", i), &format!("Post {}", i), &[]))
        .collect()
}

pub(crate) fn session(user_id: &str) -> Session {
    Session::signed_in(
        User {
            id: user_id.to_string(),
            name: "Reader".to_string(),
            email: None,
        },
        "token".to_string(),
    )
}

/// In-memory backend that behaves like the real one for the calls the
/// pipeline makes.
#[derive(Default)]
pub(crate) struct FakeBackend {
    pub posts: Vec<Post>,
    pub categories: Vec<CategoryStat>,
    pub fail: bool,
    pub calls: AtomicUsize,
    likes: Mutex<HashMap<String, Vec<String>>>,
}

impl FakeBackend {
    pub fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BlogBackend for FakeBackend {
    async fn list_published(&self, limit: usize) -> Result<Vec<Post>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::StatusCode(500));
        }
        Ok(self.posts.iter().take(limit).cloned().collect())
    }

    async fn toggle_like(&self, session: &Session, post_id: &str) -> Result<Vec<String>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::StatusCode(503));
        }
        let user_id = session.user_id().ok_or(Error::Unauthenticated)?;
        let mut likes = self.likes.lock().unwrap();
        let entry = likes.entry(post_id.to_string()).or_insert_with(|| {
            self.posts
                .iter()
                .find(|p| p.id == post_id)
                .map(|p| p.likes.clone())
                .unwrap_or_default()
        });
        if let Some(pos) = entry.iter().position(|id| id == user_id) {
            entry.remove(pos);
        } else {
            entry.push(user_id.to_string());
        }
        Ok(entry.clone())
    }

    async fn category_stats(&self) -> Result<Vec<CategoryStat>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::StatusCode(500));
        }
        Ok(self.categories.clone())
    }

    async fn user_stats(&self, session: &Session) -> Result<UserStats, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::StatusCode(500));
        }
        if session.user_id().is_none() {
            return Err(Error::Unauthenticated);
        }
        Ok(UserStats {
            total_posts: self.posts.len() as u64,
            published_posts: self.posts.iter().filter(|p| p.is_published()).count() as u64,
            ..Default::default()
        })
    }
}
