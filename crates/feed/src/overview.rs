use quill_types::{
    category::{CategoryStat, Icon},
    session::Session,
    stats::UserStats,
};
use tracing::debug;

use crate::{backend::BlogBackend, error::Error};

/// Dashboard numbers: posts per category, and the caller's own totals when
/// signed in.
#[derive(Debug, Clone, PartialEq)]
pub struct Overview {
    pub categories: Vec<CategoryStat>,
    pub user: Option<UserStats>,
}

impl Overview {
    pub async fn fetch<B: BlogBackend>(backend: &B, session: &Session) -> Result<Self, Error> {
        if !session.is_authenticated() {
            debug!("Fetching category overview for anonymous session");
            return Ok(Self {
                categories: backend.category_stats().await?,
                user: None,
            });
        }
        let (categories, user) =
            futures::try_join!(backend.category_stats(), backend.user_stats(session))?;
        Ok(Self {
            categories,
            user: Some(user),
        })
    }

    pub fn total_posts(&self) -> u64 {
        self.categories.iter().map(|c| c.count).sum()
    }

    /// Category name, icon and count, largest first. Ties keep server order.
    pub fn ranked(&self) -> Vec<(&str, Icon, u64)> {
        let mut ranked: Vec<(&str, Icon, u64)> = self
            .categories
            .iter()
            .map(|c| (c.category.as_str(), c.icon(), c.count))
            .collect();
        ranked.sort_by(|a, b| b.2.cmp(&a.2));
        ranked
    }
}
