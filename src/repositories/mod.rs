use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::posts::{Post, PostId};

pub mod posts_repo;

#[derive(Debug)]
struct PostTable {
    last_id: PostId,
    posts: Vec<Post>,
}

/// Process-lifetime post store. Clones share the same table.
#[derive(Clone)]
pub struct InMemoryRepo {
    table: Arc<RwLock<PostTable>>,
}

impl InMemoryRepo {
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(PostTable {
                last_id: 0,
                posts: Vec::new(),
            })),
        }
    }
}

impl Default for InMemoryRepo {
    fn default() -> Self {
        Self::new()
    }
}
