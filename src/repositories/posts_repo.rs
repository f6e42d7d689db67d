use async_trait::async_trait;
use chrono::Utc;

use crate::{
    models::posts::{NewPost, Post, PostId},
    Error, Result,
};

use super::InMemoryRepo;

#[async_trait]
pub trait PostsRepository: Sync + Send {
    async fn get_posts(&self) -> Vec<Post>;
    async fn create_post(&self, new_post: NewPost) -> Post;
    async fn update_post(&self, post: Post) -> Result<Post>;
    /// Returns whether a post was removed.
    async fn delete_post(&self, post_id: PostId) -> bool;
}

pub fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

#[async_trait]
impl PostsRepository for InMemoryRepo {
    async fn get_posts(&self) -> Vec<Post> {
        self.table.read().await.posts.clone()
    }

    async fn create_post(&self, new_post: NewPost) -> Post {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let post = Post {
            id: table.last_id,
            title: new_post.title,
            content: new_post.content,
            author: new_post.author,
            publish_date: new_post.publish_date.unwrap_or_else(today),
        };
        table.posts.push(post.clone());
        post
    }

    async fn update_post(&self, post: Post) -> Result<Post> {
        let mut table = self.table.write().await;
        let stored = table
            .posts
            .iter_mut()
            .find(|stored| stored.id == post.id)
            .ok_or_else(|| Error::NotFound(format!("Post {} not found", post.id)))?;

        stored.title = post.title;
        stored.content = post.content;
        stored.author = post.author;
        stored.publish_date = post.publish_date;
        Ok(stored.clone())
    }

    async fn delete_post(&self, post_id: PostId) -> bool {
        let mut table = self.table.write().await;
        let before = table.posts.len();
        table.posts.retain(|post| post.id != post_id);
        table.posts.len() != before
    }
}
