use tracing::{debug, info};

use crate::{
    models::posts::{NewPost, Post, PostId},
    repositories::{posts_repo::PostsRepository, InMemoryRepo},
    Result,
};

#[derive(Clone)]
pub struct PostsService {
    repo: InMemoryRepo,
}

impl PostsService {
    pub fn new(repo: InMemoryRepo) -> Self {
        Self { repo }
    }

    /// Loads the two sample posts the site ships with.
    pub async fn seed(&self) {
        let samples = [
            (
                "Hiking Adventure",
                "Nice text about going on a hike.",
                "Amanda",
                "9/9/2017",
            ),
            (
                "IEs rock",
                "Being an IE is so much fun. I get to walk around the plant and fix things.",
                "Ashley",
                "10/01/2017",
            ),
        ];

        for (title, content, author, publish_date) in samples {
            self.repo
                .create_post(NewPost {
                    title: title.to_string(),
                    content: content.to_string(),
                    author: author.to_string(),
                    publish_date: Some(publish_date.to_string()),
                })
                .await;
        }
        info!("Seeded {} sample posts", samples.len());
    }

    pub async fn get_posts(&self) -> Vec<Post> {
        let posts = self.repo.get_posts().await;
        debug!("Listing {} posts", posts.len());

        posts
    }

    pub async fn create_post(&self, new_post: NewPost) -> Post {
        let post = self.repo.create_post(new_post).await;
        info!(id = post.id, "Created post");

        post
    }

    pub async fn update_post(&self, post: Post) -> Result<Post> {
        let post = self.repo.update_post(post).await?;
        info!(id = post.id, "Updated post");

        Ok(post)
    }

    pub async fn delete_post(&self, post_id: PostId) {
        if self.repo.delete_post(post_id).await {
            info!(id = post_id, "Deleted post");
        } else {
            debug!(id = post_id, "No post to delete");
        }
    }
}
