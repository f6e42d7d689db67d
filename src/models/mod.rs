pub mod body;
pub mod posts;
