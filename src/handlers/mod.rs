pub mod pages;
pub mod posts;
