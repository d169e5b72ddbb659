use crate::models::PostResult;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Publisher: Send + Sync {
    async fn publish(&self, title: &str, content: &str) -> Result<PostResult>;
    fn get_type(&self) -> &'static str;
}

pub mod linkedin;

pub use linkedin::LinkedInPublisher;
