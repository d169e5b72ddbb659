use super::Publisher;
use crate::models::PostResult;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;

pub struct LinkedInPublisher {
    pub access_token: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    #[allow(dead_code)] // Reserved for the real UGC API call
    client: Client,
}

impl LinkedInPublisher {
    pub fn new(
        access_token: Option<String>,
        client_id: Option<String>,
        client_secret: Option<String>,
    ) -> Self {
        Self {
            access_token,
            client_id,
            client_secret,
            client: Client::new(),
        }
    }
}

#[async_trait]
impl Publisher for LinkedInPublisher {
    async fn publish(&self, title: &str, _content: &str) -> Result<PostResult> {
        // TODO: post through https://api.linkedin.com/v2/ugcPosts with self.client
        log::info!("Posting to LinkedIn: {}", title);

        Ok(PostResult {
            status: "success".to_string(),
            post_url: "https://www.linkedin.com/feed/".to_string(),
        })
    }

    fn get_type(&self) -> &'static str {
        "linkedin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_are_stored_verbatim() {
        let publisher = LinkedInPublisher::new(
            Some("token".to_string()),
            None,
            Some("client-secret".to_string()),
        );

        assert_eq!(publisher.access_token.as_deref(), Some("token"));
        assert!(publisher.client_id.is_none());
        assert_eq!(publisher.client_secret.as_deref(), Some("client-secret"));
    }

    #[test]
    fn construction_never_validates_credentials() {
        let token = || Some("token".to_string());
        let id = || Some("client-id".to_string());
        let secret = || Some("client-secret".to_string());

        LinkedInPublisher::new(token(), id(), secret());
        LinkedInPublisher::new(None, id(), secret());
        LinkedInPublisher::new(token(), None, secret());
        LinkedInPublisher::new(token(), id(), None);
        LinkedInPublisher::new(None, None, None);
    }

    #[tokio::test]
    async fn publish_returns_fixed_success() {
        let publisher = LinkedInPublisher::new(
            Some("token".to_string()),
            Some("client-id".to_string()),
            Some("client-secret".to_string()),
        );

        let result = publisher.publish("T", "C").await.unwrap();
        assert_eq!(result.status, "success");
        assert_eq!(result.post_url, "https://www.linkedin.com/feed/");
    }

    #[tokio::test]
    async fn publish_ignores_its_input() {
        let publisher = LinkedInPublisher::new(None, None, None);

        let first = publisher
            .publish("My First Post", "Some content")
            .await
            .unwrap();
        let second = publisher
            .publish("A Different Post", "Entirely different content")
            .await
            .unwrap();

        assert_eq!(first, second);
    }
}
