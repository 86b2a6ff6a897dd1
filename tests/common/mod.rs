#![allow(dead_code)]

use async_trait::async_trait;
use mockup_service::config::constant::VARIANT_SUFFIX;
use mockup_service::config::ServiceConfig;
use mockup_service::entity::mockup::InlineImage;
use mockup_service::utils::error::MockupError;
use mockup_service::utils::gemini::ImageModel;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

type Reply = Box<dyn Fn(&str) -> Result<Vec<InlineImage>, MockupError> + Send + Sync>;

/// Counts calls and records prompts; answers through a closure keyed on the prompt.
pub struct StubModel {
    calls: AtomicUsize,
    prompts: Mutex<Vec<String>>,
    base_delay: Option<Duration>,
    reply: Reply,
}

impl StubModel {
    pub fn new(
        reply: impl Fn(&str) -> Result<Vec<InlineImage>, MockupError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(vec![]),
            base_delay: None,
            reply: Box::new(reply),
        }
    }

    /// Base-prompt calls answer `BASE<n>`, variant calls answer `VARIANT<n>`.
    pub fn images_per_call(count: usize) -> Self {
        Self::new(move |prompt| {
            let tag = if is_variant(prompt) { "VARIANT" } else { "BASE" };
            Ok((0..count)
                .map(|i| InlineImage::new("image/png", format!("{}{}", tag, i)))
                .collect())
        })
    }

    pub fn failing(message: &str) -> Self {
        let message = message.to_string();
        Self::new(move |_| Err(MockupError::UpstreamCallFailed(message.clone())))
    }

    pub fn with_base_delay(mut self, delay: Duration) -> Self {
        self.base_delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

pub fn is_variant(prompt: &str) -> bool {
    prompt.ends_with(VARIANT_SUFFIX)
}

#[async_trait]
impl ImageModel for StubModel {
    async fn generate_content(
        &self,
        _image: &InlineImage,
        prompt: &str,
    ) -> Result<Vec<InlineImage>, MockupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        if let Some(delay) = self.base_delay {
            if !is_variant(prompt) {
                tokio::time::sleep(delay).await;
            }
        }
        (self.reply)(prompt)
    }
}

pub fn test_config() -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.server.addr = "127.0.0.1".into();
    config.server.port = 0;
    config.server.body_limit_mb = 20;
    config.gemini.api_key = "test-key".into();
    config.gemini.model = "gemini-2.5-flash-image".into();
    config
}
