//! Motivational advice generation: bounded external attempt with a memoized
//! cache, falling back to a fixed local pool on any failure.

mod cache;
pub mod provider;

pub use cache::{AdviceCache, AdviceCacheKey};
pub use provider::{
    provider_from_config, NullTextGenerator, ProviderError, TextGenerator, VertexTextGenerator,
};

use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;
use tracing::{debug, warn};

use super::domain::UserProfile;
use crate::config::DEFAULT_ADVICE_BUDGET_MS;

/// Skills beyond this count are not embedded in the prompt.
const PROMPT_SKILL_LIMIT: usize = 5;

/// Fixed local pool used whenever external generation is unavailable, slow,
/// or failing.
pub const ADVICE_POOL: [&str; 5] = [
    "Remember: every expert was once a beginner. Start where you are, use what you have!",
    "Focus on building one skill at a time. Consistency beats intensity every time.",
    "Set small, achievable daily goals. Progress compounds over time!",
    "Network genuinely - help others and opportunities will come your way.",
    "Document your learning journey. Your future self will thank you!",
];

/// Produces one short motivational string per profile. Never fails and always
/// returns non-empty text within the configured wall-clock budget.
pub struct AdviceGenerator {
    provider: Arc<dyn TextGenerator>,
    cache: AdviceCache,
    budget: Duration,
}

impl AdviceGenerator {
    pub fn new(provider: Arc<dyn TextGenerator>, budget: Duration) -> Self {
        Self {
            provider,
            cache: AdviceCache::default(),
            budget,
        }
    }

    /// Generator with the no-op provider and default budget; external
    /// generation is skipped entirely.
    pub fn offline() -> Self {
        Self::new(
            Arc::new(NullTextGenerator),
            Duration::from_millis(DEFAULT_ADVICE_BUDGET_MS),
        )
    }

    /// Resolve advice for the profile.
    ///
    /// Cache hit returns immediately. Otherwise, when a provider is
    /// available, its call runs on a detached worker task with a soft
    /// deadline: on expiry the caller falls back without joining the worker,
    /// and a late completion still lands in the cache (last-write-wins).
    pub async fn generate(&self, profile: &UserProfile) -> String {
        let key = AdviceCacheKey::for_profile(profile);
        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        if self.provider.is_available() {
            let prompt = build_prompt(profile);
            let provider = Arc::clone(&self.provider);
            let cache = self.cache.clone();
            let worker_key = key.clone();

            let worker = tokio::spawn(async move {
                let text = provider.generate_text(&prompt).await?;
                let text = text.trim().to_string();
                if text.is_empty() {
                    return None;
                }
                cache.store(worker_key, text.clone());
                Some(text)
            });

            match tokio::time::timeout(self.budget, worker).await {
                Ok(Ok(Some(advice))) => return advice,
                Ok(Ok(None)) => debug!("external advice attempt produced no text"),
                Ok(Err(err)) => warn!("advice worker failed: {err}"),
                // Deadline expired; the worker is abandoned and may still
                // populate the cache for the next identical profile.
                Err(_) => debug!(
                    "external advice attempt exceeded {}ms budget",
                    self.budget.as_millis()
                ),
            }
        }

        local_advice()
    }
}

fn build_prompt(profile: &UserProfile) -> String {
    let skills: Vec<&str> = profile
        .skills
        .iter()
        .take(PROMPT_SKILL_LIMIT)
        .map(String::as_str)
        .collect();

    format!(
        "Write one short, encouraging career tip (at most two sentences) for {name}, \
         who is currently building these skills: {skills}.",
        name = profile.name,
        skills = skills.join(", "),
    )
}

fn local_advice() -> String {
    ADVICE_POOL
        .choose(&mut rand::thread_rng())
        .expect("advice pool is non-empty")
        .to_string()
}
