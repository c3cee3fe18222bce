use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::assessment::advice::{AdviceGenerator, TextGenerator};
use crate::assessment::domain::UserProfile;
use crate::assessment::service::CareerAdvisor;

pub(super) fn profile(skills: &[&str], interests: &str, career_goals: &str) -> UserProfile {
    UserProfile {
        name: "Test User".to_string(),
        education: "Bachelor's Degree".to_string(),
        field: "Undeclared".to_string(),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        interests: interests.to_string(),
        career_goals: career_goals.to_string(),
        timeline: "1 year".to_string(),
    }
}

/// The end-to-end scenario profile: explicit data-science goal on top of
/// matching skills and interests.
pub(super) fn ana_profile() -> UserProfile {
    UserProfile {
        name: "Ana".to_string(),
        education: "Bachelor's Degree".to_string(),
        field: "Computer Science".to_string(),
        skills: vec!["Python".to_string(), "SQL".to_string()],
        interests: "data and machine learning".to_string(),
        career_goals: "become a data scientist".to_string(),
        timeline: "1 year".to_string(),
    }
}

pub(super) fn empty_profile() -> UserProfile {
    UserProfile::default()
}

pub(super) fn offline_advisor() -> CareerAdvisor {
    CareerAdvisor::new(AdviceGenerator::offline())
}

pub(super) fn advisor_with(generator: ScriptedGenerator, budget: Duration) -> CareerAdvisor {
    CareerAdvisor::new(AdviceGenerator::new(Arc::new(generator), budget))
}

/// Provider double returning a fixed reply after an optional delay, counting
/// how often it is actually invoked.
pub(super) struct ScriptedGenerator {
    reply: &'static str,
    delay: Duration,
    calls: Arc<AtomicUsize>,
}

impl ScriptedGenerator {
    pub(super) fn immediate(reply: &'static str) -> Self {
        Self::delayed(reply, Duration::ZERO)
    }

    pub(super) fn delayed(reply: &'static str, delay: Duration) -> Self {
        Self {
            reply,
            delay,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(super) fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    fn is_available(&self) -> bool {
        true
    }

    async fn generate_text(&self, _prompt: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Some(self.reply.to_string())
    }
}
