use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::assessment::domain::UserProfile;

/// Skills beyond this count do not participate in the cache key.
const KEY_SKILL_LIMIT: usize = 5;

/// Identity of an advice request: the leading skills plus the free-text
/// fields the prompt embeds.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdviceCacheKey {
    skills: Vec<String>,
    interests: String,
    name: String,
}

impl AdviceCacheKey {
    pub fn for_profile(profile: &UserProfile) -> Self {
        Self {
            skills: profile.skills.iter().take(KEY_SKILL_LIMIT).cloned().collect(),
            interests: profile.interests.clone(),
            name: profile.name.clone(),
        }
    }
}

/// Process-lifetime memo of externally generated advice. No eviction.
///
/// Writes are last-write-wins: a late write from an abandoned worker simply
/// replaces the value stored under that key.
#[derive(Debug, Clone, Default)]
pub struct AdviceCache {
    entries: Arc<Mutex<HashMap<AdviceCacheKey, String>>>,
}

impl AdviceCache {
    pub fn get(&self, key: &AdviceCacheKey) -> Option<String> {
        self.entries
            .lock()
            .expect("advice cache mutex poisoned")
            .get(key)
            .cloned()
    }

    pub fn store(&self, key: AdviceCacheKey, advice: String) {
        self.entries
            .lock()
            .expect("advice cache mutex poisoned")
            .insert(key, advice);
    }
}
