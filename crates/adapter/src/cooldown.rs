//! Injected rate-limiting collaborator.
//!
//! Keys are application-chosen (typically `"{user_id}:{command}"`).
//! The check-expired-then-arm sequence is a single critical section;
//! the lock is never held across an await.

use std::{
    collections::HashMap,
    sync::{Mutex, PoisonError},
    time::{Duration, Instant},
};

/// Key → expiry table behind one exclusion lock.
#[derive(Default)]
pub struct Cooldowns {
    entries: Mutex<HashMap<String, Instant>>,
}

impl Cooldowns {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when `key` is still cooling down. Otherwise arms
    /// a new cooldown of `duration` and returns `false` — exactly one
    /// of any set of concurrent callers gets the `false`.
    pub fn hit(&self, key: &str, duration: Duration) -> bool {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        if entries.get(key).is_some_and(|&until| now < until) {
            return true;
        }
        entries.insert(key.to_owned(), now + duration);
        false
    }

    /// Forget a key's cooldown, if any.
    pub fn reset(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn first_hit_arms_the_cooldown() {
        let cooldowns = Cooldowns::new();
        assert!(!cooldowns.hit("u1:ping", Duration::from_secs(60)));
        assert!(cooldowns.hit("u1:ping", Duration::from_secs(60)));
    }

    #[test]
    fn keys_are_independent() {
        let cooldowns = Cooldowns::new();
        assert!(!cooldowns.hit("u1:ping", Duration::from_secs(60)));
        assert!(!cooldowns.hit("u2:ping", Duration::from_secs(60)));
    }

    #[test]
    fn expired_cooldown_rearms() {
        let cooldowns = Cooldowns::new();
        assert!(!cooldowns.hit("u1:ping", Duration::from_millis(0)));
        // Zero-duration cooldown is immediately expired.
        assert!(!cooldowns.hit("u1:ping", Duration::from_secs(60)));
    }

    #[test]
    fn reset_forgets_the_key() {
        let cooldowns = Cooldowns::new();
        assert!(!cooldowns.hit("u1:ping", Duration::from_secs(60)));
        cooldowns.reset("u1:ping");
        assert!(!cooldowns.hit("u1:ping", Duration::from_secs(60)));
    }

    #[test]
    fn concurrent_hits_admit_exactly_one_caller() {
        let cooldowns = Cooldowns::new();
        let admitted = AtomicUsize::new(0);

        std::thread::scope(|scope| {
            for _ in 0..16 {
                scope.spawn(|| {
                    if !cooldowns.hit("shared", Duration::from_secs(60)) {
                        admitted.fetch_add(1, Ordering::SeqCst);
                    }
                });
            }
        });

        assert_eq!(admitted.load(Ordering::SeqCst), 1);
    }
}
