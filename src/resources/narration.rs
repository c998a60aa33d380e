use bevy::prelude::*;
use crossbeam_channel::Sender;
use std::collections::HashMap;

/// Host speech capability.
///
/// Speaking is fire-and-forget: implementations must not block and have no way
/// to report failure back to the trainer.
pub trait Narrator: Send + Sync {
    fn speak(&self, text: &str);
}

/// Writes utterances to the log instead of speaking them.
#[derive(Debug, Default)]
pub struct LogNarrator;

impl Narrator for LogNarrator {
    fn speak(&self, text: &str) {
        info!("[narration] {}", text);
    }
}

/// Hands utterances to the host over a channel.
pub struct ChannelNarrator {
    sender: Sender<String>,
}

impl ChannelNarrator {
    pub fn new(sender: Sender<String>) -> Self {
        Self { sender }
    }
}

impl Narrator for ChannelNarrator {
    fn speak(&self, text: &str) {
        // A hung-up host just means nobody is listening.
        if self.sender.try_send(text.to_string()).is_err() {
            debug!("Narration channel closed or full, dropping: {}", text);
        }
    }
}

/// Optional narrator plus the per-message debounce ledger.
#[derive(Resource)]
pub struct NarrationResource {
    narrator: Option<Box<dyn Narrator>>,
    last_spoken: HashMap<String, f64>,
    pub cooldown: f64,
    pub enabled: bool,
}

impl Default for NarrationResource {
    fn default() -> Self {
        Self::new(None, crate::utils::NARRATION_COOLDOWN)
    }
}

impl NarrationResource {
    pub fn new(narrator: Option<Box<dyn Narrator>>, cooldown: f64) -> Self {
        Self {
            narrator,
            last_spoken: HashMap::new(),
            cooldown,
            enabled: true,
        }
    }

    pub fn set_narrator(&mut self, narrator: Box<dyn Narrator>) {
        self.narrator = Some(narrator);
    }

    pub fn is_available(&self) -> bool {
        self.enabled && self.narrator.is_some()
    }

    /// Speaks `text` unless the same text was spoken less than `cooldown` seconds ago.
    ///
    /// Returns whether the text was handed to the narrator. Without a narrator
    /// this is a no-op.
    pub fn announce(&mut self, text: &str, now: f64) -> bool {
        if !self.enabled {
            return false;
        }
        let Some(narrator) = self.narrator.as_ref() else {
            return false;
        };

        if let Some(last) = self.last_spoken.get(text) {
            if now - last < self.cooldown {
                debug!("Debounced narration: {}", text);
                return false;
            }
        }

        narrator.speak(text);
        self.last_spoken.insert(text.to_string(), now);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::Receiver;

    fn channel_resource(cooldown: f64) -> (NarrationResource, Receiver<String>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        let narrator: Box<dyn Narrator> = Box::new(ChannelNarrator::new(tx));
        (NarrationResource::new(Some(narrator), cooldown), rx)
    }

    #[test]
    fn test_missing_narrator_is_noop() {
        let mut narration = NarrationResource::new(None, 4.0);
        assert!(!narration.is_available());
        assert!(!narration.announce("Stall!", 0.0));
    }

    #[test]
    fn test_log_narrator_is_debounced_like_any_other() {
        let mut narration = NarrationResource::new(Some(Box::new(LogNarrator)), 4.0);
        assert!(narration.is_available());
        assert!(narration.announce("Well done!", 1.0));
        assert!(!narration.announce("Well done!", 2.0));

        narration.enabled = false;
        assert!(!narration.is_available());
        assert!(!narration.announce("Lift", 10.0));
    }

    #[test]
    fn test_same_message_is_debounced_within_cooldown() {
        let (mut narration, rx) = channel_resource(4.0);

        assert!(narration.announce("Stall!", 0.0));
        assert!(!narration.announce("Stall!", 3.9));
        assert!(narration.announce("Stall!", 4.0));

        let spoken: Vec<String> = rx.try_iter().collect();
        assert_eq!(spoken, vec!["Stall!".to_string(), "Stall!".to_string()]);
    }

    #[test]
    fn test_different_messages_are_not_debounced() {
        let (mut narration, rx) = channel_resource(4.0);

        assert!(narration.announce("Stall!", 0.0));
        assert!(narration.announce("Recovered", 0.5));
        assert_eq!(rx.try_iter().count(), 2);
    }

    #[test]
    fn test_disabled_narration_is_silent() {
        let (mut narration, rx) = channel_resource(0.0);
        narration.enabled = false;
        assert!(!narration.announce("Hello", 0.0));
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_closed_channel_does_not_panic() {
        let (mut narration, rx) = channel_resource(0.0);
        drop(rx);
        assert!(narration.announce("Nobody listens", 0.0));
    }
}
