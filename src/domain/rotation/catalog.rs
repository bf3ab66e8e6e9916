//! Fixed message catalogs and system notices.

use super::MessageRotator;

/// Scrolling log messages, shown in order, one per log interval.
pub const LOG_MESSAGES: [&str; 20] = [
    "Installing chaos.exe…",
    "Uploading memes to the cloud…",
    "Defragmenting brand guidelines…",
    "Unskippable pre-roll buffering…",
    "Injecting serotonin into KPIs…",
    "Training interns on buzzword bingo…",
    "Optimizing synergies… forever.",
    "Calibrating engagement metrics…",
    "Downloading corporate speak…",
    "Patching reality.dll…",
    "Compiling excuses.exe…",
    "Loading unnecessary updates…",
    "Syncing with the void…",
    "Buffering your patience…",
    "Installing fake urgency…",
    "Updating terms nobody reads…",
    "Monetizing your wait time…",
    "Preprocessing procrastination…",
    "Debugging user expectations…",
    "Optimizing for disappointment…",
];

/// Patience lines, shown briefly under the progress bar.
pub const PATIENCE_LINES: [&str; 5] = [
    "Patience is the new performance metric.",
    "Loading… unlike your attention span.",
    "Good things glitch to those who wait.",
    "Waiting is the strategy.",
    "Your time is our revenue model.",
];

pub const CANCEL_ACKNOWLEDGEMENT: &str = "Thanks! Cancelling only boosts engagement.";

pub const PAUSED_NOTICE: &str = "SYSTEM PAUSED - Press Space to resume";
pub const RESUMED_NOTICE: &str = "SYSTEM RESUMED - Back to eternal waiting...";
pub const RESTART_NOTICE: &str = "MANUAL RESTART INITIATED - Hope is futile";

pub const CONTEXT_MENU_NOTICE: &str = "Right-click detected... Adding extra wait time.";
pub const ATTENTION_LOST_NOTICE: &str = "User attention diverted... Slowing down process.";
pub const WELCOME_BACK_NOTICE: &str = "Welcome back... Progress has mysteriously slowed.";

pub const QUIT_CONFIRMATION: &str =
    "Are you sure you want to cancel this very important system update?";

pub const STARTUP_NOTICE: &str = "System Update v2.1.337 - Initializing eternal loop...";

/// Banner printed once when the screen comes up.
pub const BANNER: [&str; 3] = [
    "🚫 SYSTEM UPDATE IN PROGRESS 🚫",
    "Cancelling will not help. Refreshing will not help. Only patience.",
    "Secret shortcuts: Space (pause/resume), r (restart), Escape (cancel)",
];

/// A rotator over [`LOG_MESSAGES`], starting at the first message.
pub fn log_rotator() -> MessageRotator<&'static str> {
    MessageRotator::from_array(LOG_MESSAGES)
}

/// A rotator over [`PATIENCE_LINES`], starting at the first line.
pub fn patience_rotator() -> MessageRotator<&'static str> {
    MessageRotator::from_array(PATIENCE_LINES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_sizes() {
        assert_eq!(log_rotator().len(), 20);
        assert_eq!(patience_rotator().len(), 5);
    }

    #[test]
    fn rotators_start_at_the_first_message() {
        assert_eq!(*log_rotator().peek(), "Installing chaos.exe…");
        assert_eq!(
            *patience_rotator().peek(),
            "Patience is the new performance metric."
        );
    }

    #[test]
    fn log_messages_are_distinct() {
        let mut sorted = LOG_MESSAGES.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), LOG_MESSAGES.len());
    }
}
