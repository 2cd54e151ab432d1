//! Time-tracking session
//!
//! The host calls [`TimeSession::tick`] once per second while a session
//! runs. Stopping folds the session into the running total.

/// Start/stop tracker for one project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSession {
    total_secs: u64,
    session_secs: u64,
    running: bool,
}

impl TimeSession {
    /// Create tracker seeded with the project's tracked total
    #[inline]
    #[must_use]
    pub fn new(total_secs: u64) -> Self {
        Self {
            total_secs,
            session_secs: 0,
            running: false,
        }
    }

    /// Start a new session (restarting clears the current session)
    #[inline]
    pub fn start(&mut self) {
        self.running = true;
        self.session_secs = 0;
    }

    /// Record one elapsed second; ignored when stopped
    #[inline]
    pub fn tick(&mut self) {
        if self.running {
            self.session_secs += 1;
        }
    }

    /// Stop and return the new total (`previous total + session`)
    pub fn stop(&mut self) -> u64 {
        if self.running {
            self.total_secs += self.session_secs;
        }
        self.running = false;
        self.session_secs = 0;
        self.total_secs
    }

    /// Session is running
    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Seconds in the current session
    #[inline]
    #[must_use]
    pub fn session_secs(&self) -> u64 {
        self.session_secs
    }

    /// Committed total plus the current session
    #[inline]
    #[must_use]
    pub fn display_total(&self) -> u64 {
        self.total_secs + self.session_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_adds_session_to_total() {
        let mut session = TimeSession::new(7200);
        session.start();
        for _ in 0..90 {
            session.tick();
        }
        assert_eq!(session.display_total(), 7290);
        assert_eq!(session.stop(), 7290);
        assert_eq!(session.session_secs(), 0);
        assert!(!session.is_running());
    }

    #[test]
    fn ticks_while_stopped_are_ignored() {
        let mut session = TimeSession::new(10);
        session.tick();
        assert_eq!(session.stop(), 10);
    }

    #[test]
    fn sessions_accumulate() {
        let mut session = TimeSession::new(0);
        session.start();
        session.tick();
        session.tick();
        assert_eq!(session.stop(), 2);

        session.start();
        session.tick();
        assert_eq!(session.stop(), 3);
    }

    #[test]
    fn stop_immediately_keeps_total() {
        let mut session = TimeSession::new(55);
        session.start();
        assert_eq!(session.stop(), 55);
    }
}
