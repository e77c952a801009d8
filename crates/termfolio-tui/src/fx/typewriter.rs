//! Hero tagline typewriter.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Adding one character per step
    Typing,
    /// Full role shown, waiting before deletion
    Holding,
    /// Removing one character per step
    Deleting,
    /// Empty, waiting before the next role
    Resting,
}

/// Deadline-driven state machine cycling through the configured roles:
/// type, hold, delete, rest, next role, forever. Driven by an injected
/// `now`; restartable only by constructing a fresh instance.
#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<Vec<char>>,
    role: usize,
    shown: usize,
    phase: Phase,
    next_at: Instant,
    text: String,
    type_step: Duration,
    delete_step: Duration,
    hold: Duration,
    rest: Duration,
}

impl Typewriter {
    /// Default phase timings from the original page, in milliseconds
    pub const TYPE_MS: u64 = 100;
    pub const DELETE_MS: u64 = 50;
    pub const HOLD_MS: u64 = 2000;
    pub const REST_MS: u64 = 500;

    pub fn new(roles: &[String], now: Instant) -> Self {
        Self::with_timings(
            roles,
            now,
            Duration::from_millis(Self::TYPE_MS),
            Duration::from_millis(Self::DELETE_MS),
            Duration::from_millis(Self::HOLD_MS),
            Duration::from_millis(Self::REST_MS),
        )
    }

    pub fn with_timings(
        roles: &[String],
        now: Instant,
        type_step: Duration,
        delete_step: Duration,
        hold: Duration,
        rest: Duration,
    ) -> Self {
        Self {
            roles: roles.iter().map(|r| r.chars().collect()).collect(),
            role: 0,
            shown: 0,
            phase: Phase::Typing,
            next_at: now + type_step,
            text: String::new(),
            type_step,
            delete_step,
            hold,
            rest,
        }
    }

    /// Currently displayed text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Deadline of the next state change, for tick scheduling
    pub fn next_deadline(&self) -> Option<Instant> {
        if self.roles.is_empty() {
            None
        } else {
            Some(self.next_at)
        }
    }

    /// Advance every step whose deadline has passed
    pub fn tick(&mut self, now: Instant) {
        if self.roles.is_empty() {
            return;
        }
        while now >= self.next_at {
            self.step();
        }
    }

    fn step(&mut self) {
        let role_len = self.roles[self.role].len();
        match self.phase {
            Phase::Typing => {
                if self.shown < role_len {
                    self.shown += 1;
                    self.render();
                }
                if self.shown == role_len {
                    self.phase = Phase::Holding;
                    self.next_at += self.hold;
                } else {
                    self.next_at += self.type_step;
                }
            }
            Phase::Holding => {
                self.phase = Phase::Deleting;
                self.next_at += self.delete_step;
            }
            Phase::Deleting => {
                if self.shown > 0 {
                    self.shown -= 1;
                    self.render();
                }
                if self.shown == 0 {
                    self.phase = Phase::Resting;
                    self.next_at += self.rest;
                } else {
                    self.next_at += self.delete_step;
                }
            }
            Phase::Resting => {
                self.role = (self.role + 1) % self.roles.len();
                self.phase = Phase::Typing;
                self.next_at += self.type_step;
            }
        }
    }

    fn render(&mut self) {
        self.text = self.roles[self.role][..self.shown].iter().collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles() -> Vec<String> {
        vec!["ab".to_string(), "c".to_string()]
    }

    #[test]
    fn test_phase_walk() {
        let start = Instant::now();
        let mut tw = Typewriter::with_timings(
            &roles(),
            start,
            Duration::from_millis(100),
            Duration::from_millis(50),
            Duration::from_millis(2000),
            Duration::from_millis(500),
        );

        let at = |ms: u64| start + Duration::from_millis(ms);

        tw.tick(at(100));
        assert_eq!(tw.text(), "a");
        tw.tick(at(200));
        assert_eq!(tw.text(), "ab");
        // Held for 2000ms before deleting starts
        tw.tick(at(2150));
        assert_eq!(tw.text(), "ab");
        tw.tick(at(2250));
        assert_eq!(tw.text(), "a");
        tw.tick(at(2300));
        assert_eq!(tw.text(), "");
        // Rest 500ms, then the next role types
        tw.tick(at(2800 + 100));
        assert_eq!(tw.text(), "c");
    }

    #[test]
    fn test_cycles_back_to_first_role() {
        let start = Instant::now();
        let mut tw = Typewriter::with_timings(
            &vec!["x".to_string()],
            start,
            Duration::from_millis(1),
            Duration::from_millis(1),
            Duration::from_millis(1),
            Duration::from_millis(1),
        );
        // One full cycle: type(1) hold(1) delete(1) rest(1) then type again
        tw.tick(start + Duration::from_millis(5));
        assert_eq!(tw.text(), "x");
    }

    #[test]
    fn test_empty_roles_is_inert() {
        let start = Instant::now();
        let mut tw = Typewriter::new(&[], start);
        tw.tick(start + Duration::from_secs(10));
        assert_eq!(tw.text(), "");
        assert!(tw.next_deadline().is_none());
    }

    #[test]
    fn test_catches_up_over_long_gaps() {
        let start = Instant::now();
        let mut tw = Typewriter::with_timings(
            &vec!["hey".to_string()],
            start,
            Duration::from_millis(100),
            Duration::from_millis(50),
            Duration::from_millis(200),
            Duration::from_millis(100),
        );
        // A single late tick runs every due step
        tw.tick(start + Duration::from_millis(300));
        assert_eq!(tw.text(), "hey");
    }
}
