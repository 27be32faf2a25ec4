use std::thread;
use std::time::{Duration, Instant};

/// Longest single nap taken while waiting for the next frame.
const MAX_IDLE: Duration = Duration::from_millis(1);

/// Wall-clock gate that keeps emulation from running faster than the
/// refresh rate.
#[derive(Clone, Debug)]
pub struct FramePacer {
    frame: Duration,
    next: Option<Instant>,
}

impl FramePacer {
    pub fn new(refresh_rate: u32) -> Self {
        Self {
            frame: Duration::from_secs(1) / refresh_rate.max(1),
            next: None,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Whether a frame should run at `now`. Returning true books the next
    /// slot. When more than a whole frame behind, the schedule restarts from
    /// `now` instead of bursting to catch up.
    pub fn frame_due(&mut self, now: Instant) -> bool {
        match self.next {
            Some(next) if now < next => false,
            Some(next) => {
                let behind = now.duration_since(next);
                self.next = Some(if behind > self.frame {
                    now + self.frame
                } else {
                    next + self.frame
                });
                true
            }
            None => {
                self.next = Some(now + self.frame);
                true
            }
        }
    }

    pub fn time_until_due(&self, now: Instant) -> Duration {
        self.next
            .map_or(Duration::ZERO, |next| next.saturating_duration_since(now))
    }

    /// Sleep briefly while no frame is due.
    pub fn idle(&self, now: Instant) {
        let wait = self.time_until_due(now).min(MAX_IDLE);
        if !wait.is_zero() {
            thread::sleep(wait);
        }
    }
}
