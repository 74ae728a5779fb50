//! Explicit driver state for animating θ
//!
//! The caller owns the clock (requestAnimationFrame, a native loop, a test)
//! and feeds timestamps in; nothing here schedules itself. One `frame` call
//! computes exactly one step, and `stop` takes effect before the next one.

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SPIN_RATE, MAX_FRAME_DT};

/// Advance θ by `rate` radians per second over `dt` seconds
///
/// Negative or non-finite `dt` (clock skew, first frame) counts as no time
/// passing. θ is not wrapped: the numeric control shows the running total.
#[inline]
pub fn advance(theta: f64, dt: f64, rate: f64) -> f64 {
    if !dt.is_finite() || dt <= 0.0 || !rate.is_finite() {
        return theta;
    }
    theta + rate * dt
}

/// Start/stop state for a continuously spinning angle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spin {
    /// Radians per second (negative spins clockwise)
    pub rate: f64,
    running: bool,
    /// Timestamp of the previous frame, in seconds
    #[serde(skip)]
    last_time: Option<f64>,
}

impl Default for Spin {
    fn default() -> Self {
        Self::new(DEFAULT_SPIN_RATE)
    }
}

impl Spin {
    pub fn new(rate: f64) -> Self {
        Self {
            rate,
            running: false,
            last_time: None,
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Begin spinning; the next frame only records its timestamp
    pub fn start(&mut self) {
        if !self.running {
            log::debug!("Spin started at {} rad/s", self.rate);
        }
        self.running = true;
        self.last_time = None;
    }

    /// Stop spinning immediately
    pub fn stop(&mut self) {
        if self.running {
            log::debug!("Spin stopped");
        }
        self.running = false;
        self.last_time = None;
    }

    /// Flip between running and stopped
    pub fn toggle(&mut self) {
        if self.running {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Compute θ for a frame at `now` seconds
    ///
    /// Returns `theta` unchanged while stopped or for a non-finite `now`.
    /// The elapsed time is clamped to MAX_FRAME_DT so a backgrounded tab
    /// doesn't jump the angle.
    pub fn frame(&mut self, now: f64, theta: f64) -> f64 {
        if !self.running {
            return theta;
        }
        let dt = match self.last_time {
            Some(last) if now.is_finite() => (now - last).min(MAX_FRAME_DT),
            _ => 0.0,
        };
        if now.is_finite() {
            self.last_time = Some(now);
        }
        advance(theta, dt, self.rate)
    }
}
