//! Frame rate bookkeeping.

use circular_buffer::CircularBuffer;

use crate::constants::FPS_WINDOW;

/// Instantaneous frame rate for a frame that took `dt` seconds, rounded to the
/// nearest whole frame. Zero for non-positive durations.
pub fn frames_per_second(dt: f32) -> u32 {
    if dt <= 0.0 || !dt.is_finite() {
        return 0;
    }
    (1.0 / dt + 0.5).trunc() as u32
}

/// Rolling frame statistics over the last [`FPS_WINDOW`] frames.
#[derive(Debug)]
pub struct FrameStats {
    samples: CircularBuffer<FPS_WINDOW, f32>,
    frames: u64,
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameStats {
    pub fn new() -> Self {
        Self {
            samples: CircularBuffer::new(),
            frames: 0,
        }
    }

    /// Records one frame that took `dt` seconds. Non-positive durations are ignored.
    pub fn record(&mut self, dt: f32) {
        if dt <= 0.0 || !dt.is_finite() {
            return;
        }
        self.samples.push_back(dt);
        self.frames += 1;
    }

    /// Total frames recorded.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Whether a full window of samples has been gathered since the last report point.
    pub fn window_complete(&self) -> bool {
        self.frames > 0 && self.frames % FPS_WINDOW as u64 == 0
    }

    /// Frame rate of the most recent frame.
    pub fn current_fps(&self) -> u32 {
        self.samples.back().map(|&dt| frames_per_second(dt)).unwrap_or(0)
    }

    /// Average frame rate over the window.
    pub fn average_fps(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let total: f32 = self.samples.iter().sum();
        self.samples.len() as f32 / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_per_second_rounds() {
        assert_eq!(frames_per_second(1.0 / 60.0), 60);
        assert_eq!(frames_per_second(0.0166), 60);
        assert_eq!(frames_per_second(0.0), 0);
        assert_eq!(frames_per_second(-1.0), 0);
    }
}
