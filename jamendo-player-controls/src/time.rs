/// Playback position of the current track in seconds, as reported by the audio element.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct TimeData {
    pub current: f64,
    pub duration: f64,
    pub remaining: f64,
}

impl TimeData {
    pub fn new(current: f64, duration: f64) -> Self {
        let current = finite_or_zero(current);
        let duration = finite_or_zero(duration);

        Self {
            current,
            duration,
            remaining: (duration - current).max(0.0),
        }
    }

    pub fn with_duration(self, duration: f64) -> Self {
        Self::new(self.current, duration)
    }

    /// Elapsed share of the track in percent.
    pub fn progress(&self) -> f64 {
        if self.duration > 0.0 {
            (self.current / self.duration * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

/// Formats seconds as `m:ss`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }

    let seconds = seconds.floor() as u64;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
