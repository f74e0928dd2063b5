use std::time::{Duration, Instant};

#[derive(Clone, Copy)]
pub struct Chronometer {
    start: Instant,
}

impl Chronometer {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_string(&self) -> String {
        format_duration(self.elapsed())
    }
}

pub fn format_duration(duration: Duration) -> String {
    let elapsed = duration.as_millis();
    format!("{:02}:{:02}.{:03}", elapsed / 60000, (elapsed % 60000) / 1000, elapsed % 1000)
}
