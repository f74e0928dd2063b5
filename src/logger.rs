use crate::chronometer::Chronometer;
use std::fmt::Display;

/// Writes timestamped lines to stderr, keeping stdout for the report.
#[derive(Clone, Copy)]
pub struct Logger {
    chronometer: Chronometer,
    verbose: bool,
}

impl Logger {
    pub fn new(verbose: bool) -> Self {
        Self {
            chronometer: Chronometer::new(),
            verbose,
        }
    }

    pub fn log(&self, value: impl Display) {
        eprintln!("{} ({} elapsed)", value, self.chronometer.elapsed_string());
    }

    pub fn debug<D: Display>(&self, f: impl FnOnce() -> D) {
        if self.verbose {
            self.log(f());
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

#[derive(Clone, Copy)]
pub struct PartialLogger<'a> {
    index: usize,
    interval: usize,
    logger: &'a Logger,
}

impl<'a> PartialLogger<'a> {
    pub fn new(interval: usize, logger: &'a Logger) -> Self {
        Self {
            index: 0,
            interval,
            logger,
        }
    }

    /// Logs on the first call and then on every `interval`-th call.
    pub fn log<D: Display>(&mut self, f: impl FnOnce(usize) -> D) -> bool {
        let logged = self.index % self.interval == 0;
        if logged {
            self.logger.log(f(self.index));
        }
        self.index += 1;
        logged
    }
}
