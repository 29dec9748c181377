use std::{fmt, sync::Arc};

/// Receives optimizer progress in percent (0-100).
#[derive(Clone)]
pub struct ProgressReporter {
    report: Arc<dyn Fn(u8) + Send + Sync>,
}

impl ProgressReporter {
    pub fn new(report: impl Fn(u8) + Send + Sync + 'static) -> Self {
        Self {
            report: Arc::new(report),
        }
    }

    pub fn noop() -> Self {
        Self::new(|_| {})
    }

    pub fn report(&self, percent: u8) {
        (self.report)(percent.min(100));
    }
}

impl fmt::Debug for ProgressReporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressReporter").finish_non_exhaustive()
    }
}
