use serde::Serialize;
use tracing::error;

/// Outcome of a scenario run.
#[derive(Debug, Serialize)]
pub struct Report {
    pub directed: bool,
    pub vertices: usize,
    pub checks: usize,
    pub passed: bool,
    pub failures: Vec<String>,
}

impl Report {
    pub fn new(directed: bool, vertices: usize) -> Self {
        Self {
            directed,
            vertices,
            checks: 0,
            passed: true,
            failures: Vec::new(),
        }
    }

    /// Records one check. `failure` is only evaluated if `ok` is `false`.
    pub fn check<F>(&mut self, ok: bool, failure: F)
    where
        F: FnOnce() -> String,
    {
        self.checks += 1;
        if !ok {
            let message = failure();
            error!("{}", message);
            self.failures.push(message);
            self.passed = false;
        }
    }
}
