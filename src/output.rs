use std::{
    fmt,
    io::{self, Write},
    sync::Arc,
};

/// The sink receiving human-readable progress messages.
///
/// Cheap to clone, every clone forwards to the same function.
#[derive(Clone)]
pub struct Printer {
    print_fn: Arc<dyn Fn(&str) + Send + Sync>,
}

impl Printer {
    /// Creates a new `Printer` forwarding every message to `print_fn`.
    pub fn new<F>(print_fn: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        Self {
            print_fn: Arc::new(print_fn),
        }
    }

    /// A printer writing to standard output, flushing after every message.
    pub fn stdout() -> Self {
        Self::new(|s| {
            let mut out = io::stdout().lock();
            // Progress output is best effort.
            let _ = out.write_all(s.as_bytes()).and_then(|_| out.flush());
        })
    }

    /// A printer discarding every message.
    pub fn silent() -> Self {
        Self::new(|_| {})
    }

    pub fn print(&self, s: &str) {
        (self.print_fn)(s);
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::stdout()
    }
}

impl fmt::Debug for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Printer").finish_non_exhaustive()
    }
}
