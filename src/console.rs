//! Line-based prompt/response console
//!
//! The game talks to the player only through this trait, so sessions can
//! be scripted in tests.

use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// A line-oriented text channel to the player
pub trait Console {
    /// Print one line of output
    ///
    /// # Errors
    /// Returns the underlying write error.
    fn say(&mut self, line: &str) -> io::Result<()>;

    /// Show `prompt` and read one line, without its line ending
    ///
    /// Returns `Ok(None)` when input has ended or the player cancelled.
    ///
    /// # Errors
    /// Returns any other I/O error.
    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>>;
}

/// Flag raised from outside the game loop when the player cancels
///
/// Clones share one flag.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Lower the flag, returning whether it was raised
    pub fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// `Console` over any buffered reader and writer
pub struct LineConsole<R, W> {
    input: R,
    output: W,
    cancel: Option<CancelFlag>,
}

impl<R: BufRead, W: Write> LineConsole<R, W> {
    #[must_use]
    pub const fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            cancel: None,
        }
    }

    /// Answer the pending prompt with `None` whenever `cancel` is raised
    ///
    /// The flag is checked once the read returns, and the line read is dropped.
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelFlag) -> Self {
        self.cancel = Some(cancel);
        self
    }

    /// Give back the writer, e.g. to inspect a scripted session's output
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for LineConsole<R, W> {
    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line)?;
        if read == 0 || self.cancel.as_ref().is_some_and(CancelFlag::take) {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
