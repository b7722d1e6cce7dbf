use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

/// Where log lines go. The terminal belongs to the UI, so there is no
/// stderr fallback: without a file, output is dropped.
#[derive(Clone, Debug, Default)]
pub enum LogTarget {
    File(Arc<File>),
    #[default]
    Discard,
}

impl LogTarget {
    /// Append to `path`, creating it if needed.
    pub fn file(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(LogTarget::File(Arc::new(file)))
    }
}

pub struct LogWriter {
    inner: Option<Arc<File>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &self.inner {
            Some(file) => (&**file).write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &self.inner {
            Some(file) => (&**file).flush(),
            None => Ok(()),
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogTarget {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        let inner = match self {
            LogTarget::File(file) => Some(file.clone()),
            LogTarget::Discard => None,
        };
        LogWriter { inner }
    }
}

/// Install the global subscriber. Safe to call more than once; later calls
/// leave the first subscriber in place.
pub fn init(target: LogTarget, level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(target)
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}
