// SPDX-License-Identifier: MIT
//! Output destinations for the stdout log exporter.
//!
//! A [`Destination`] is a cheap, clonable handle to a writable sink. The
//! default is the process's standard output; any other sink is shared behind
//! an `Arc<Mutex<_>>` so the caller can keep a clone (for example to read back
//! an in-memory buffer in tests).
use std::fmt;
use std::fs::File;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing_subscriber::fmt::MakeWriter;

type SharedSink = Arc<Mutex<dyn Write + Send>>;

/// Where exported log output is written.
#[derive(Clone, Default)]
pub enum Destination {
    /// The process's standard output stream.
    #[default]
    Stdout,
    /// A caller supplied sink.
    Shared(SharedSink),
}

impl Destination {
    /// Destination writing to standard output.
    pub fn stdout() -> Self {
        Self::Stdout
    }

    /// Wrap an owned writer. The handle is shared by every clone of the
    /// returned destination.
    pub fn new<W>(writer: W) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::Shared(Arc::new(Mutex::new(writer)))
    }

    /// `true` when this is the standard output stream.
    pub fn is_stdout(&self) -> bool {
        matches!(self, Self::Stdout)
    }

    /// Borrow a writer for this destination.
    ///
    /// Shared sinks stay locked until the returned writer is dropped, so each
    /// formatted event lands in the sink without interleaving.
    pub fn writer(&self) -> DestinationWriter<'_> {
        match self {
            Self::Stdout => DestinationWriter::Stdout(io::stdout()),
            Self::Shared(sink) => {
                DestinationWriter::Shared(sink.lock().unwrap_or_else(PoisonError::into_inner))
            }
        }
    }

    /// Flush any buffered output held by the sink.
    pub fn flush(&self) -> io::Result<()> {
        self.writer().flush()
    }
}

impl<W> From<Arc<Mutex<W>>> for Destination
where
    W: Write + Send + 'static,
{
    fn from(sink: Arc<Mutex<W>>) -> Self {
        Self::Shared(sink)
    }
}

impl From<io::Stdout> for Destination {
    fn from(_: io::Stdout) -> Self {
        Self::Stdout
    }
}

impl From<io::Stderr> for Destination {
    fn from(stderr: io::Stderr) -> Self {
        Self::new(stderr)
    }
}

impl From<File> for Destination {
    fn from(file: File) -> Self {
        Self::new(file)
    }
}

/// Any owned writer, boxed. Covers `Box<dyn Write + Send>` too.
impl<W> From<Box<W>> for Destination
where
    W: Write + Send + ?Sized + 'static,
{
    fn from(writer: Box<W>) -> Self {
        Self::new(writer)
    }
}

/// Two destinations are equal when they refer to the same sink.
impl PartialEq for Destination {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Stdout, Self::Stdout) => true,
            (Self::Shared(a), Self::Shared(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

impl Eq for Destination {}

impl fmt::Debug for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("Stdout"),
            Self::Shared(sink) => f
                .debug_tuple("Shared")
                .field(&(Arc::as_ptr(sink) as *const ()))
                .finish(),
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Shared(_) => f.write_str("custom writer"),
        }
    }
}

/// Writer handed out by [`Destination::writer`].
pub enum DestinationWriter<'a> {
    Stdout(io::Stdout),
    Shared(MutexGuard<'a, dyn Write + Send + 'static>),
}

impl Write for DestinationWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Stdout(out) => out.write(buf),
            Self::Shared(sink) => sink.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.write_all(buf),
            Self::Shared(sink) => sink.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Stdout(out) => out.flush(),
            Self::Shared(sink) => sink.flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for Destination {
    type Writer = DestinationWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        self.writer()
    }
}
