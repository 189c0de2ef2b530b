//! Platform abstraction ports.
//!
//! File pickers, speech recognition, and print dialogs are collaborators the
//! core must not know concretely. Each gets a narrow trait here; wizard and
//! export logic depend only on these.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::project::{ImageFormat, ImagePayload};

/// Result type for port operations.
pub type PortResult<T> = Result<T, PortError>;

/// Errors raised by platform ports.
#[derive(Debug, Error)]
pub enum PortError {
    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a supported image format.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Speech capture could not start.
    #[error("Dictation unavailable: {0}")]
    DictationUnavailable(String),

    /// The platform print facility failed.
    #[error("Print failed: {0}")]
    Print(String),
}

/// Reads a user-chosen photo into an [`ImagePayload`].
pub trait ImageSource {
    /// Read and encode the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::Io`] when the file cannot be read and
    /// [`PortError::UnsupportedFormat`] when it is not a supported image.
    fn read_image(&self, path: &Path) -> PortResult<ImagePayload>;
}

/// Filesystem-backed image source.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsImageSource;

impl ImageSource for FsImageSource {
    fn read_image(&self, path: &Path) -> PortResult<ImagePayload> {
        let bytes = std::fs::read(path)?;
        let detected = image::guess_format(&bytes)
            .map_err(|e| PortError::UnsupportedFormat(e.to_string()))?;
        let format = match detected {
            image::ImageFormat::Png => ImageFormat::Png,
            image::ImageFormat::Jpeg => ImageFormat::Jpeg,
            image::ImageFormat::WebP => ImageFormat::WebP,
            other => return Err(PortError::UnsupportedFormat(format!("{other:?}"))),
        };
        Ok(ImagePayload::from_bytes(format, &bytes))
    }
}

/// One active speech capture: a finite, cancellable sequence of recognized
/// fragments.
#[async_trait]
pub trait DictationSession: Send {
    /// The next recognized fragment, or `None` once capture has finished or
    /// was cancelled.
    async fn next_fragment(&mut self) -> Option<String>;

    /// Stop capture; subsequent [`Self::next_fragment`] calls return `None`.
    fn cancel(&mut self);
}

/// Scripted dictation session for tests and headless environments.
#[derive(Debug, Default)]
pub struct ScriptedDictation {
    fragments: VecDeque<String>,
    cancelled: bool,
}

impl ScriptedDictation {
    /// Create a session that yields the given fragments in order.
    #[must_use]
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
            cancelled: false,
        }
    }
}

#[async_trait]
impl DictationSession for ScriptedDictation {
    async fn next_fragment(&mut self) -> Option<String> {
        if self.cancelled {
            return None;
        }
        self.fragments.pop_front()
    }

    fn cancel(&mut self) {
        self.cancelled = true;
        self.fragments.clear();
    }
}

/// Hands a printable HTML document to the platform's print facility.
pub trait PrintSink {
    /// Print the document.
    ///
    /// # Errors
    ///
    /// Returns [`PortError::Print`] (or [`PortError::Io`]) when the platform
    /// rejects the document.
    fn print(&self, html: &str) -> PortResult<()>;
}

/// Writes printable documents to a file - a headless stand-in for a print
/// dialog.
#[derive(Debug, Clone)]
pub struct FilePrintSink {
    path: PathBuf,
}

impl FilePrintSink {
    /// Create a sink writing to `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Where documents are written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PrintSink for FilePrintSink {
    fn print(&self, html: &str) -> PortResult<()> {
        std::fs::write(&self.path, html)?;
        tracing::info!("Wrote printable document to {}", self.path.display());
        Ok(())
    }
}
