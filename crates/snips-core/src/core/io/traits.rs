use crate::core::models::frame::Frame;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Defines the interface for writing a [`Frame`] in a text coordinate format.
pub trait FrameFile {
    /// The error type for write operations.
    type Error: Error + From<io::Error>;

    /// Writes one frame to a writer.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_to(&self, frame: &Frame, writer: &mut impl Write) -> Result<(), Self::Error>;

    /// Creates (or truncates) the file at `path` and writes one frame to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or writing fails.
    fn write_to_path<P: AsRef<Path>>(&self, frame: &Frame, path: P) -> Result<(), Self::Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(frame, &mut writer)?;
        writer.flush()?;
        Ok(())
    }
}
