use std::{
    fs::{File, OpenOptions},
    io::{self, BufRead, BufReader, BufWriter, Write},
};

use crate::error::RuntimeError;

/// A file opened for reading, one line at a time.
///
/// The handle is opened eagerly by [`ReadFile::open`] and released by
/// [`ReadFile::close`]. Values share a `ReadFile` through `Rc<RefCell<_>>`, so
/// closing it through one variable closes it for every copy.
#[derive(Debug)]
pub struct ReadFile {
    name:   String,
    reader: Option<BufReader<File>>,
}

impl ReadFile {
    /// Opens `name` for reading.
    ///
    /// # Errors
    /// Returns `RuntimeError::File` if the file cannot be opened.
    pub fn open(name: &str) -> Result<Self, RuntimeError> {
        let file = File::open(name).map_err(|source| file_error(name, source))?;
        Ok(Self { name:   name.to_string(),
                  reader: Some(BufReader::new(file)), })
    }
    /// The file name the handle was opened with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Whether the handle is still open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.reader.is_some()
    }
    /// Reads the next line without its line terminator.
    ///
    /// # Returns
    /// `Ok(None)` once the end of the file is reached.
    ///
    /// # Errors
    /// Returns `RuntimeError::FileClosed` if the handle was closed, or
    /// `RuntimeError::File` if reading fails.
    pub fn read_line(&mut self) -> Result<Option<String>, RuntimeError> {
        let Some(reader) = self.reader.as_mut() else {
            return Err(RuntimeError::FileClosed { name: self.name.clone() });
        };

        let mut line = String::new();
        let read = reader.read_line(&mut line)
                         .map_err(|source| file_error(&self.name, source))?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
    /// Releases the handle. Closing twice is harmless.
    pub fn close(&mut self) {
        self.reader = None;
    }
}

/// A file opened for appending lines.
///
/// Missing files are created. Written lines are buffered until the handle is
/// closed.
#[derive(Debug)]
pub struct WriteFile {
    name:   String,
    writer: Option<BufWriter<File>>,
}

impl WriteFile {
    /// Opens `name` for appending, creating it if needed.
    ///
    /// # Errors
    /// Returns `RuntimeError::File` if the file cannot be opened.
    pub fn open(name: &str) -> Result<Self, RuntimeError> {
        let file = OpenOptions::new().append(true)
                                     .create(true)
                                     .open(name)
                                     .map_err(|source| file_error(name, source))?;
        Ok(Self { name:   name.to_string(),
                  writer: Some(BufWriter::new(file)), })
    }
    /// The file name the handle was opened with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Whether the handle is still open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.writer.is_some()
    }
    /// Appends `text` followed by a newline.
    ///
    /// # Errors
    /// Returns `RuntimeError::FileClosed` if the handle was closed, or
    /// `RuntimeError::File` if writing fails.
    pub fn write_line(&mut self, text: &str) -> Result<(), RuntimeError> {
        let Some(writer) = self.writer.as_mut() else {
            return Err(RuntimeError::FileClosed { name: self.name.clone() });
        };
        writeln!(writer, "{text}").map_err(|source| file_error(&self.name, source))
    }
    /// Flushes and releases the handle. Closing twice is harmless.
    ///
    /// # Errors
    /// Returns `RuntimeError::File` if the buffered lines cannot be flushed.
    pub fn close(&mut self) -> Result<(), RuntimeError> {
        match self.writer.take() {
            Some(mut writer) => writer.flush().map_err(|source| file_error(&self.name, source)),
            None => Ok(()),
        }
    }
}

fn file_error(name: &str, source: io::Error) -> RuntimeError {
    RuntimeError::File { name: name.to_string(),
                         source }
}
