//! Article file reading.
//!
//! Articles are usually small Markdown files, but exported collections can
//! be large; files above a threshold are memory mapped instead of read
//! into a growing buffer.

// Memory mapping requires unsafe but is sound for read-only access
#![allow(unsafe_code)]

use crate::error::{IoError, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Threshold for using memory mapping (1MB).
const MMAP_THRESHOLD: u64 = 1024 * 1024;

/// Maximum article size accepted (256MB).
pub const MAX_ARTICLE_SIZE: u64 = 256 * 1024 * 1024;

/// An opened article file.
///
/// # Examples
///
/// ```no_run
/// use vocab_rs::io::ArticleReader;
///
/// let reader = ArticleReader::open("article.md").unwrap();
/// let text = reader.read_to_string().unwrap();
/// ```
pub struct ArticleReader {
    file: File,
    size: u64,
    path: String,
}

impl ArticleReader {
    /// Opens an article file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file doesn't exist, can't be opened, or is
    /// larger than [`MAX_ARTICLE_SIZE`].
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        let path_str = path_ref.to_string_lossy().to_string();

        if !path_ref.exists() {
            return Err(IoError::FileNotFound { path: path_str }.into());
        }

        let file = File::open(path_ref).map_err(|e| IoError::ReadFailed {
            path: path_str.clone(),
            reason: e.to_string(),
        })?;

        let size = file
            .metadata()
            .map_err(|e| IoError::ReadFailed {
                path: path_str.clone(),
                reason: e.to_string(),
            })?
            .len();

        if size > MAX_ARTICLE_SIZE {
            return Err(IoError::ReadFailed {
                path: path_str,
                reason: format!("file too large: {size} bytes (max: {MAX_ARTICLE_SIZE} bytes)"),
            }
            .into());
        }

        Ok(Self {
            file,
            size,
            path: path_str,
        })
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Returns the file path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Reads the article as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns an error if reading fails or the content is not valid UTF-8.
    pub fn read_to_string(&self) -> Result<String> {
        if self.size >= MMAP_THRESHOLD {
            // Safety: the mapping is read-only and dropped before returning
            let mmap = unsafe {
                Mmap::map(&self.file).map_err(|e| IoError::MmapFailed {
                    path: self.path.clone(),
                    reason: e.to_string(),
                })?
            };
            self.decode(&mmap).map(str::to_string)
        } else {
            let bytes = self.read_direct()?;
            String::from_utf8(bytes).map_err(|e| self.utf8_error(e.utf8_error().valid_up_to()))
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn read_direct(&self) -> Result<Vec<u8>> {
        let mut file = &self.file;
        let mut buffer = Vec::with_capacity(self.size as usize);
        file.read_to_end(&mut buffer)
            .map_err(|e| IoError::ReadFailed {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;
        Ok(buffer)
    }

    fn decode<'a>(&self, bytes: &'a [u8]) -> Result<&'a str> {
        std::str::from_utf8(bytes).map_err(|e| self.utf8_error(e.valid_up_to()))
    }

    fn utf8_error(&self, offset: usize) -> crate::error::Error {
        IoError::InvalidUtf8 {
            path: self.path.clone(),
            offset,
        }
        .into()
    }
}

/// Reads an article file to a string.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
///
/// # Examples
///
/// ```no_run
/// use vocab_rs::io::read_article;
///
/// let text = read_article("article.md").unwrap();
/// ```
pub fn read_article<P: AsRef<Path>>(path: P) -> Result<String> {
    ArticleReader::open(path)?.read_to_string()
}
