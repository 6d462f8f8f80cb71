//! Streamed downloads with progress reporting
//!
//! The transfer itself sits behind the `ByteSource` trait so the file writing,
//! status handling and progress accounting can run against an in-memory source.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;
use log::{debug, error, info};

use crate::errors::{MapError, MapResult};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Default number of bytes read per chunk
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Response produced by a byte source
pub struct FetchResponse {
    /// HTTP-style status code
    pub status: u16,
    /// Total body length when the source reports one
    pub total_length: Option<u64>,
    /// Body stream
    pub body: Box<dyn Read>,
}

/// Anything that can open a byte stream for a URL
pub trait ByteSource {
    /// Open `url` for reading
    fn fetch(&self, url: &str) -> MapResult<FetchResponse>;
}

/// Blocking HTTP source backed by reqwest
pub struct HttpSource {
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Create an HTTP source with the given request timeout
    pub fn new(timeout: Duration) -> MapResult<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(HttpSource { client })
    }
}

impl ByteSource for HttpSource {
    fn fetch(&self, url: &str) -> MapResult<FetchResponse> {
        let response = self.client.get(url).send()?;
        Ok(FetchResponse {
            status: response.status().as_u16(),
            total_length: response.content_length(),
            body: Box::new(response),
        })
    }
}

/// Downloads resources from a byte source into files
pub struct Downloader<'a, S: ByteSource> {
    source: S,
    logger: &'a Logger,
    chunk_size: usize,
    show_progress: bool,
}

impl<'a, S: ByteSource> Downloader<'a, S> {
    /// Create a new downloader
    ///
    /// # Arguments
    /// * `source` - Where bytes come from
    /// * `logger` - Logger for recording operations
    pub fn new(source: S, logger: &'a Logger) -> Self {
        Downloader {
            source,
            logger,
            chunk_size: DEFAULT_CHUNK_SIZE,
            show_progress: true,
        }
    }

    /// Set the read chunk size (values of 0 are raised to 1)
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Enable or disable the terminal progress bar
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Download `url` into `save_path`
    ///
    /// A 404 response is reported as `DownloadFailed` carrying the file name of
    /// `save_path`; any other non-success status fails the same way.
    ///
    /// # Arguments
    /// * `url` - Resource to download
    /// * `save_path` - Destination file
    /// * `label` - Optional name shown next to the progress bar
    ///
    /// # Returns
    /// The number of bytes written
    pub fn download(&self, url: &str, save_path: &Path, label: Option<&str>) -> MapResult<u64> {
        let file_name = save_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| save_path.display().to_string());

        let response = self.source.fetch(url)?;
        if response.status == 404 {
            error!("DownloadError: {}", save_path.display());
            self.logger.log(&format!("DownloadError: {} not found at {}", file_name, url))?;
            return Err(MapError::DownloadFailed(file_name));
        }
        if !(200..300).contains(&response.status) {
            error!("DownloadError: {} returned status {}", url, response.status);
            self.logger.log(&format!("DownloadError: {} status {}", file_name, response.status))?;
            return Err(MapError::DownloadFailed(format!("{} (status {})", file_name, response.status)));
        }

        let description = format!("Downloading {}", label.unwrap_or(&file_name));
        let tracker = if self.show_progress {
            ProgressTracker::new(response.total_length, &description)
        } else {
            ProgressTracker::hidden()
        };
        info!("{} from {}", description, url);

        let mut body = response.body;
        let mut writer = BufWriter::new(File::create(save_path)?);
        let mut buffer = vec![0u8; self.chunk_size];
        let mut written: u64 = 0;

        loop {
            let n = match body.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    tracker.abandon("Failed");
                    return Err(MapError::IoError(e));
                }
            };
            writer.write_all(&buffer[..n])?;
            written += n as u64;
            tracker.increment(n as u64);
        }
        writer.flush()?;
        tracker.finish();

        debug!("Wrote {} bytes to {}", written, save_path.display());
        self.logger.log(&format!("Downloaded {} ({} bytes)", file_name, written))?;
        Ok(written)
    }
}
