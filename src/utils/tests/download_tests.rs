//! Tests for downloads against an in-memory byte source

use std::fs;
use std::io::Cursor;

use crate::errors::{MapError, MapResult};
use crate::utils::download::{ByteSource, Downloader, FetchResponse};
use crate::utils::logger::Logger;

struct StaticSource {
    status: u16,
    body: Vec<u8>,
    report_length: bool,
}

impl ByteSource for StaticSource {
    fn fetch(&self, _url: &str) -> MapResult<FetchResponse> {
        Ok(FetchResponse {
            status: self.status,
            total_length: if self.report_length { Some(self.body.len() as u64) } else { None },
            body: Box::new(Cursor::new(self.body.clone())),
        })
    }
}

#[test]
fn test_download_writes_every_chunk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model.h5");
    let logger = Logger::in_memory();
    let body: Vec<u8> = (0..1000u32).map(|i| (i % 251) as u8).collect();
    let source = StaticSource { status: 200, body: body.clone(), report_length: true };

    let written = Downloader::new(source, &logger)
        .with_chunk_size(128)
        .with_progress(false)
        .download("https://example.org/model.h5", &path, Some("model"))
        .unwrap();

    assert_eq!(written, 1000);
    assert_eq!(fs::read(&path).unwrap(), body);
    assert!(logger.contains("Downloaded model.h5 (1000 bytes)"));
}

#[test]
fn test_download_without_length() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weights.json");
    let logger = Logger::in_memory();
    let source = StaticSource { status: 200, body: b"{}".to_vec(), report_length: false };

    let written = Downloader::new(source, &logger)
        .with_progress(false)
        .download("https://example.org/weights.json", &path, None)
        .unwrap();
    assert_eq!(written, 2);
}

#[test]
fn test_not_found_reports_file_name() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.zip");
    let logger = Logger::in_memory();
    let source = StaticSource { status: 404, body: Vec::new(), report_length: true };

    let result = Downloader::new(source, &logger)
        .with_progress(false)
        .download("https://example.org/missing.zip", &path, None);

    assert!(matches!(result, Err(MapError::DownloadFailed(name)) if name == "missing.zip"));
    assert!(!path.exists());
    assert!(logger.contains("DownloadError"));
}

#[test]
fn test_server_error_fails() {
    let dir = tempfile::tempdir().unwrap();
    let logger = Logger::in_memory();
    let source = StaticSource { status: 500, body: Vec::new(), report_length: true };

    let result = Downloader::new(source, &logger)
        .with_progress(false)
        .download("https://example.org/a.bin", &dir.path().join("a.bin"), None);
    assert!(matches!(result, Err(MapError::DownloadFailed(_))));
}
