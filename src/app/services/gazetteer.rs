//! Streaming gazetteer reader and nearest-place search
//!
//! The dataset handle owns nothing but the file path; every scan opens an
//! independent read pass over the file and parses records lazily, one line
//! at a time, as the consumer pulls them. Consumers that prefer a pipeline
//! can have the same records pushed into a bounded channel instead. The
//! nearest-place query drives one full scan and keeps a running minimum.

use crate::app::models::Place;
use crate::app::services::geo::{Coordinate, great_circle_distance};
use crate::app::services::place_parser::parse_place;
use crate::constants::PLACE_CHANNEL_CAPACITY;
use crate::{Error, Result};

use futures::Stream;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Handle to a gazetteer file
///
/// Construction performs no I/O; the file is first touched when a scan
/// begins, which is where open errors surface. Each scan owns its own file
/// handle and cursor, so concurrently active scans over one handle do not
/// interfere with each other.
#[derive(Debug, Clone)]
pub struct Gazetteer {
    /// Path to the tab-separated gazetteer file
    path: PathBuf,
}

/// Lazy, forward-only stream of parsed records from one read pass
///
/// Yields `Result<Place>` in file order, every line parsed, no header
/// skipping. Dropping the stream early closes the underlying file.
#[derive(Debug)]
pub struct PlaceStream {
    lines: Lines<BufReader<File>>,
    line_number: usize,
}

impl Gazetteer {
    /// Create a handle for the gazetteer file at `path` without opening it
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Begin a new read pass and return the lazy record stream.
    ///
    /// Restartable at the handle level: every call opens a fresh pass from
    /// the first line. A missing or unreadable file surfaces here as
    /// [`Error::Io`], not at handle construction.
    pub async fn places(&self) -> Result<PlaceStream> {
        let file = File::open(&self.path).await.map_err(|e| {
            Error::io(
                format!("failed to open gazetteer file {}", self.path.display()),
                e,
            )
        })?;

        debug!("Starting scan of {}", self.path.display());
        Ok(PlaceStream {
            lines: BufReader::new(file).lines(),
            line_number: 0,
        })
    }

    /// Push-style delivery: spawn a producer task that parses records and
    /// sends them into a bounded channel.
    ///
    /// Output is identical to [`Gazetteer::places`], delivered to a
    /// downstream consumer instead of pulled. The channel bound provides
    /// backpressure; the producer stops after sending an error (fail-fast)
    /// or when the receiver is dropped, releasing the file either way.
    pub fn stream_places(&self) -> mpsc::Receiver<Result<Place>> {
        let (tx, rx) = mpsc::channel(PLACE_CHANNEL_CAPACITY);
        let gazetteer = self.clone();

        tokio::spawn(async move {
            let mut stream = match gazetteer.places().await {
                Ok(stream) => stream,
                Err(e) => {
                    let _ = tx.send(Err(e)).await;
                    return;
                }
            };

            let mut delivered = 0usize;
            while let Some(result) = stream.next_place().await {
                let failed = result.is_err();
                if tx.send(result).await.is_err() {
                    debug!(
                        "Place consumer dropped after {} records, stopping scan",
                        delivered
                    );
                    return;
                }
                if failed {
                    return;
                }
                delivered += 1;
            }
            debug!("Pushed {} records from {}", delivered, gazetteer.path.display());
        });

        rx
    }

    /// Find the record closest to `target` by great-circle distance.
    ///
    /// Performs one full linear scan; ties keep the record seen first.
    /// Returns `Ok(None)` for an empty dataset. Malformed records and read
    /// failures abort the scan with the underlying error.
    pub async fn nearest(&self, target: &impl Coordinate) -> Result<Option<Place>> {
        let mut stream = self.places().await?;

        let mut best: Option<(Place, f64)> = None;
        let mut scanned = 0usize;

        while let Some(result) = stream.next_place().await {
            let place = result?;
            scanned += 1;

            let distance = great_circle_distance(&place, target);
            match &best {
                None => best = Some((place, distance)),
                Some((_, best_distance)) if distance < *best_distance => {
                    best = Some((place, distance));
                }
                _ => {}
            }
        }

        info!(
            "Nearest-place scan over {} visited {} records",
            self.path.display(),
            scanned
        );
        Ok(best.map(|(place, _)| place))
    }
}

impl PlaceStream {
    /// Pull the next record, or `None` once the file is exhausted.
    ///
    /// A malformed line yields `Some(Err(..))` immediately; the stream does
    /// not skip it. The caller decides whether to abort or keep pulling.
    pub async fn next_place(&mut self) -> Option<Result<Place>> {
        match self.lines.next_line().await {
            Ok(Some(line)) => {
                self.line_number += 1;
                Some(parse_place(&line, self.line_number))
            }
            Ok(None) => None,
            Err(e) => Some(Err(Error::io("failed to read gazetteer line", e))),
        }
    }

    /// 1-based number of the last line pulled from the file
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// Implement Stream for pull-based async iteration
impl Stream for PlaceStream {
    type Item = Result<Place>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let me = self.get_mut();
        match Pin::new(&mut me.lines).poll_next_line(cx) {
            Poll::Ready(Ok(Some(line))) => {
                me.line_number += 1;
                Poll::Ready(Some(parse_place(&line, me.line_number)))
            }
            Poll::Ready(Ok(None)) => Poll::Ready(None),
            Poll::Ready(Err(e)) => {
                Poll::Ready(Some(Err(Error::io("failed to read gazetteer line", e))))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}
