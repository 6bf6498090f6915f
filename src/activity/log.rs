//! The session's network log and result panel

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock};

use tracing::{error, info, warn};
use uuid::Uuid;

use super::entry::{ActivityEntry, EntryKind, ResultRecord};
use super::transcript::{Transcript, TranscriptLine};

/// In-memory activity panels, newest first, each capped at `limit` items
///
/// When a transcript is attached every entry and result is also appended to
/// it. A transcript write failure is reported through tracing and never
/// interrupts the request being logged.
pub struct ActivityLog {
    entries: RwLock<VecDeque<ActivityEntry>>,
    results: RwLock<VecDeque<ResultRecord>>,
    limit: usize,
    transcript: Option<Transcript>,
}

impl ActivityLog {
    pub fn new(limit: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            results: RwLock::new(VecDeque::new()),
            limit: limit.max(1),
            transcript: None,
        }
    }

    /// Mirror everything to a JSONL transcript
    pub fn with_transcript(mut self, transcript: Transcript) -> Self {
        self.transcript = Some(transcript);
        self
    }

    pub fn transcript(&self) -> Option<&Transcript> {
        self.transcript.as_ref()
    }

    /// Record a log entry
    pub fn log(
        &self,
        kind: EntryKind,
        message: impl Into<String>,
        exchange: Option<Uuid>,
    ) -> ActivityEntry {
        let entry = ActivityEntry::new(kind, message, exchange);

        match kind {
            EntryKind::Error => error!(exchange = ?exchange, "{}", entry.message),
            _ => info!(kind = %kind, exchange = ?exchange, "{}", entry.message),
        }

        self.mirror(TranscriptLine::Entry(entry.clone()));
        push_capped(&self.entries, entry.clone(), self.limit);
        entry
    }

    pub fn info(&self, message: impl Into<String>) -> ActivityEntry {
        self.log(EntryKind::Info, message, None)
    }

    /// Log an outgoing request and return the exchange id for its answer
    pub fn request(&self, message: impl Into<String>) -> Uuid {
        let exchange = Uuid::new_v4();
        self.log(EntryKind::Request, message, Some(exchange));
        exchange
    }

    pub fn response(&self, exchange: Uuid, message: impl Into<String>) -> ActivityEntry {
        self.log(EntryKind::Response, message, Some(exchange))
    }

    pub fn error(&self, exchange: Option<Uuid>, message: impl Into<String>) -> ActivityEntry {
        self.log(EntryKind::Error, message, exchange)
    }

    /// Record a result panel item
    pub fn record_result(&self, record: ResultRecord) -> ResultRecord {
        self.mirror(TranscriptLine::Result(record.clone()));
        push_capped(&self.results, record.clone(), self.limit);
        record
    }

    /// Log entries, newest first
    pub fn entries(&self) -> Vec<ActivityEntry> {
        read(&self.entries)
    }

    /// Result records, newest first
    pub fn results(&self) -> Vec<ResultRecord> {
        read(&self.results)
    }

    /// The most recent result, if any
    pub fn latest_result(&self) -> Option<ResultRecord> {
        self.results
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .front()
            .cloned()
    }

    /// Empty both panels (the transcript is left alone)
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.results
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_empty()
            && self
                .results
                .read()
                .unwrap_or_else(PoisonError::into_inner)
                .is_empty()
    }

    fn mirror(&self, line: TranscriptLine) {
        if let Some(transcript) = &self.transcript {
            if let Err(e) = transcript.append(&line) {
                warn!(path = %transcript.path().display(), "transcript write failed: {}", e);
            }
        }
    }
}

fn push_capped<T>(lock: &RwLock<VecDeque<T>>, item: T, limit: usize) {
    let mut items = lock.write().unwrap_or_else(PoisonError::into_inner);
    items.push_front(item);
    items.truncate(limit);
}

fn read<T: Clone>(lock: &RwLock<VecDeque<T>>) -> Vec<T> {
    lock.read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .cloned()
        .collect()
}
