//! Run journal: append-only JSON-lines record of orchestration runs.

use std::fs::{create_dir_all, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, SecondsFormat, Utc};
use serde_json::Value;

pub const JOURNAL_SUBDIR: &str = "monetization-evaluator";

pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Sink for structured run events.
pub trait Journal: Send {
    fn write_event(&mut self, event: Value);
}

fn resolve_repo_root() -> Option<PathBuf> {
    let mut cursor = std::env::current_dir().ok()?;
    loop {
        if cursor.join(".git").is_dir() {
            return Some(cursor);
        }
        if !cursor.pop() {
            return None;
        }
    }
}

/// `configured` wins when non-empty; otherwise `<repo root>/RUNS/...`.
pub fn resolve_journal_dir(configured: &str) -> PathBuf {
    let trimmed = configured.trim();
    if !trimmed.is_empty() {
        return PathBuf::from(trimmed);
    }
    if let Some(root) = resolve_repo_root() {
        return root.join("RUNS").join(JOURNAL_SUBDIR);
    }
    PathBuf::from("RUNS").join(JOURNAL_SUBDIR)
}

/// Appends events to `runs-YYYY-MM-DD.jsonl` under `dir`, one file per UTC
/// day. The day file is opened on first write and swapped when the date
/// moves on.
pub struct JsonlJournal {
    dir: PathBuf,
    day: Option<(NaiveDate, BufWriter<File>)>,
    failed_writes: u64,
}

impl JsonlJournal {
    pub fn open(dir: PathBuf) -> std::io::Result<Self> {
        create_dir_all(&dir)?;
        Ok(Self {
            dir,
            day: None,
            failed_writes: 0,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(format!("runs-{}.jsonl", date.format("%Y-%m-%d")))
    }

    /// Writes dropped because of I/O errors since the journal was opened.
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes
    }

    fn writer_for(&mut self, date: NaiveDate) -> std::io::Result<&mut BufWriter<File>> {
        match self.day.take() {
            Some((open_day, writer)) if open_day == date => {
                Ok(&mut self.day.insert((open_day, writer)).1)
            }
            previous => {
                if let Some((_, mut writer)) = previous {
                    writer.flush()?;
                }
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(self.path_for(date))?;
                Ok(&mut self.day.insert((date, BufWriter::new(file))).1)
            }
        }
    }

    /// Append `event` to the file for `date`.
    pub fn append_on(&mut self, date: NaiveDate, event: &Value) -> std::io::Result<()> {
        let line = serde_json::to_vec(event)?;
        let writer = self.writer_for(date)?;
        writer.write_all(&line)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}

impl Journal for JsonlJournal {
    fn write_event(&mut self, event: Value) {
        let today = Utc::now().date_naive();
        if let Err(e) = self.append_on(today, &event) {
            self.failed_writes += 1;
            tracing::warn!(
                "journal write to {} failed: {}",
                self.path_for(today).display(),
                e
            );
        }
    }
}

/// Keeps events in memory.
#[derive(Debug, Default)]
pub struct MemoryJournal {
    pub events: Vec<Value>,
}

impl MemoryJournal {
    /// Event names in write order.
    pub fn event_names(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| e.get("event").and_then(Value::as_str))
            .collect()
    }
}

impl Journal for MemoryJournal {
    fn write_event(&mut self, event: Value) {
        self.events.push(event);
    }
}

#[derive(Debug, Default)]
pub struct NullJournal;

impl Journal for NullJournal {
    fn write_event(&mut self, _event: Value) {}
}
