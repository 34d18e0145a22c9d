//! Append-only CSV log of solved queries.
//!
//! One row per successful query:
//!
//! ```text
//! Start_X,Start_Y,Goal_X,Goal_Y,Path_X,Path_Y
//! 10,5,12,5,"[12, 11, 10]","[5, 5, 5]"
//! ```
//!
//! Path columns hold the waypoints goal-first as bracketed lists. The
//! header is written only when the file is created.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::core::WorldPoint;
use crate::pathfinding::PathResult;

pub const DATASET_HEADER: &str = "Start_X,Start_Y,Goal_X,Goal_Y,Path_X,Path_Y";

const LINE_END: &str = "\r\n";

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("dataset IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One persisted query
#[derive(Clone, Debug, PartialEq)]
pub struct DatasetRecord {
    pub start: WorldPoint,
    pub goal: WorldPoint,
    pub path_x: Vec<f32>,
    pub path_y: Vec<f32>,
}

impl DatasetRecord {
    /// Record for a solved query.
    ///
    /// Returns `None` for failed searches and single-waypoint paths, which
    /// are not worth persisting.
    pub fn from_result(start: WorldPoint, goal: WorldPoint, result: &PathResult) -> Option<Self> {
        if !result.is_found() {
            return None;
        }
        Some(Self {
            start,
            goal,
            path_x: result.xs(),
            path_y: result.ys(),
        })
    }

    /// CSV row without line terminator
    pub fn to_row(&self) -> String {
        format!(
            "{},{},{},{},\"{}\",\"{}\"",
            self.start.x,
            self.start.y,
            self.goal.x,
            self.goal.y,
            format_list(&self.path_x),
            format_list(&self.path_y)
        )
    }
}

fn format_list(values: &[f32]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}

/// Buffered appender for a dataset file
pub struct DatasetWriter {
    writer: BufWriter<File>,
    rows_written: usize,
}

impl DatasetWriter {
    /// Open for appending, creating the file and header if needed
    pub fn open(path: &Path) -> Result<Self, DatasetError> {
        let exists = path.exists();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = BufWriter::new(file);
        if !exists {
            write!(writer, "{}{}", DATASET_HEADER, LINE_END)?;
        }

        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    pub fn append(&mut self, record: &DatasetRecord) -> Result<(), DatasetError> {
        write!(self.writer, "{}{}", record.to_row(), LINE_END)?;
        self.rows_written += 1;
        Ok(())
    }

    /// Rows appended through this writer
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn flush(&mut self) -> Result<(), DatasetError> {
        self.writer.flush()?;
        Ok(())
    }
}
