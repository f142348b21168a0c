//! Record store: load and save the whole subscription collection
//!
//! The collection is the unit of storage. It is loaded wholesale at the
//! start of an interaction and written back wholesale after a mutation;
//! there are no per-record writes.
//!
//! The flat-file layout is a CSV table with a header row:
//!
//! ```text
//! Name,Cost,Billing Cycle,Category,Renewal Date
//! Netflix,649,Monthly,Entertainment,2024-01-12
//! ```

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::models::{BillingCycle, Category, Subscription};
use crate::normalize::parse_cost;

/// Column headers, in order
pub const HEADERS: [&str; 5] = ["Name", "Cost", "Billing Cycle", "Category", "Renewal Date"];

/// Storage backend for the subscription collection
pub trait SubscriptionStore {
    /// Load all records in stored order (empty if nothing is stored yet)
    fn load(&self) -> Result<Vec<Subscription>>;

    /// Replace the stored collection
    fn save(&mut self, records: &[Subscription]) -> Result<()>;
}

/// One table row, every cell kept as text until coerced
#[derive(Debug, Default, Serialize, Deserialize)]
struct Row {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Cost", default)]
    cost: String,
    #[serde(rename = "Billing Cycle", default)]
    billing_cycle: String,
    #[serde(rename = "Category", default)]
    category: String,
    #[serde(rename = "Renewal Date", default)]
    renewal_date: String,
}

impl From<Row> for Subscription {
    fn from(row: Row) -> Self {
        let billing_cycle = row.billing_cycle.parse::<BillingCycle>().ok();
        if billing_cycle.is_none() && !row.billing_cycle.is_empty() {
            debug!(service = %row.name, cycle = %row.billing_cycle, "Unrecognized billing cycle");
        }

        Self {
            cost: parse_cost(&row.cost),
            billing_cycle,
            category: Category::parse_lossy(&row.category),
            renewal_date: row.renewal_date.trim().to_string(),
            name: row.name,
        }
    }
}

impl From<&Subscription> for Row {
    fn from(sub: &Subscription) -> Self {
        Self {
            name: sub.name.clone(),
            cost: sub.cost.to_string(),
            billing_cycle: sub
                .billing_cycle
                .map(|c| c.label().to_string())
                .unwrap_or_default(),
            category: sub.category.label().to_string(),
            renewal_date: sub.renewal_date.clone(),
        }
    }
}

/// Parse a CSV table into records, coercing malformed cells
pub fn read_records<R: Read>(reader: R) -> Result<Vec<Subscription>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();

    let mut records = Vec::new();
    for result in rdr.records() {
        let mut record = result?;
        // Short rows read as empty trailing cells, long rows drop the extras
        while record.len() < headers.len() {
            record.push_field("");
        }
        record.truncate(headers.len());

        let row: Row = record.deserialize(Some(&headers))?;
        records.push(Subscription::from(row));
    }

    Ok(records)
}

/// Write records as a CSV table with a header row
pub fn write_records<W: Write>(writer: W, records: &[Subscription]) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    // Written explicitly so an empty collection still gets a header row
    wtr.write_record(HEADERS)?;
    for sub in records {
        wtr.serialize(Row::from(sub))?;
    }
    wtr.flush()?;

    Ok(())
}

/// CSV file store
pub struct CsvStore {
    path: PathBuf,
}

impl CsvStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Directory the temp file is created in, so the final rename stays on one filesystem
    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

impl SubscriptionStore for CsvStore {
    fn load(&self) -> Result<Vec<Subscription>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No store file yet");
            return Ok(vec![]);
        }

        let file = File::open(&self.path)?;
        let records = read_records(BufReader::new(file)).map_err(|e| {
            Error::Store(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(path = %self.path.display(), count = records.len(), "Loaded subscriptions");
        Ok(records)
    }

    fn save(&mut self, records: &[Subscription]) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(self.parent_dir())?;
        write_records(tmp.as_file_mut(), records)?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        info!(path = %self.path.display(), count = records.len(), "Saved subscriptions");
        Ok(())
    }
}

/// In-memory store
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<Subscription>,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Subscription>) -> Self {
        Self { records, saves: 0 }
    }

    pub fn records(&self) -> &[Subscription] {
        &self.records
    }

    /// Number of times the collection has been saved
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl SubscriptionStore for MemoryStore {
    fn load(&self) -> Result<Vec<Subscription>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Subscription]) -> Result<()> {
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }
}
