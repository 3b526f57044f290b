//! Byte budget enforced across the sequential entry iteration.
//!
//! One budget per invocation. Exceeding either ceiling fails the whole
//! operation — unlike path rejection, a size overrun means the project does
//! not fit the caller's resource contract.

use crate::error::SnapshotError;

/// Per-file and cumulative byte ceilings with a running total.
#[derive(Debug)]
pub struct TransferBudget {
    max_file_bytes: u64,
    max_total_bytes: u64,
    accepted: u64,
}

impl TransferBudget {
    pub fn new(max_file_bytes: u64, max_total_bytes: u64) -> Self {
        Self {
            max_file_bytes,
            max_total_bytes,
            accepted: 0,
        }
    }

    /// Admit one file of `size` bytes at `path`, or fail the operation.
    /// Sizes are exact encoded byte lengths, never character counts.
    pub fn admit(&mut self, path: &str, size: u64) -> Result<(), SnapshotError> {
        if size > self.max_file_bytes {
            return Err(SnapshotError::FileTooLarge {
                path: path.to_string(),
                size,
                limit: self.max_file_bytes,
            });
        }
        let total = self.accepted + size;
        if total > self.max_total_bytes {
            return Err(SnapshotError::TotalSizeExceeded {
                total,
                limit: self.max_total_bytes,
            });
        }
        self.accepted = total;
        Ok(())
    }

    /// Bytes accepted so far.
    pub fn accepted(&self) -> u64 {
        self.accepted
    }
}
