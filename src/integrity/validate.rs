// src/integrity/validate.rs
use super::checksum::checksum;
use crate::buffer::SaveBuffer;
use crate::types::{Endianness, RecordId};
use smallvec::SmallVec;
use std::fmt;

/// One integrity problem found in a record
///
/// Stored values are decoded big-endian, the console's native order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Stored checksum matches neither the computed sum nor its byte swap
    Checksum { stored: u16, computed: u16 },
    /// Stored magic matches neither form of the record's magic
    Magic { stored: u16, expected: u16 },
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fault::Checksum { stored, computed } => write!(
                f,
                "bad checksum (stored {:#06x}, computed {:#06x} or {:#06x})",
                stored,
                computed,
                computed.swap_bytes()
            ),
            Fault::Magic { stored, expected } => write!(
                f,
                "bad magic (stored {:#06x}, expected {:#06x} or {:#06x})",
                stored,
                expected,
                expected.swap_bytes()
            ),
        }
    }
}

/// Every fault of a single failing record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub record: RecordId,
    pub faults: SmallVec<[Fault; 2]>,
}

impl Diagnostic {
    pub fn has_bad_checksum(&self) -> bool {
        self.faults.iter().any(|f| matches!(f, Fault::Checksum { .. }))
    }

    pub fn has_bad_magic(&self) -> bool {
        self.faults.iter().any(|f| matches!(f, Fault::Magic { .. }))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.record)?;
        for (i, fault) in self.faults.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", fault)?;
        }
        Ok(())
    }
}

/// Outcome of checking every record of a save
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    records_checked: usize,
    diagnostics: SmallVec<[Diagnostic; 2]>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn records_checked(&self) -> usize {
        self.records_checked
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn diagnostic_for(&self, record: RecordId) -> Option<&Diagnostic> {
        self.diagnostics.iter().find(|d| d.record == record)
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "all {} records valid", self.records_checked)
        } else {
            write!(
                f,
                "{} of {} records invalid",
                self.diagnostics.len(),
                self.records_checked
            )
        }
    }
}

/// Check one record's signature, accepting either byte order
pub fn validate_record(buffer: &SaveBuffer, record: RecordId) -> Option<Diagnostic> {
    let layout = record.layout();
    let mut faults = SmallVec::new();

    let computed = checksum(buffer.record(record));
    let stored = buffer.stored_checksum(record, Endianness::Big);
    if stored != computed && stored != computed.swap_bytes() {
        faults.push(Fault::Checksum { stored, computed });
    }

    let magic = buffer.magic(record, Endianness::Big);
    if magic != layout.magic && magic != layout.swapped_magic() {
        faults.push(Fault::Magic {
            stored: magic,
            expected: layout.magic,
        });
    }

    if faults.is_empty() {
        None
    } else {
        Some(Diagnostic { record, faults })
    }
}

/// Check every record of the save, collecting all failures
///
/// Runs before the byte order is known, so every comparison accepts both the
/// native and the byte-swapped form.
pub fn validate(buffer: &SaveBuffer) -> ValidationReport {
    let mut report = ValidationReport::default();

    for record in RecordId::validation_order() {
        report.records_checked += 1;
        match validate_record(buffer, record) {
            Some(diagnostic) => {
                tracing::debug!(%record, %diagnostic, "record failed validation");
                report.diagnostics.push(diagnostic);
            }
            None => tracing::trace!(%record, "record valid"),
        }
    }

    report
}
