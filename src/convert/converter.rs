// src/convert/converter.rs
use super::swap::swap_all;
use crate::buffer::SaveBuffer;
use crate::error::{Result, SaveError};
use crate::integrity::{detect_source_endianness, validate};
use crate::types::Endianness;

/// Settings for a conversion pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Byte order to produce; `None` flips whatever the input is
    pub target: Option<Endianness>,
    /// Re-validate the output and confirm its detected byte order
    pub verify: bool,
    /// Byte order magics are decoded in during detection
    pub host: Endianness,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        ConvertConfig {
            target: None,
            verify: true,
            host: Endianness::host(),
        }
    }
}

impl ConvertConfig {
    pub fn with_target(mut self, target: Endianness) -> Self {
        self.target = Some(target);
        self
    }

    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }

    pub fn with_host(mut self, host: Endianness) -> Self {
        self.host = host;
        self
    }
}

/// What a conversion pass did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub source: Endianness,
    pub target: Endianness,
    /// False when the input was already in the target order
    pub swapped: bool,
}

/// Runs validate → detect → swap over a save buffer
///
/// Holds no state between passes, so one converter can be shared freely.
///
/// # Example
///
/// ```
/// use sm64_save_rs::{SaveBuffer, SaveConverter, Endianness};
///
/// let mut save = SaveBuffer::formatted(Endianness::Big);
/// let conversion = SaveConverter::default().convert(&mut save).unwrap();
///
/// assert_eq!(conversion.source, Endianness::Big);
/// assert_eq!(conversion.target, Endianness::Little);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SaveConverter {
    config: ConvertConfig,
}

impl SaveConverter {
    pub fn new(config: ConvertConfig) -> Self {
        SaveConverter { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Validate the save and report the byte order it was written in
    pub fn check(&self, buffer: &SaveBuffer) -> Result<Endianness> {
        let report = validate(buffer);
        if !report.is_valid() {
            tracing::debug!(%report, "save failed validation");
            return Err(SaveError::Validation(report));
        }
        Ok(detect_source_endianness(buffer, self.config.host))
    }

    /// Convert the save in place
    ///
    /// Nothing is modified unless every record validates.
    pub fn convert(&self, buffer: &mut SaveBuffer) -> Result<Conversion> {
        let source = self.check(buffer)?;
        let target = self.config.target.unwrap_or(source.opposite());

        if target == source {
            tracing::info!(%source, "save already in requested byte order");
            return Ok(Conversion {
                source,
                target,
                swapped: false,
            });
        }

        swap_all(buffer);
        tracing::info!(%source, %target, "converted save");

        if self.config.verify {
            self.verify(buffer, target)?;
        }

        Ok(Conversion {
            source,
            target,
            swapped: true,
        })
    }

    fn verify(&self, buffer: &SaveBuffer, target: Endianness) -> Result<()> {
        let detected = match self.check(buffer) {
            Ok(order) => order,
            Err(SaveError::Validation(report)) => {
                return Err(SaveError::Verification(report.to_string()))
            }
            Err(err) => return Err(err),
        };
        if detected != target {
            return Err(SaveError::Verification(format!(
                "output detected as {} endian, expected {} endian",
                detected, target
            )));
        }
        Ok(())
    }
}
