//! Range and null policy checks applied after extraction.

use crate::{EntityIdError, MAX_NUM, MAX_REALM, MAX_SHARD};

/// Fields extracted from raw input, not yet range-checked.
///
/// `u64` holds every value the accepted grammars can produce: at most ten
/// decimal digits, nineteen for the packed form, or sixteen hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawParts {
    pub shard: u64,
    pub realm: u64,
    pub num: u64,
}

impl RawParts {
    /// Returns true if any field exceeds its bit width.
    pub fn exceeds_range(&self) -> bool {
        self.shard > MAX_SHARD || self.realm > MAX_REALM || self.num > MAX_NUM
    }
}

/// Why raw input was rejected. Converted to an [`EntityIdError`] only once
/// the caller decides to surface it, so the error is built lazily.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    Malformed,
    OutOfRange,
}

impl Rejection {
    pub fn into_error(self, input: &str, parameter: Option<&str>) -> EntityIdError {
        match self {
            Rejection::Malformed => EntityIdError::malformed(input, parameter),
            Rejection::OutOfRange => EntityIdError::out_of_range(input, parameter),
        }
    }
}

/// Narrows extracted fields to their storage widths.
pub(crate) fn check_range(parts: RawParts) -> Result<(u16, u16, u32), Rejection> {
    if parts.exceeds_range() {
        return Err(Rejection::OutOfRange);
    }
    let shard = u16::try_from(parts.shard).map_err(|_| Rejection::OutOfRange)?;
    let realm = u16::try_from(parts.realm).map_err(|_| Rejection::OutOfRange)?;
    let num = u32::try_from(parts.num).map_err(|_| Rejection::OutOfRange)?;
    Ok((shard, realm, num))
}

/// Applies the null policy. Present input is passed through for parsing;
/// absent input becomes `Ok(None)` when nullable and an error otherwise.
pub(crate) fn check_null<T>(
    raw: Option<T>,
    nullable: bool,
    parameter: Option<&str>,
) -> Result<Option<T>, EntityIdError> {
    match raw {
        Some(value) => Ok(Some(value)),
        None if nullable => Ok(None),
        None => Err(EntityIdError::NullNotAllowed {
            parameter: parameter.map(str::to_string),
        }),
    }
}
