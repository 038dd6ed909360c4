//! The enabled mask: which candidate abilities may be selected.
//!
//! Position `i` in the mask corresponds to candidate ability `i` in the
//! host's list. `true` means selectable, `false` means the cursor skips
//! the entry and confirmation is impossible on it.

use crate::error::{ConfigError, Result};

/// Largest candidate list a packed flags word can describe.
///
/// Flags words are `u32`. A 16-bit item-flags word widens losslessly.
pub const MAX_CANDIDATES: usize = u32::BITS as usize;

/// Per-candidate selectability for one menu activation.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EnabledMask(Vec<bool>);

impl EnabledMask {
    /// Create a mask from an explicit boolean sequence.
    ///
    /// An empty sequence is accepted here and rejected when a menu is
    /// initialized from it.
    pub fn new(entries: Vec<bool>) -> Self {
        Self(entries)
    }

    /// Unpack a flags word: bit `i` set means candidate `i` is enabled.
    ///
    /// Bits at positions `>= len` are ignored. A 16-bit word is passed
    /// as `u32::from(word)`; `len` may be at most [`MAX_CANDIDATES`].
    pub fn from_bits(bits: u32, len: usize) -> Result<Self> {
        if len == 0 {
            return Err(ConfigError::Empty.into());
        }
        if len > MAX_CANDIDATES {
            return Err(ConfigError::TooManyCandidates {
                len,
                max: MAX_CANDIDATES,
            }
            .into());
        }
        Ok(Self((0..len).map(|i| bits & (1 << i) != 0).collect()))
    }

    /// Pack the mask back into a flags word. Entries past
    /// [`MAX_CANDIDATES`] are dropped.
    pub fn to_bits(&self) -> u32 {
        self.0
            .iter()
            .take(MAX_CANDIDATES)
            .enumerate()
            .filter(|&(_, &on)| on)
            .fold(0, |acc, (i, _)| acc | (1 << i))
    }

    /// Check the mask against the number of candidates the host expects.
    pub fn expect_len(self, expected: usize) -> Result<Self> {
        if self.0.len() != expected {
            return Err(ConfigError::LengthMismatch {
                expected,
                actual: self.0.len(),
            }
            .into());
        }
        Ok(self)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether candidate `i` is selectable. Out-of-range indices are not.
    #[inline]
    pub fn is_enabled(&self, i: usize) -> bool {
        self.0.get(i).copied().unwrap_or(false)
    }

    /// Number of selectable candidates.
    pub fn enabled_count(&self) -> usize {
        self.0.iter().filter(|&&on| on).count()
    }

    /// Lowest selectable index, if any.
    pub fn first_enabled(&self) -> Option<usize> {
        self.0.iter().position(|&on| on)
    }

    /// Iterate over the selectable indices in ascending order.
    pub fn iter_enabled(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &on)| on.then_some(i))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for EnabledMask {
    fn from(entries: Vec<bool>) -> Self {
        Self::new(entries)
    }
}

impl<const N: usize> From<[bool; N]> for EnabledMask {
    fn from(entries: [bool; N]) -> Self {
        Self::new(entries.to_vec())
    }
}
