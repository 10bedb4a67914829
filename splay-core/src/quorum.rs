//! Quorum specification parsing and per-batch thresholds
//!
//! A quorum spec is either a percentage (`"50%"`) of the batch or an absolute
//! node count (`"145"`). Percentages are resolved against each batch's size;
//! counts are forwarded unmodified (the server rejects a quorum the batch
//! cannot meet, so no clamping happens here).

use std::str::FromStr;

use thiserror::Error;

/// Errors from parsing a quorum specification
#[derive(Debug, Error)]
pub enum QuorumError {
    /// Spec is neither a percentage nor an integer count
    #[error("Invalid quorum spec '{spec}': expected a percentage (e.g. 50%) or a count (e.g. 145)")]
    Invalid { spec: String },

    /// Percentage outside 0-100
    #[error("Quorum percentage {percent}% is out of range (0-100)")]
    OutOfRange { percent: u32 },
}

/// Parsed quorum specification, immutable once built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuorumSpec {
    /// Percentage of the batch that must succeed (0-100)
    Percentage(u32),
    /// Absolute number of nodes that must succeed
    Count(u32),
}

impl FromStr for QuorumSpec {
    type Err = QuorumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(digits) = s.strip_suffix('%') {
            let percent: u32 = digits.trim().parse().map_err(|_| QuorumError::Invalid {
                spec: s.to_string(),
            })?;

            if percent > 100 {
                return Err(QuorumError::OutOfRange { percent });
            }

            Ok(Self::Percentage(percent))
        } else {
            s.trim()
                .parse()
                .map(Self::Count)
                .map_err(|_| QuorumError::Invalid {
                    spec: s.to_string(),
                })
        }
    }
}

impl QuorumSpec {
    /// Minimum success count for a batch of `batch_size` nodes.
    ///
    /// Percentages round up and never drop below 1; counts pass through
    /// unmodified regardless of batch size.
    pub fn threshold(&self, batch_size: usize) -> u32 {
        match self {
            Self::Percentage(percent) => {
                let scaled = batch_size as u64 * *percent as u64;
                (scaled.div_ceil(100)).max(1) as u32
            }
            Self::Count(count) => *count,
        }
    }
}

impl std::fmt::Display for QuorumSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percentage(percent) => write!(f, "{}%", percent),
            Self::Count(count) => write!(f, "{}", count),
        }
    }
}
