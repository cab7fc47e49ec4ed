//! Dispatch-table configuration.
//!
//! A small, optional configuration surface — the table itself has no
//! environment variables or persisted state (per the core's external
//! interface contract), but a host application assembling one from a
//! config file still needs a plain-data struct to deserialize into.
//! Mirrors `woflang-core`'s pattern of a `serde` feature gating
//! `Serialize`/`Deserialize` derives on otherwise-plain types.

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Construction-time tuning for a [`crate::DispatchTable`].
pub struct TableConfig {
    /// Pre-allocated capacity hint for the opcode map.
    pub initial_capacity: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
        }
    }
}

impl TableConfig {
    /// Build a config with a given capacity hint.
    #[must_use]
    pub const fn with_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_nonzero_capacity() {
        assert_eq!(TableConfig::default().initial_capacity, 16);
    }

    #[test]
    fn with_capacity_overrides_default() {
        assert_eq!(TableConfig::with_capacity(256).initial_capacity, 256);
    }
}
