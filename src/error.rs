//! Error types for the dispatch table.
//!
//! Mirrors the original C implementation's `hutils_err_e` taxonomy
//! (`HUTILS_ERR_ALLOC`, `HUTILS_ERR_NULL_POINTER`,
//! `HUTILS_ERR_NO_FUNC_REG`) but as a proper `thiserror` enum instead
//! of a raw integer code, plus a `Rejected` variant that carries a
//! validation hook's own message through verbatim.

use thiserror::Error;

/// Result type alias for dispatch-table operations.
pub type Result<T, E = DispatchError> = std::result::Result<T, E>;

/// Errors produced by the dispatch table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Resource exhaustion: allocation failure, or (per the original
    /// source's behavior) a duplicate opcode rejected by the
    /// underlying map on insert.
    #[error("allocation failed or opcode already registered")]
    Alloc,

    /// Lookup miss during dispatch, `set_ret`, or `cleanup_args`.
    #[error("no function registered for this opcode")]
    NotRegistered,

    /// A consistency violation: mismatched `retval`/`ret` pairing, or
    /// an uneven `fill_desc` pairing.
    #[error("null pointer or inconsistent argument pairing")]
    NullPointer,

    /// The validation hook rejected the payload. Carries the hook's
    /// own message through unchanged.
    #[error("payload rejected: {0}")]
    Rejected(String),

    /// Reserved for validation hooks that need to surface an I/O
    /// failure (not produced by the core itself).
    #[error("I/O error: {0}")]
    Io(String),
}
