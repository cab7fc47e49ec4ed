//! The dispatch table registry itself: opcode-keyed storage that owns
//! handler records and, conditionally, their return buffers.
//!
//! The original C implementation stringifies each `u32` opcode to use
//! a general-purpose string-keyed hash table (`zhash`). There's no
//! reason to pay that cost in Rust: [`DispatchTable`] keys its
//! `HashMap` directly on `u32`, and the textual hex encoding lives
//! separately in [`crate::keyenc`] for callers that need it at a wire
//! or logging boundary.

use std::collections::HashMap;

use crate::config::TableConfig;
use crate::error::{DispatchError, Result};
use crate::handler::OpHandlerRecord;
use crate::hook::{TableView, ValidationHook};
use crate::opdesc::OpDesc;

/// Opcode-keyed registry of handler records.
///
/// Owns every [`crate::handler::OpHandlerRecord`] it holds and,
/// conditionally on each operation's [`crate::RetOwner`], the return
/// buffer that goes with it. Borrows the descriptors it's given (they
/// must outlive the table) and the validation hook.
pub struct DispatchTable<'a, Ctx, H: ValidationHook<Ctx>> {
    pub(crate) entries: HashMap<u32, OpHandlerRecord<'a, Ctx>>,
    pub(crate) hook: &'a H,
}

impl<'a, Ctx, H: ValidationHook<Ctx>> DispatchTable<'a, Ctx, H> {
    /// Create an empty table bound to a validation hook.
    #[must_use]
    pub fn new(hook: &'a H) -> Self {
        Self::with_config(hook, TableConfig::default())
    }

    /// Create an empty table with a capacity hint.
    #[must_use]
    pub fn with_config(hook: &'a H, config: TableConfig) -> Self {
        log::trace!(
            "creating dispatch table (initial_capacity = {})",
            config.initial_capacity
        );
        Self {
            entries: HashMap::with_capacity(config.initial_capacity),
            hook,
        }
    }

    /// Register `op`.
    ///
    /// Allocates its table-owned return buffer if called for by
    /// `op.retval_owner`. A duplicate opcode is rejected with
    /// [`DispatchError::Alloc`], matching the original source's
    /// behavior (a second insert is refused by the underlying map).
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Alloc`] if `op.opcode` is already
    /// registered.
    pub fn insert(&mut self, op: &'a OpDesc<'a, Ctx>) -> Result<()> {
        if self.entries.contains_key(&op.opcode) {
            log::trace!("opcode {} already registered, rejecting insert", op.opcode);
            return Err(DispatchError::Alloc);
        }
        log::trace!(
            "registering \"{}\" (opcode {}) into dispatch table",
            op.name,
            op.opcode
        );
        self.entries.insert(op.opcode, OpHandlerRecord::new(op));
        Ok(())
    }

    /// Register every descriptor in `ops`, in order.
    ///
    /// Stops at the first failure and returns it; already-inserted
    /// entries remain registered (insertion is transactional per entry,
    /// not across the whole batch).
    ///
    /// # Errors
    ///
    /// Returns the first [`DispatchError`] produced by [`Self::insert`].
    pub fn insert_all(&mut self, ops: &[&'a OpDesc<'a, Ctx>]) -> Result<()> {
        for op in ops {
            self.insert(op)?;
        }
        Ok(())
    }

    /// Remove `opcode`, freeing its table-owned return buffer.
    ///
    /// Tolerant of a missing key: removing an unregistered opcode
    /// succeeds.
    ///
    /// # Errors
    ///
    /// This implementation never fails (the original's key-encoding
    /// failure mode doesn't apply to a directly `u32`-keyed map), but
    /// keeps a `Result` return to match the dispatch-pipeline surface.
    pub fn remove(&mut self, opcode: u32) -> Result<()> {
        if let Some(mut record) = self.entries.remove(&opcode) {
            record.cleanup_args();
            log::trace!("removed opcode {opcode} from dispatch table");
        }
        Ok(())
    }

    /// Remove every registered opcode.
    pub fn remove_all(&mut self) {
        let opcodes: Vec<u32> = self.entries.keys().copied().collect();
        for opcode in opcodes {
            let _ = self.remove(opcode);
        }
    }

    /// Look up the descriptor registered for `opcode`, if any.
    #[must_use]
    pub fn lookup(&self, opcode: u32) -> Option<&'a OpDesc<'a, Ctx>> {
        self.entries.get(&opcode).map(OpHandlerRecord::op)
    }

    /// Number of registered opcodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no registered opcodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<Ctx, H: ValidationHook<Ctx>> TableView<Ctx> for DispatchTable<'_, Ctx, H> {
    fn lookup(&self, opcode: u32) -> Option<&OpDesc<'_, Ctx>> {
        self.entries.get(&opcode).map(OpHandlerRecord::op)
    }
}
