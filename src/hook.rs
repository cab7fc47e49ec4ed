//! The validation-hook capability.
//!
//! The dispatch table borrows a single validation hook for its
//! lifetime and calls it once per [`crate::DispatchTable::check_args`]
//! (and, transitively, [`crate::DispatchTable::check_call`]) to check
//! an inbound payload's shape against the descriptor it claims to
//! satisfy.

use crate::error::Result;
use crate::opdesc::OpDesc;

/// Read-only view of the table, passed to [`ValidationHook::check_msg`]
/// so a hook can consult other registered operations if it needs to,
/// without the hook trait being generic over the table's own
/// hook-type parameter (which would make it self-referential).
pub trait TableView<Ctx> {
    /// Look up a descriptor by opcode.
    fn lookup(&self, opcode: u32) -> Option<&OpDesc<'_, Ctx>>;
}

/// Capability set invoked by `check_args` to validate a payload
/// against a descriptor.
///
/// This is the one required hook method for the core; the trait
/// leaves room for additional hook methods in an extended table the
/// way the original source's `disp_table_ops_t` is a small struct of
/// function pointers that could grow more members.
pub trait ValidationHook<Ctx> {
    /// Validate `args` against `op`'s declared argument shape.
    ///
    /// # Errors
    ///
    /// Returns [`crate::DispatchError::Rejected`] (or any other
    /// variant the hook chooses) when the payload doesn't match.
    fn check_msg(&self, table: &dyn TableView<Ctx>, op: &OpDesc<'_, Ctx>, args: &[u8]) -> Result<()>;
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::{Result, TableView, ValidationHook};
    use crate::error::DispatchError;
    use crate::opdesc::OpDesc;

    /// A hook that rejects any payload shorter than the declared
    /// minimum size across all fixed-size arguments, used by the
    /// integration tests. Variable arguments are not size-checked.
    pub(crate) struct MinLenHook;

    impl<Ctx> ValidationHook<Ctx> for MinLenHook {
        fn check_msg(
            &self,
            _table: &dyn TableView<Ctx>,
            op: &OpDesc<'_, Ctx>,
            args: &[u8],
        ) -> Result<()> {
            let min_len: usize = op
                .args
                .iter()
                .filter(|a| !a.variable)
                .map(|a| a.size_of() as usize)
                .sum();
            if args.len() < min_len {
                Err(DispatchError::Rejected(format!(
                    "payload too short: expected at least {min_len} byte(s), got {}",
                    args.len()
                )))
            } else {
                Ok(())
            }
        }
    }
}
