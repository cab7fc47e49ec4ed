//! The validate-then-invoke dispatch pipeline.
//!
//! Mirrors the original source's `disp_check_args` / `disp_call` /
//! `disp_check_call` split, but `check_call` is not written as
//! `check_args` followed by `call`: `check_args` hands back a `&mut
//! [u8]` borrowed from the table's own record, and that borrow must
//! end before a second `&mut self` call can be made. Chaining the two
//! in separate statements doesn't type-check, and trying to route
//! around it with raw pointers would just be re-implementing the
//! original's "the returned buffer is only live until the next
//! dispatch call" caution by hand. `check_call` instead validates,
//! binds the return slot, and invokes the handler in one method body,
//! which is both the safe expression of that caution and the one the
//! borrow checker was always going to require.

use crate::argdesc::ARG_END;
use crate::error::{DispatchError, Result};
use crate::hook::ValidationHook;
use crate::registry::DispatchTable;

impl<'a, Ctx, H: ValidationHook<Ctx>> DispatchTable<'a, Ctx, H> {
    /// Validate `args` against the descriptor registered for `opcode`,
    /// then bind and return its return-value slot (see
    /// [`Self::set_ret`]).
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NotRegistered`] if `opcode` isn't
    /// registered, or whatever the validation hook rejects with.
    pub fn check_args(&mut self, opcode: u32, args: &[u8]) -> Result<Option<&mut [u8]>> {
        let op = self.lookup(opcode).ok_or(DispatchError::NotRegistered)?;
        self.hook.check_msg(&*self, op, args)?;
        self.set_ret(opcode)
    }

    /// Bind the return-value slot for `opcode`: `Some` borrowing the
    /// table-owned buffer if the operation declares one, `None` if
    /// `retval == ARG_END`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NotRegistered`] if `opcode` isn't
    /// registered, or [`DispatchError::Alloc`] if the operation
    /// declares a return value but has no buffer bound (a
    /// `RetOwner::Func` operation has no table-owned slot to hand
    /// back; its caller supplies one directly to [`Self::call`]).
    pub fn set_ret(&mut self, opcode: u32) -> Result<Option<&mut [u8]>> {
        let record = self
            .entries
            .get_mut(&opcode)
            .ok_or(DispatchError::NotRegistered)?;
        if record.op().retval == ARG_END {
            return Ok(None);
        }
        record.ret.as_deref_mut().map(Some).ok_or(DispatchError::Alloc)
    }

    /// Release the return-value slot for `opcode` back to its
    /// pre-dispatch state (a no-op for `RetOwner::Func` operations).
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NotRegistered`] if `opcode` isn't
    /// registered.
    pub fn cleanup_args(&mut self, opcode: u32) -> Result<()> {
        let record = self
            .entries
            .get_mut(&opcode)
            .ok_or(DispatchError::NotRegistered)?;
        record.cleanup_args();
        Ok(())
    }

    /// Invoke the handler registered for `opcode` directly, without
    /// validation.
    ///
    /// `ret` must be `Some` if and only if the operation's `retval !=
    /// ARG_END`; a mismatch is a consistency violation and returns
    /// `-1` without calling the handler, matching the original's
    /// `disp_call` contract.
    ///
    /// Returns `-1` if `opcode` isn't registered or has no bound
    /// handler, otherwise the handler's own status code.
    pub fn call(&self, opcode: u32, owner: &mut Ctx, args: &[u8], ret: Option<&mut [u8]>) -> i32 {
        let Some(record) = self.entries.get(&opcode) else {
            return -1;
        };
        let Some(handler) = record.op().handler() else {
            return -1;
        };
        if (record.op().retval != ARG_END) != ret.is_some() {
            return -1;
        }
        handler(owner, args, ret)
    }

    /// Validate `args`, bind the return slot, and invoke the handler
    /// for `opcode` in one step.
    ///
    /// Returns `-1` if `opcode` isn't registered, has no bound
    /// handler, or the validation hook rejects `args`; otherwise the
    /// handler's own status code. See the module documentation for why
    /// this isn't simply `check_args` followed by `call`.
    pub fn check_call(&mut self, opcode: u32, owner: &mut Ctx, args: &[u8]) -> i32 {
        let Some(op) = self.lookup(opcode) else {
            return -1;
        };
        if self.hook.check_msg(&*self, op, args).is_err() {
            return -1;
        }

        let Some(record) = self.entries.get_mut(&opcode) else {
            return -1;
        };
        let Some(handler) = record.op().handler() else {
            return -1;
        };
        let ret: Option<&mut [u8]> = if record.op().retval == ARG_END {
            None
        } else {
            match record.ret.as_deref_mut() {
                Some(slice) => Some(slice),
                None => return -1,
            }
        };
        handler(owner, args, ret)
    }
}
