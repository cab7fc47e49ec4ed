//! Operation descriptors.
//!
//! An [`OpDesc`] is the immutable-once-registered metadata for one
//! operation: its opcode, a diagnostic name, its argument shape, its
//! return shape and who owns the return storage, and (possibly filled
//! in later via [`fill_desc`]) the handler function itself.

use std::cell::Cell;

use crate::argdesc::ArgDesc;
use crate::error::{DispatchError, Result};

/// Who owns the return-value buffer for an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetOwner {
    /// The registry allocates a fixed-size buffer at registration
    /// time, reuses it across calls, and frees it at removal.
    Table,
    /// The handler manages its own return storage; the registry
    /// neither allocates nor frees it, and the return pointer passed
    /// to the handler originates from the caller.
    Func,
}

/// Handler function signature.
///
/// `args` is the validated, opaque incoming payload. `ret` is bound by
/// the dispatch pipeline according to `retval_owner` before the
/// handler runs; it is `None` exactly when `retval == ARG_END`. The
/// return value is the handler's own status code, passed through
/// unchanged by [`crate::DispatchTable::call`].
pub type OpHandlerFn<Ctx> = fn(owner: &mut Ctx, args: &[u8], ret: Option<&mut [u8]>) -> i32;

/// Immutable-once-registered metadata for one operation.
///
/// The handler slot uses interior mutability so that a descriptor can
/// be built with `handler: None` and filled in later by [`fill_desc`]
/// while the registry already holds a shared reference to it — the
/// same two-phase registration the original C dispatch table allows
/// via a mutable `func_fp` field on an otherwise borrowed descriptor.
#[derive(Debug)]
pub struct OpDesc<'a, Ctx> {
    /// Opcode, unique within a single [`crate::DispatchTable`].
    pub opcode: u32,
    /// Diagnostic-only name.
    pub name: &'a str,
    /// Ordered argument descriptors.
    pub args: &'a [ArgDesc],
    /// Return-value descriptor. [`crate::ARG_END`] means "no return
    /// value".
    pub retval: ArgDesc,
    /// Who owns the return buffer.
    pub retval_owner: RetOwner,
    handler: Cell<Option<OpHandlerFn<Ctx>>>,
}

impl<'a, Ctx> OpDesc<'a, Ctx> {
    /// Construct a fully-specified descriptor, handler included.
    #[must_use]
    pub const fn new(
        opcode: u32,
        name: &'a str,
        args: &'a [ArgDesc],
        retval: ArgDesc,
        retval_owner: RetOwner,
        handler: OpHandlerFn<Ctx>,
    ) -> Self {
        Self {
            opcode,
            name,
            args,
            retval,
            retval_owner,
            handler: Cell::new(Some(handler)),
        }
    }

    /// Construct a descriptor whose handler will be bound later via
    /// [`fill_desc`].
    #[must_use]
    pub const fn unbound(
        opcode: u32,
        name: &'a str,
        args: &'a [ArgDesc],
        retval: ArgDesc,
        retval_owner: RetOwner,
    ) -> Self {
        Self {
            opcode,
            name,
            args,
            retval,
            retval_owner,
            handler: Cell::new(None),
        }
    }

    /// The currently-bound handler, if any.
    #[inline]
    #[must_use]
    pub fn handler(&self) -> Option<OpHandlerFn<Ctx>> {
        self.handler.get()
    }

    /// Bind (or rebind) the handler. Used by [`fill_desc`].
    #[inline]
    pub fn set_handler(&self, handler: OpHandlerFn<Ctx>) {
        self.handler.set(Some(handler));
    }
}

/// Bind an ordered list of handler functions onto an ordered list of
/// otherwise-complete descriptors.
///
/// Succeeds if and only if `descriptors` and `handlers` have the same
/// length. On a length mismatch, assignment still proceeds for the
/// overlapping prefix (the original source's partial-assignment
/// behavior on a mismatched pair of null-terminated arrays) before
/// [`DispatchError::NullPointer`] is returned.
pub fn fill_desc<Ctx>(
    descriptors: &[&OpDesc<'_, Ctx>],
    handlers: &[OpHandlerFn<Ctx>],
) -> Result<()> {
    let n = descriptors.len().min(handlers.len());
    for (desc, handler) in descriptors.iter().take(n).zip(handlers.iter().take(n)) {
        desc.set_handler(*handler);
    }

    if descriptors.len() == handlers.len() {
        Ok(())
    } else {
        Err(DispatchError::NullPointer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::argdesc::ARG_END;

    struct Ctx;

    fn h1(_owner: &mut Ctx, _args: &[u8], _ret: Option<&mut [u8]>) -> i32 {
        1
    }
    fn h2(_owner: &mut Ctx, _args: &[u8], _ret: Option<&mut [u8]>) -> i32 {
        2
    }

    #[test]
    fn fill_desc_even_pairing_succeeds() {
        let d1 = OpDesc::<Ctx>::unbound(1, "d1", &[], ARG_END, RetOwner::Table);
        let d2 = OpDesc::<Ctx>::unbound(2, "d2", &[], ARG_END, RetOwner::Table);

        let result = fill_desc(&[&d1, &d2], &[h1, h2]);
        assert!(result.is_ok());
        assert_eq!(d1.handler(), Some(h1 as OpHandlerFn<Ctx>));
        assert_eq!(d2.handler(), Some(h2 as OpHandlerFn<Ctx>));
    }

    #[test]
    fn fill_desc_uneven_pairing_fails_but_assigns_prefix() {
        let d1 = OpDesc::<Ctx>::unbound(1, "d1", &[], ARG_END, RetOwner::Table);
        let d2 = OpDesc::<Ctx>::unbound(2, "d2", &[], ARG_END, RetOwner::Table);

        let result = fill_desc(&[&d1, &d2], &[h1]);
        assert_eq!(result, Err(DispatchError::NullPointer));
        assert_eq!(d1.handler(), Some(h1 as OpHandlerFn<Ctx>));
        assert!(d2.handler().is_none());
    }
}
