//! # opdispatch
//!
//! A typed opcode-dispatch table: a runtime registry binding numeric
//! opcodes to handler functions, with an explicit descriptor language
//! for argument shapes and return-buffer ownership.
//!
//! This crate provides:
//! - [`ArgDesc`] / [`ARG_END`]: the shape of one argument or a return
//!   value
//! - [`OpDesc`]: immutable-once-registered per-operation metadata
//! - [`RetOwner`]: who owns an operation's return buffer
//! - [`fill_desc`]: two-phase handler binding for descriptors built
//!   before their handlers exist
//! - [`DispatchTable`]: the opcode-keyed registry and dispatch pipeline
//! - [`ValidationHook`] / [`TableView`]: the pluggable payload-shape
//!   check run before a handler executes
//! - [`DispatchError`]: the error taxonomy
//!
//! ## Concurrency
//!
//! A [`DispatchTable`] does no internal locking. It is `Send` when
//! `Ctx` and the hook are `Send`, but callers sharing one across
//! threads must supply their own synchronization — the same passive
//! stance as the original dispatch table, which assumed a single
//! owning thread per table.
//!
//! ## Example
//!
//! ```
//! use opdispatch::{ArgDesc, DispatchTable, OpDesc, RetOwner, ValidationHook, TableView, ARG_END};
//!
//! struct Ctx {
//!     total: i64,
//! }
//!
//! struct NoopHook;
//! impl ValidationHook<Ctx> for NoopHook {
//!     fn check_msg(
//!         &self,
//!         _table: &dyn TableView<Ctx>,
//!         _op: &OpDesc<'_, Ctx>,
//!         _args: &[u8],
//!     ) -> opdispatch::Result<()> {
//!         Ok(())
//!     }
//! }
//!
//! fn add(owner: &mut Ctx, args: &[u8], _ret: Option<&mut [u8]>) -> i32 {
//!     owner.total += i64::from(args[0]);
//!     0
//! }
//!
//! let hook = NoopHook;
//! let op = OpDesc::new(1, "add", &[ArgDesc::fixed(1)], ARG_END, RetOwner::Table, add);
//! let mut table = DispatchTable::new(&hook);
//! table.insert(&op).unwrap();
//!
//! let mut ctx = Ctx { total: 0 };
//! let status = table.check_call(1, &mut ctx, &[5]);
//! assert_eq!(status, 0);
//! assert_eq!(ctx.total, 5);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

mod argdesc;
mod config;
mod dispatch;
mod error;
mod handler;
mod hook;
mod keyenc;
mod opdesc;
mod registry;

pub use argdesc::{ArgDesc, ARG_END};
pub use config::TableConfig;
pub use error::{DispatchError, Result};
pub use handler::OpHandlerRecord;
pub use hook::{TableView, ValidationHook};
pub use keyenc::{decode_opcode, encode_opcode};
pub use opdesc::{fill_desc, OpDesc, OpHandlerFn, RetOwner};
pub use registry::DispatchTable;

/// Version information for this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
