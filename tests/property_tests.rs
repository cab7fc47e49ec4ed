//! Integration-level property and boundary-behavior checks that need
//! more than one module wired together (see each module's own
//! `#[cfg(test)]` block for the unit-level properties).

use opdispatch::{ArgDesc, DispatchError, DispatchTable, OpDesc, RetOwner, TableView, ValidationHook, ARG_END};
use proptest::prelude::*;

struct Ctx;

struct AllowAll;
impl ValidationHook<Ctx> for AllowAll {
    fn check_msg(
        &self,
        _table: &dyn TableView<Ctx>,
        _op: &OpDesc<'_, Ctx>,
        _args: &[u8],
    ) -> opdispatch::Result<()> {
        Ok(())
    }
}

fn caller_owned_return(_owner: &mut Ctx, _args: &[u8], ret: Option<&mut [u8]>) -> i32 {
    ret.unwrap()[0] = 0xFF;
    0
}

fn fails_with_neg7(_owner: &mut Ctx, _args: &[u8], _ret: Option<&mut [u8]>) -> i32 {
    -7
}

#[test]
fn owner_func_never_gets_a_table_allocated_buffer() {
    let hook = AllowAll;
    let op = OpDesc::new(
        1,
        "caller_owned",
        &[],
        ArgDesc::fixed(1),
        RetOwner::Func,
        caller_owned_return,
    );
    let mut table = DispatchTable::new(&hook);
    table.insert(&op).unwrap();

    // RetOwner::Func has no table-owned slot: set_ret can't hand one back.
    assert_eq!(table.set_ret(1), Err(DispatchError::Alloc));

    // The caller supplies its own buffer directly to `call`.
    let mut ctx = Ctx;
    let mut buf = [0u8; 1];
    let status = table.call(1, &mut ctx, &[], Some(&mut buf));
    assert_eq!(status, 0);
    assert_eq!(buf[0], 0xFF);
}

#[test]
fn negative_handler_status_passes_through_unmolested() {
    let hook = AllowAll;
    let op = OpDesc::new(1, "fails", &[], ARG_END, RetOwner::Table, fails_with_neg7);
    let mut table = DispatchTable::new(&hook);
    table.insert(&op).unwrap();

    let mut ctx = Ctx;
    assert_eq!(table.call(1, &mut ctx, &[], None), -7);
}

fn dummy_handler(_owner: &mut Ctx, _args: &[u8], _ret: Option<&mut [u8]>) -> i32 {
    0
}

proptest! {
    #[test]
    fn consistency_rule_rejects_retval_ret_mismatch(has_retval: bool, supplies_ret: bool) {
        let hook = AllowAll;
        let retval = if has_retval { ArgDesc::fixed(4) } else { ARG_END };
        let op = OpDesc::new(1, "op", &[], retval, RetOwner::Table, dummy_handler);
        let mut table = DispatchTable::new(&hook);
        table.insert(&op).unwrap();

        let mut ctx = Ctx;
        let mut scratch = [0u8; 4];
        let ret = if supplies_ret { Some(&mut scratch[..]) } else { None };

        let status = table.call(1, &mut ctx, &[], ret);
        if has_retval == supplies_ret {
            prop_assert_eq!(status, 0);
        } else {
            prop_assert_eq!(status, -1);
        }
    }
}
