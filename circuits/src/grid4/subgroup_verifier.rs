//! `SubgroupVerifier` — checks that a 4-cell subgroup (row, column, or box)
//! contains no duplicates.
//!
//! One `IsEqual` zero-checker per unordered cell pair; each is asserted to
//! output 0 the moment it fires, so a duplicate aborts at the exact pair that
//! collides. The checkers are labeled by their pair position in the subgroup.

use witcalc_processor::{
    ComponentId, CreateCall, EvalContext, EvalError, InstanceLabel, SourceRef, TemplateSet,
    supply_input,
};

use super::{C_ONE, C_ZERO, SRC, is_equal};

pub(super) const NAME: &str = "SubgroupVerifier";

const GROUP: usize = 4;
const PAIRS: usize = GROUP * (GROUP - 1) / 2;
const DIMS: &[usize] = &[GROUP, GROUP];

pub(super) const OUT: usize = 0;
pub(super) const IN: usize = 1;

const OWN_SIGNALS: usize = 1 + GROUP;
pub(super) const SIGNALS: usize = OWN_SIGNALS + PAIRS * is_equal::SIGNALS;
pub(super) const COMPONENTS: usize = 1 + PAIRS * is_equal::COMPONENTS;
const INPUTS: u32 = GROUP as u32;

pub(super) fn create(cx: &mut EvalContext, call: CreateCall) -> ComponentId {
    cx.install(call, super::SUBGROUP_VERIFIER, NAME, INPUTS, PAIRS)
}

pub(super) fn run<T>(templates: &T, cx: &mut EvalContext, id: ComponentId) -> Result<(), EvalError>
where
    T: TemplateSet + ?Sized,
{
    let base = cx.signal_start(id);
    let mut child = id.offset(1);
    let mut block = base + OWN_SIGNALS;
    for i in 0..GROUP {
        for j in (i + 1)..GROUP {
            is_equal::create(cx, CreateCall {
                id: child,
                signal_start: block,
                parent: Some(id),
                label: InstanceLabel::indexed("zeroCheckers", DIMS, i * GROUP + j),
            });
            child = child.offset(is_equal::COMPONENTS as u32);
            block += is_equal::SIGNALS;
        }
    }

    let zero = cx.constant(C_ZERO);
    let one = cx.constant(C_ONE);
    let mut pair = 0;
    for i in 0..GROUP {
        for j in (i + 1)..GROUP {
            let a = cx.signal(base + IN + i)?;
            let b = cx.signal(base + IN + j)?;
            let checker = cx.child(id, pair);
            supply_input(cx, templates, checker, is_equal::IN_A, a)?;
            supply_input(cx, templates, checker, is_equal::IN_B, b)?;
            let duplicate = cx.child_signal(id, pair, is_equal::OUT)?;
            cx.enforce(checker, duplicate, zero, SourceRef::new(SRC, 92))?;
            pair += 1;
        }
    }
    cx.set_signal(base + OUT, one)
}
