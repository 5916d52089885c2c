//! `pipeline`: the method every multi- (or zero-) step `Operator` is
//! bound to. Its forward function runs each step in order, carrying the
//! minimum transformed-tuple count forward; its inverse runs the steps
//! in reverse. A pipeline with zero steps is a no-op: both directions
//! return `operands.len()` unchanged.

use crate::{Context, CoordinateSet, Error, Operator, OperatorMethod};
use log::trace;

fn forward(op: &Operator, ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    let mut n = operands.len();
    for step in op.steps() {
        trace!("pipeline fwd step '{}'", step.normalized_definition());
        let m = step.fwd(ctx, operands)?;
        n = n.min(m);
    }
    Ok(n)
}

fn inverse(op: &Operator, ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    let mut n = operands.len();
    for step in op.steps().iter().rev() {
        trace!("pipeline inv step '{}'", step.normalized_definition());
        let m = step.inv(ctx, operands)?;
        n = n.min(m);
    }
    Ok(n)
}

pub const METHOD: OperatorMethod = OperatorMethod {
    id: "pipeline",
    description: Some("A sequential composition of steps, run in order (forward) or reverse order (inverse)."),
    forward,
    inverse: Some(inverse),
    prepare: None,
};
