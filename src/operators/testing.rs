//! `addone` / `subone`: trivial invertible increments on the first
//! component. They exist primarily to exercise the pipeline and
//! inversion machinery without pulling in ellipsoidal geometry.

use crate::{Context, CoordinateSet, Error, Operator, OperatorMethod};

fn addone_fwd(_op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    for i in 0..operands.len() {
        let mut v = operands.get(i);
        v[0] += 1.0;
        operands.set(i, &v);
    }
    Ok(operands.len())
}

fn addone_inv(_op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    for i in 0..operands.len() {
        let mut v = operands.get(i);
        v[0] -= 1.0;
        operands.set(i, &v);
    }
    Ok(operands.len())
}

pub const ADDONE: OperatorMethod = OperatorMethod {
    id: "addone",
    description: Some("Add one to the first component. Test fixture for the pipeline/inversion machinery."),
    forward: addone_fwd,
    inverse: Some(addone_inv),
    prepare: None,
};

pub const SUBONE: OperatorMethod = OperatorMethod {
    id: "subone",
    description: Some("Subtract one from the first component. The inverse of `addone`."),
    forward: addone_inv,
    inverse: Some(addone_fwd),
    prepare: None,
};

#[cfg(test)]
mod tests {
    use crate::{Context, Direction, Minimal};

    #[test]
    fn addone_forward_and_inverse() {
        let mut ctx = Minimal::new();
        let h = ctx.op("addone").unwrap();
        let mut data: Vec<Vec<f64>> = vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]];
        ctx.apply(h, Direction::Fwd, &mut data).unwrap();
        assert_eq!(data[0][0], 2.0);
        assert_eq!(data[1][0], 6.0);
        ctx.apply(h, Direction::Inv, &mut data).unwrap();
        assert_eq!(data[0][0], 1.0);
        assert_eq!(data[1][0], 5.0);
    }

    #[test]
    fn inv_modifier_on_addone_matches_subone() {
        let mut ctx = Minimal::new();
        let inverted = ctx.op("inv addone").unwrap();
        let mut data: Vec<Vec<f64>> = vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]];
        ctx.apply(inverted, Direction::Fwd, &mut data).unwrap();
        assert_eq!(data[0][0], 0.0);
        assert_eq!(data[1][0], 4.0);
    }

    #[test]
    fn subone_is_addones_inverse() {
        let mut ctx = Minimal::new();
        let h = ctx.op("subone").unwrap();
        let mut data: Vec<Vec<f64>> = vec![vec![5.0, 0.0]];
        ctx.apply(h, Direction::Fwd, &mut data).unwrap();
        assert_eq!(data[0][0], 4.0);
        ctx.apply(h, Direction::Inv, &mut data).unwrap();
        assert_eq!(data[0][0], 5.0);
    }
}
