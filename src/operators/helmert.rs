//! `helmert`: a 3-parameter translation, the degenerate case of a full
//! Helmert similarity transform (no rotation or scale, since the core
//! only needs translation to ground the pipeline-composition examples).

use crate::method::parameter_as_floats;
use crate::{Context, CoordinateSet, Error, Operator, OperatorMethod, Prepared};
use std::collections::BTreeMap;

fn prepare(parameters: &BTreeMap<String, String>) -> Result<Prepared, Error> {
    let t = parameter_as_floats(parameters, "translation", &[0.0, 0.0, 0.0])?;
    let mut prepared = Prepared::new();
    prepared.real.insert("tx", t[0]);
    prepared.real.insert("ty", t[1]);
    prepared.real.insert("tz", t[2]);
    Ok(prepared)
}

fn translation(op: &Operator) -> Result<[f64; 3], Error> {
    Ok([
        op.prepared().real("tx")?,
        op.prepared().real("ty")?,
        op.prepared().real("tz")?,
    ])
}

fn forward(op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    let t = translation(op)?;
    let dim = operands.dim().min(3);
    for i in 0..operands.len() {
        let mut v = operands.get(i);
        for j in 0..dim {
            v[j] += t[j];
        }
        operands.set(i, &v);
    }
    Ok(operands.len())
}

fn inverse(op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    let t = translation(op)?;
    let dim = operands.dim().min(3);
    for i in 0..operands.len() {
        let mut v = operands.get(i);
        for j in 0..dim {
            v[j] -= t[j];
        }
        operands.set(i, &v);
    }
    Ok(operands.len())
}

pub const METHOD: OperatorMethod = OperatorMethod {
    id: "helmert",
    description: Some("3-parameter translation: translation=x,y,z (default 0,0,0)."),
    forward,
    inverse: Some(inverse),
    prepare: Some(prepare),
};

#[cfg(test)]
mod tests {
    use crate::{Context, Direction, Error, Minimal};

    #[test]
    fn translates_the_first_three_components() {
        let mut ctx = Minimal::new();
        let h = ctx.op("helmert translation=1,2,3").unwrap();
        let mut data: Vec<Vec<f64>> = vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]];
        ctx.apply(h, Direction::Fwd, &mut data).unwrap();
        assert_eq!(data, vec![vec![2.0, 4.0, 6.0, 4.0], vec![6.0, 8.0, 10.0, 8.0]]);
        ctx.apply(h, Direction::Inv, &mut data).unwrap();
        assert_eq!(data, vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]]);
    }

    #[test]
    fn default_translation_is_zero() {
        let mut ctx = Minimal::new();
        let h = ctx.op("helmert").unwrap();
        let mut data: Vec<Vec<f64>> = vec![vec![1.0, 2.0, 3.0]];
        ctx.apply(h, Direction::Fwd, &mut data).unwrap();
        assert_eq!(data[0], vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn bad_translation_value_is_a_value_error() {
        let mut ctx = Minimal::new();
        let err = ctx.op("helmert translation=1,x,3").unwrap_err();
        assert!(matches!(err, Error::ValueError(k, _) if k == "translation"));
    }
}
