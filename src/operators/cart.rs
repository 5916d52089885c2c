//! `cart`: geographic to/from geocentric Cartesian, delegating to
//! [`Ellipsoid::cartesian`]/[`Ellipsoid::geographic`] for the full 3D
//! case, and the teacher's reduced 2D closed-form (spherical-latitude
//! elimination) when height carries no information.

use crate::method::parameter_as_strs;
use crate::{Context, CoordinateSet, Ellipsoid, Error, Operator, OperatorMethod, Prepared};
use std::collections::BTreeMap;

const CART_MASK: [f64; 3] = [f64::NAN, f64::NAN, 0.0];

fn prepare(parameters: &BTreeMap<String, String>) -> Result<Prepared, Error> {
    let ellps = parameter_as_strs(parameters, "ellps", &["GRS80"]);
    let mut prepared = Prepared::new();
    prepared.ellps.insert("ellps", Ellipsoid::named(&ellps[0])?);
    if parameters.contains_key("south") {
        prepared.boolean.insert("south");
    }
    Ok(prepared)
}

fn forward(op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    if operands.dim() < 2 {
        return Err(Error::DimensionError(operands.dim()));
    }
    let ellps = *op.prepared().ellps("ellps")?;
    for i in 0..operands.len() {
        let v = operands.promoted(i, &CART_MASK);
        let (x, y, z) = ellps.cartesian(v[0], v[1], v[2]);
        operands.set(i, &[x, y, z]);
    }
    Ok(operands.len())
}

fn inverse(op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    let dim = operands.dim();
    if dim < 2 {
        return Err(Error::DimensionError(dim));
    }
    let ellps = *op.prepared().ellps("ellps")?;
    let south = op.prepared().boolean("south");

    if dim == 2 {
        let a = ellps.semimajor_axis();
        let f = ellps.flattening();
        for i in 0..operands.len() {
            let v = operands.get(i);
            let (x, y) = (v[0], v[1]);
            let lam = y.atan2(x);
            let p = x.hypot(y);
            let c_r = p / a;
            let s_r = (1.0 - c_r * c_r).sqrt();
            let mut phi = s_r.atan2((1.0 - f) * c_r);
            if south {
                phi = -phi;
            }
            operands.set(i, &[lam, phi]);
        }
        return Ok(operands.len());
    }

    for i in 0..operands.len() {
        let v = operands.get(i);
        let (lam, phi, h) = ellps.geographic(v[0], v[1], v[2]);
        operands.set(i, &[lam, phi, h]);
    }
    Ok(operands.len())
}

pub const METHOD: OperatorMethod = OperatorMethod {
    id: "cart",
    description: Some("Geographic to/from geocentric cartesian coordinates. ellps (default GRS80)."),
    forward,
    inverse: Some(inverse),
    prepare: Some(prepare),
};
