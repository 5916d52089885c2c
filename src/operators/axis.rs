//! `geo`, `gis`, `ne`: axis-order and unit-convention adapters over the
//! first two components. Grounded in the teacher's `axisswap` pattern,
//! specialized to the three fixed conventions the core needs rather than
//! an arbitrary permutation.

use crate::{Context, CoordinateSet, Error, Operator, OperatorMethod};

fn require_2d(operands: &dyn CoordinateSet) -> Result<(), Error> {
    if operands.dim() < 2 {
        return Err(Error::DimensionError(operands.dim()));
    }
    Ok(())
}

// ----- geo: (lat°, lon°) -> (lon rad, lat rad) ------------------------------

fn geo_fwd(_op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    require_2d(operands)?;
    for i in 0..operands.len() {
        let mut v = operands.get(i);
        let (lat, lon) = (v[0], v[1]);
        v[0] = lon.to_radians();
        v[1] = lat.to_radians();
        operands.set(i, &v);
    }
    Ok(operands.len())
}

fn geo_inv(_op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    require_2d(operands)?;
    for i in 0..operands.len() {
        let mut v = operands.get(i);
        let (lon, lat) = (v[0], v[1]);
        v[0] = lat.to_degrees();
        v[1] = lon.to_degrees();
        operands.set(i, &v);
    }
    Ok(operands.len())
}

// ----- gis: (lon°, lat°) -> (lon rad, lat rad) ------------------------------

fn gis_fwd(_op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    require_2d(operands)?;
    for i in 0..operands.len() {
        let mut v = operands.get(i);
        v[0] = v[0].to_radians();
        v[1] = v[1].to_radians();
        operands.set(i, &v);
    }
    Ok(operands.len())
}

fn gis_inv(_op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    require_2d(operands)?;
    for i in 0..operands.len() {
        let mut v = operands.get(i);
        v[0] = v[0].to_degrees();
        v[1] = v[1].to_degrees();
        operands.set(i, &v);
    }
    Ok(operands.len())
}

// ----- ne: swap the first two components, an involution --------------------

fn ne_swap(_op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    require_2d(operands)?;
    for i in 0..operands.len() {
        let mut v = operands.get(i);
        v.swap(0, 1);
        operands.set(i, &v);
    }
    Ok(operands.len())
}

pub const GEO: OperatorMethod = OperatorMethod {
    id: "geo",
    description: Some("(lat, lon) in degrees to (lon, lat) in radians."),
    forward: geo_fwd,
    inverse: Some(geo_inv),
    prepare: None,
};

pub const GIS: OperatorMethod = OperatorMethod {
    id: "gis",
    description: Some("(lon, lat) in degrees to (lon, lat) in radians."),
    forward: gis_fwd,
    inverse: Some(gis_inv),
    prepare: None,
};

pub const NE: OperatorMethod = OperatorMethod {
    id: "ne",
    description: Some("Swap the first two components. Its own inverse."),
    forward: ne_swap,
    inverse: Some(ne_swap),
    prepare: None,
};

#[cfg(test)]
mod tests {
    use crate::{Context, Direction, Minimal};

    #[test]
    fn geo_swaps_order_and_converts_to_radians() {
        let mut ctx = Minimal::new();
        let h = ctx.op("geo").unwrap();
        let mut data: Vec<Vec<f64>> = vec![vec![55.0, 12.0]];
        ctx.apply(h, Direction::Fwd, &mut data).unwrap();
        assert!((data[0][0] - 12.0_f64.to_radians()).abs() < 1e-12);
        assert!((data[0][1] - 55.0_f64.to_radians()).abs() < 1e-12);
        ctx.apply(h, Direction::Inv, &mut data).unwrap();
        assert!((data[0][0] - 55.0).abs() < 1e-9);
        assert!((data[0][1] - 12.0).abs() < 1e-9);
    }

    #[test]
    fn gis_preserves_order_and_converts_to_radians() {
        let mut ctx = Minimal::new();
        let h = ctx.op("gis").unwrap();
        let mut data: Vec<Vec<f64>> = vec![vec![12.0, 55.0]];
        ctx.apply(h, Direction::Fwd, &mut data).unwrap();
        assert!((data[0][0] - 12.0_f64.to_radians()).abs() < 1e-12);
        assert!((data[0][1] - 55.0_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn ne_is_its_own_inverse() {
        let mut ctx = Minimal::new();
        let h = ctx.op("ne").unwrap();
        let mut data: Vec<Vec<f64>> = vec![vec![1.0, 2.0, 3.0]];
        ctx.apply(h, Direction::Fwd, &mut data).unwrap();
        assert_eq!(data[0], vec![2.0, 1.0, 3.0]);
        ctx.apply(h, Direction::Inv, &mut data).unwrap();
        assert_eq!(data[0], vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn one_dimensional_input_is_a_dimension_error() {
        let mut ctx = Minimal::new();
        let h = ctx.op("ne").unwrap();
        let mut data: Vec<Vec<f64>> = vec![vec![1.0]];
        let err = ctx.apply(h, Direction::Fwd, &mut data).unwrap_err();
        assert!(matches!(err, crate::Error::DimensionError(1)));
    }
}
