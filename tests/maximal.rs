//! A user-provided [`Context`] implementation, demonstrating that the
//! `Context` trait is the crate's real extensibility seam: nothing here
//! reaches back into `geodesy_core` internals beyond the public API.
//!
//! Since integration tests under `tests/` are compiled as independent
//! crates, `Maximal` could just as well live entirely outside this
//! source tree.

use geodesy_core::{
    Context, CoordinateSet, Direction, Ellipsoid, Error, OpHandle, Operator, OperatorMethod,
};
use std::collections::BTreeMap;

#[derive(Default)]
pub struct Maximal {
    methods: BTreeMap<String, OperatorMethod>,
    operators: BTreeMap<OpHandle, Operator>,
}

impl Maximal {
    pub fn new() -> Maximal {
        let methods = geodesy_core::BUILTIN_METHODS
            .iter()
            .map(|m| (m.id.to_string(), *m))
            .collect();
        Maximal {
            methods,
            operators: BTreeMap::new(),
        }
    }
}

impl Context for Maximal {
    fn register_operator_method(&mut self, method: OperatorMethod) {
        self.methods.insert(method.id.to_string(), method);
    }

    fn operator_method(&self, id: &str) -> Option<&OperatorMethod> {
        self.methods.get(id)
    }

    fn builtins(&self) -> Vec<&str> {
        self.methods.keys().map(String::as_str).collect()
    }

    fn op(&mut self, definition: &str) -> Result<OpHandle, Error> {
        let operator = Operator::new(definition, &*self)?;
        let handle = OpHandle::new();
        self.operators.insert(handle, operator);
        Ok(handle)
    }

    fn apply(
        &self,
        handle: OpHandle,
        direction: Direction,
        operands: &mut dyn CoordinateSet,
    ) -> Result<usize, Error> {
        let Some(operator) = self.operators.get(&handle) else {
            return Ok(0);
        };
        match direction {
            Direction::Fwd => operator.fwd(self, operands),
            Direction::Inv => operator.inv(self, operands),
        }
    }
}

// addtwo: net +1 when composed as "addtwo | subone", exercising a
// caller-registered method alongside the built-ins (scenario 3).
fn addtwo_fwd(
    _op: &Operator,
    _ctx: &dyn Context,
    operands: &mut dyn CoordinateSet,
) -> Result<usize, Error> {
    for i in 0..operands.len() {
        let mut v = operands.get(i);
        v[0] += 2.0;
        operands.set(i, &v);
    }
    Ok(operands.len())
}

fn addtwo_inv(
    _op: &Operator,
    _ctx: &dyn Context,
    operands: &mut dyn CoordinateSet,
) -> Result<usize, Error> {
    for i in 0..operands.len() {
        let mut v = operands.get(i);
        v[0] -= 2.0;
        operands.set(i, &v);
    }
    Ok(operands.len())
}

const ADDTWO: OperatorMethod = OperatorMethod {
    id: "addtwo",
    description: Some("Add two to the first component. User-registered test fixture."),
    forward: addtwo_fwd,
    inverse: Some(addtwo_inv),
    prepare: None,
};

#[test]
fn scenario_1_addone_roundtrip() {
    let mut ctx = Maximal::new();
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
fn scenario_2_inv_modifier() {
    let mut ctx = Maximal::new();
    let h = ctx.op("inv addone").unwrap();
    let mut data: Vec<Vec<f64>> = vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]];
    ctx.apply(h, Direction::Fwd, &mut data).unwrap();
    assert_eq!(data[0][0], 0.0);
    assert_eq!(data[1][0], 4.0);
}

#[test]
fn scenario_3_user_registered_method_in_a_pipeline() {
    let mut ctx = Maximal::new();
    ctx.register_operator_method(ADDTWO);
    let h = ctx.op("addtwo | subone").unwrap();
    let mut data: Vec<Vec<f64>> = vec![vec![1.0, 2.0]];
    ctx.apply(h, Direction::Fwd, &mut data).unwrap();
    assert_eq!(data[0][0], 2.0);
}

#[test]
fn scenario_4_helmert_translation() {
    let mut ctx = Maximal::new();
    let h = ctx.op("helmert translation=1,2,3").unwrap();
    let mut data: Vec<Vec<f64>> = vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]];
    ctx.apply(h, Direction::Fwd, &mut data).unwrap();
    assert_eq!(data, vec![vec![2.0, 4.0, 6.0, 4.0], vec![6.0, 8.0, 10.0, 8.0]]);
    ctx.apply(h, Direction::Inv, &mut data).unwrap();
    assert_eq!(data, vec![vec![1.0, 2.0, 3.0, 4.0], vec![5.0, 6.0, 7.0, 8.0]]);
}

#[test]
fn scenario_5_geo_tmerc_ne_worked_utm_example() {
    let mut ctx = Maximal::new();
    let h = ctx
        .op("geo | tmerc x_0=500000 lon_0=9 k_0=0.9996 ellps=GRS80 | ne")
        .unwrap();

    let points = [(55.0, 12.0), (-55.0, 12.0), (55.0, -6.0), (-55.0, -6.0)];
    let expected = [
        (6_098_907.825, 691_875.632),
        (-6_098_907.825, 691_875.632),
        (6_198_246.671, -455_673.814),
        (-6_198_246.671, -455_673.814),
    ];

    for ((lat, lon), (n, e)) in points.iter().zip(expected.iter()) {
        let mut data: Vec<Vec<f64>> = vec![vec![*lat, *lon]];
        ctx.apply(h, Direction::Fwd, &mut data).unwrap();
        assert!((data[0][0] - n).abs() < 5e-3);
        assert!((data[0][1] - e).abs() < 5e-3);

        ctx.apply(h, Direction::Inv, &mut data).unwrap();
        assert!((data[0][0] - lat).abs() < 3e-6);
        assert!((data[0][1] - lon).abs() < 3e-6);
    }
}

#[test]
fn scenario_6_ellipsoid_named_cartesian_roundtrip() {
    let grs80 = Ellipsoid::named("GRS80").unwrap();
    let (lon, lat, h) = (12f64.to_radians(), 55f64.to_radians(), 100.0);
    let (x, y, z) = grs80.cartesian(lon, lat, h);
    assert!((x - 3_586_525.7611).abs() < 1e-3);
    assert!((y - 762_339.5841).abs() < 1e-3);
    assert!((z - 5_201_465.4383).abs() < 1e-3);

    let (lon2, lat2, h2) = grs80.geographic(x, y, z);
    assert!((lon - lon2).abs() < 1e-12);
    assert!((lat - lat2).abs() < 1e-12);
    assert!((h - h2).abs() < 1e-5);
}

#[test]
fn builtins_are_visible_through_a_foreign_context() {
    let ctx = Maximal::new();
    let mut names: Vec<&str> = ctx.builtins();
    names.sort_unstable();
    assert_eq!(
        names,
        vec!["addone", "cart", "geo", "gis", "helmert", "ne", "pipeline", "subone", "tmerc", "utm"]
    );
}
