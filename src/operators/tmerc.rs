//! `tmerc` / `utm`: transverse Mercator, following
//! [Bowring (1989)](crate::bibliography::Bibliography::Bow89), and its UTM
//! specialization. Grounded in the teacher's `inner_op::tmerc`, ported from
//! `Op::params` lookups onto [`Prepared`] and [`Ellipsoid`].

use crate::method::{parameter_as_floats, parameter_as_strs};
use crate::{Context, CoordinateSet, Ellipsoid, Error, Operator, OperatorMethod, Prepared};
use log::error;
use std::collections::BTreeMap;

fn prepare(parameters: &BTreeMap<String, String>) -> Result<Prepared, Error> {
    let ellps = parameter_as_strs(parameters, "ellps", &["GRS80"]);
    let lat_0 = parameter_as_floats(parameters, "lat_0", &[0.0])?[0];
    let lon_0 = parameter_as_floats(parameters, "lon_0", &[0.0])?[0];
    let x_0 = parameter_as_floats(parameters, "x_0", &[0.0])?[0];
    let y_0 = parameter_as_floats(parameters, "y_0", &[0.0])?[0];
    let k_0 = parameter_as_floats(parameters, "k_0", &[1.0])?[0];

    let mut prepared = Prepared::new();
    prepared.ellps.insert("ellps", Ellipsoid::named(&ellps[0])?);
    prepared.real.insert("lat_0", lat_0.to_radians());
    prepared.real.insert("lon_0", lon_0.to_radians());
    prepared.real.insert("x_0", x_0);
    prepared.real.insert("y_0", y_0);
    prepared.real.insert("k_0", k_0);
    Ok(prepared)
}

fn prepare_utm(parameters: &BTreeMap<String, String>) -> Result<Prepared, Error> {
    let zone = parameter_as_floats(parameters, "zone", &[f64::NAN])?[0];
    if zone.is_nan() {
        error!("Missing required parameter 'zone'");
        return Err(Error::ValueError("zone".to_string(), "required".to_string()));
    }
    let ellps = parameter_as_strs(parameters, "ellps", &["GRS80"]);
    let south = parameters.contains_key("south");
    let y_0 = if south { 10_000_000.0 } else { 0.0 };

    let mut prepared = Prepared::new();
    prepared.ellps.insert("ellps", Ellipsoid::named(&ellps[0])?);
    prepared.real.insert("lat_0", 0.0);
    prepared.real.insert("lon_0", (-183.0 + 6.0 * zone).to_radians());
    prepared.real.insert("x_0", 500_000.0);
    prepared.real.insert("y_0", y_0);
    prepared.real.insert("k_0", 0.9996);
    if south {
        prepared.boolean.insert("south");
    }
    Ok(prepared)
}

struct Params {
    ellps: Ellipsoid,
    lat_0: f64,
    lon_0: f64,
    x_0: f64,
    y_0: f64,
    k_0: f64,
}

fn params(op: &Operator) -> Result<Params, Error> {
    let p = op.prepared();
    Ok(Params {
        ellps: *p.ellps("ellps")?,
        lat_0: p.real("lat_0")?,
        lon_0: p.real("lon_0")?,
        x_0: p.real("x_0")?,
        y_0: p.real("y_0")?,
        k_0: p.real("k_0")?,
    })
}

fn forward(op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    if operands.dim() < 2 {
        return Err(Error::DimensionError(operands.dim()));
    }
    let p = params(op)?;
    let eps = p.ellps.second_eccentricity_squared();

    for i in 0..operands.len() {
        let mut v = operands.get(i);
        let lon = v[0];
        let lat = v[1] + p.lat_0;

        let (s, c) = lat.sin_cos();
        let cc = c * c;
        let ss = s * s;

        let dlon = lon - p.lon_0;
        let oo = dlon * dlon;

        let n = p.ellps.prime_vertical_radius_of_curvature(lat);
        let z = eps * dlon.powi(3) * c.powi(5) / 6.0;
        let sd2 = (dlon / 2.0).sin();
        let theta_2 = (2.0 * s * c * sd2 * sd2).atan2(ss + cc * dlon.cos());

        let sd = dlon.sin();
        let easting = p.x_0 + p.k_0 * n * ((c * sd).atanh() + z * (1.0 + oo * (36.0 * cc - 29.0) / 10.0));

        let m = p.ellps.meridian_latitude_to_distance(lat);
        let znos4 = z * n * dlon * s / 4.0;
        let ecc = 4.0 * eps * cc;
        let northing = p.y_0 + p.k_0 * (m + n * theta_2 + znos4 * (9.0 + ecc + oo * (20.0 * cc - 11.0)));

        v[0] = easting;
        v[1] = northing;
        operands.set(i, &v);
    }
    Ok(operands.len())
}

fn inverse(op: &Operator, _ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
    if operands.dim() < 2 {
        return Err(Error::DimensionError(operands.dim()));
    }
    let p = params(op)?;
    let eps = p.ellps.second_eccentricity_squared();

    for i in 0..operands.len() {
        let mut v = operands.get(i);
        let easting = v[0];
        let northing = v[1];

        // Footpoint latitude: where a point on the central meridian has
        // the same northing as the point of interest.
        let lat = p.ellps.meridian_distance_to_latitude((northing - p.y_0) / p.k_0);
        let t = lat.tan();
        let c = lat.cos();
        let cc = c * c;
        let n = p.ellps.prime_vertical_radius_of_curvature(lat);
        let x = (easting - p.x_0) / (p.k_0 * n);
        let xx = x * x;
        let theta_4 = x.sinh().atan2(c);
        let theta_5 = (t * theta_4.cos()).atan();

        let xet = xx * xx * eps * t / 24.0;
        let latitude = p.lat_0 + (1.0 + cc * eps) * (theta_5 - xet * (9.0 - 10.0 * cc)) - eps * cc * lat;

        let approx = p.lon_0 + theta_4;
        let coef = eps / 60.0 * xx * x * c;
        let longitude = approx - coef * (10.0 - 4.0 * xx / cc + xx * cc);

        v[0] = longitude;
        v[1] = latitude;
        operands.set(i, &v);
    }
    Ok(operands.len())
}

pub const TMERC: OperatorMethod = OperatorMethod {
    id: "tmerc",
    description: Some("Transverse Mercator, after Bowring (1989). ellps, x_0, y_0, lon_0, lat_0, k_0."),
    forward,
    inverse: Some(inverse),
    prepare: Some(prepare),
};

pub const UTM: OperatorMethod = OperatorMethod {
    id: "utm",
    description: Some("Universal Transverse Mercator: tmerc with k_0=0.9996 and lon_0 from zone (mandatory)."),
    forward,
    inverse: Some(inverse),
    prepare: Some(prepare_utm),
};
