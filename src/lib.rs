//! A minimal platform for composing invertible geodetic coordinate
//! transformations.
//!
//! The crate has two halves: a small set of data types and traits
//! ([`Ellipsoid`], [`CoordinateSet`], [`OperatorMethod`], [`Operator`],
//! [`Context`]) and a catalogue of built-in operator methods
//! (`"helmert"`, `"cart"`, `"tmerc"`/`"utm"`, `"geo"`/`"gis"`/`"ne"`,
//! `"pipeline"`, `"addone"`/`"subone"`) reachable through any
//! [`Context`] implementation, of which [`Minimal`] is the one this
//! crate ships.
//!
//! ```
//! use geodesy_core::{Context, Direction, Minimal};
//!
//! let mut ctx = Minimal::new();
//! let utm32 = ctx.op("geo | utm zone=32").unwrap();
//!
//! let mut data: Vec<Vec<f64>> = vec![vec![55., 12.]];
//! ctx.apply(utm32, Direction::Fwd, &mut data).unwrap();
//! ```

pub mod bibliography;
mod context;
mod coordinate_set;
pub mod ellipsoid;
mod method;
mod operator;
mod operators;
mod parse;

pub use context::{Context, Direction, Minimal, OpHandle};
pub use coordinate_set::{CoordinateSet, DEFAULT_MASK};
pub use ellipsoid::Ellipsoid;
pub use method::{parameter_as_floats, parameter_as_strs, OperatorMethod, PrepareFn, Prepared, TransformFn};
pub use operator::Operator;
pub use operators::BUILTIN_METHODS;

/// Everything that can go wrong building or running an [`Operator`].
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// [`Ellipsoid::named`] was given a name it doesn't recognize.
    #[error("unknown ellipsoid or resource name: {0}")]
    UnknownName(String),

    /// A definition referenced a method id no [`Context`] has registered.
    #[error("unknown operator method: {0}")]
    UnknownMethod(String),

    /// A parameter's value failed to parse, or a mandatory parameter was
    /// missing. The first field is the parameter name.
    #[error("bad value for parameter '{0}': {1}")]
    ValueError(String, String),

    /// An operator method requires more dimensions than the operand
    /// provides. The field is the operand's actual dimension.
    #[error("operand has insufficient dimensionality: {0}")]
    DimensionError(usize),

    /// A caller read a key from a [`Prepared`] bundle that `prepare`
    /// never populated.
    #[error("no such key in prepared parameters: {0}")]
    KeyError(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_geo_tmerc_ne_pipeline() {
        let mut ctx = Minimal::new();
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
            assert!((data[0][0] - n).abs() < 5e-3, "northing: {} vs {}", data[0][0], n);
            assert!((data[0][1] - e).abs() < 5e-3, "easting: {} vs {}", data[0][1], e);

            ctx.apply(h, Direction::Inv, &mut data).unwrap();
            assert!((data[0][0] - lat).abs() < 3e-6);
            assert!((data[0][1] - lon).abs() < 3e-6);
        }
    }
}
