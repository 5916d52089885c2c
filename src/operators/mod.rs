//! The built-in [`OperatorMethod`](crate::OperatorMethod) catalogue:
//! `pipeline`, `helmert`, `cart`, `tmerc`, `utm`, `geo`, `gis`, `ne`,
//! `addone`, and `subone`. One file per method, following the teacher's
//! `src/inner_op/*.rs` layout.

mod axis;
mod cart;
mod helmert;
mod pipeline;
mod testing;
mod tmerc;

use crate::OperatorMethod;
use once_cell::sync::Lazy;

/// The process-wide, compile-time-known table of built-in operator
/// methods. Every fresh [`crate::Minimal`] context copies this table into
/// its own method map at construction time, so registering a method (or
/// overwriting a built-in) in one context can never leak into another.
pub static BUILTIN_METHODS: Lazy<Vec<OperatorMethod>> = Lazy::new(|| {
    vec![
        pipeline::METHOD,
        helmert::METHOD,
        cart::METHOD,
        tmerc::TMERC,
        tmerc::UTM,
        axis::GEO,
        axis::GIS,
        axis::NE,
        testing::ADDONE,
        testing::SUBONE,
    ]
});
