//! `OperatorMethod`: a named, invertible coordinate-transformation
//! algorithm, and `Prepared`, the typed bag of pre-parsed parameters a
//! method's forward/inverse functions read from at invocation time.

use crate::{CoordinateSet, Context, Ellipsoid, Error, Operator};
use log::warn;
use std::collections::{BTreeMap, BTreeSet};

/// Signature shared by every built-in (and user-registered) forward or
/// inverse function: transform `operands` in place, returning the number
/// of tuples successfully transformed.
pub type TransformFn = fn(&Operator, &dyn Context, &mut dyn CoordinateSet) -> Result<usize, Error>;

/// Signature of a method's optional `prepare` step: turns the raw
/// `key=value` parameters of one pipeline step into a [`Prepared`] bundle,
/// once, at `Operator` construction time.
pub type PrepareFn = fn(&BTreeMap<String, String>) -> Result<Prepared, Error>;

/// A named operator method: `id`, optional human-readable description, a
/// mandatory forward function, an optional inverse (methods without one
/// are forward-only), and an optional `prepare` step.
#[derive(Clone, Copy)]
pub struct OperatorMethod {
    pub id: &'static str,
    pub description: Option<&'static str>,
    pub forward: TransformFn,
    pub inverse: Option<TransformFn>,
    pub prepare: Option<PrepareFn>,
}

impl OperatorMethod {
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        self.inverse.is_some()
    }
}

impl core::fmt::Debug for OperatorMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.debug_struct("OperatorMethod").field("id", &self.id).finish()
    }
}

/// The parsed, typed form of a pipeline step's parameters, built once by
/// an [`OperatorMethod`]'s `prepare` function and consulted by its
/// forward/inverse functions on every call.
///
/// `spec.md` describes this as "a mapping of string to any value"; here
/// it is a small struct of typed bins, one per value kind a built-in
/// method needs, so callers get a typed `Result` back instead of a
/// runtime downcast.
#[derive(Clone, Debug, Default)]
pub struct Prepared {
    pub real: BTreeMap<&'static str, f64>,
    pub series: BTreeMap<&'static str, Vec<f64>>,
    pub text: BTreeMap<&'static str, String>,
    pub ellps: BTreeMap<&'static str, Ellipsoid>,
    pub boolean: BTreeSet<&'static str>,
}

impl Prepared {
    #[must_use]
    pub fn new() -> Prepared {
        Prepared::default()
    }

    pub fn real(&self, key: &'static str) -> Result<f64, Error> {
        self.real.get(key).copied().ok_or(Error::KeyError(key))
    }

    pub fn series(&self, key: &'static str) -> Result<&[f64], Error> {
        self.series.get(key).map(Vec::as_slice).ok_or(Error::KeyError(key))
    }

    pub fn text(&self, key: &'static str) -> Result<&str, Error> {
        self.text.get(key).map(String::as_str).ok_or(Error::KeyError(key))
    }

    pub fn ellps(&self, key: &'static str) -> Result<&Ellipsoid, Error> {
        self.ellps.get(key).ok_or(Error::KeyError(key))
    }

    #[must_use]
    pub fn boolean(&self, key: &'static str) -> bool {
        self.boolean.contains(key)
    }
}

/// Parse the comma-separated numeric value of `parameters[key]`, extended
/// (or overridden component-wise where empty/unparsable) by `mask`.
///
/// Mirrors the original Python `OperatorMethod.parameter_as_floats`: the
/// result has length `max(given.len(), mask.len())`; a position that was
/// never given, or given as the literal `NaN`, falls back to
/// `mask[position]` (or stays `NaN` if `mask` doesn't reach that far).
/// A missing key is equivalent to an empty value, i.e. the mask alone.
///
/// A genuinely non-numeric token is a hard error; it is never silently
/// replaced by the mask. A method with a mandatory, default-less
/// parameter (e.g. `utm`'s `zone`) passes a `NaN` mask (`&[f64::NAN]`)
/// and checks the result for `NaN` itself, since an absent key is not,
/// on its own, distinguishable from "deliberately defaulted" here.
pub fn parameter_as_floats(
    parameters: &BTreeMap<String, String>,
    key: &str,
    mask: &[f64],
) -> Result<Vec<f64>, Error> {
    let raw = parameters.get(key).map(String::as_str).unwrap_or("");
    let mut given: Vec<f64> = Vec::new();
    if !raw.is_empty() {
        for token in raw.split(',') {
            let value = token.trim().parse::<f64>().map_err(|_| {
                warn!("Cannot parse '{key}={raw}' as a real number");
                Error::ValueError(key.to_string(), raw.to_string())
            })?;
            given.push(value);
        }
    }

    let len = given.len().max(mask.len());
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let value = given.get(i).copied().unwrap_or(f64::NAN);
        out.push(if value.is_nan() {
            mask.get(i).copied().unwrap_or(value)
        } else {
            value
        });
    }
    Ok(out)
}

/// As [`parameter_as_floats`], but for comma-separated string values.
pub fn parameter_as_strs(
    parameters: &BTreeMap<String, String>,
    key: &str,
    mask: &[&str],
) -> Vec<String> {
    let raw = parameters.get(key).map(String::as_str).unwrap_or("");
    let given: Vec<&str> = if raw.is_empty() {
        Vec::new()
    } else {
        raw.split(',').map(str::trim).collect()
    };

    let len = given.len().max(mask.len());
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let value = match given.get(i) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => mask.get(i).copied().unwrap_or("").to_string(),
        };
        out.push(value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn floats_use_given_values() {
        let p = params(&[("translation", "1, 2, 3")]);
        let v = parameter_as_floats(&p, "translation", &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(v, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn floats_fall_back_to_mask_when_missing() {
        let p = params(&[]);
        let v = parameter_as_floats(&p, "translation", &[0.0, 0.0, 0.0]).unwrap();
        assert_eq!(v, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn floats_extend_past_mask_length() {
        let p = params(&[("zone", "32")]);
        let v = parameter_as_floats(&p, "zone", &[]).unwrap();
        assert_eq!(v, vec![32.0]);
    }

    #[test]
    fn floats_missing_mandatory_is_nan_sentinel() {
        // A mandatory parameter with no default passes a NaN mask; a
        // missing key then comes back as NaN rather than erroring here.
        // The caller's `prepare` function is responsible for rejecting it.
        let p = params(&[]);
        let v = parameter_as_floats(&p, "zone", &[f64::NAN]).unwrap();
        assert_eq!(v.len(), 1);
        assert!(v[0].is_nan());
    }

    #[test]
    fn floats_non_numeric_token_is_value_error() {
        let p = params(&[("zone", "thirty-two")]);
        let err = parameter_as_floats(&p, "zone", &[f64::NAN]).unwrap_err();
        assert!(matches!(err, Error::ValueError(k, _) if k == "zone"));
    }

    #[test]
    fn strs_fall_back_to_mask() {
        let p = params(&[]);
        let v = parameter_as_strs(&p, "ellps", &["GRS80"]);
        assert_eq!(v, vec!["GRS80".to_string()]);
    }
}
