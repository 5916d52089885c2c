//! `Operator`: one instantiated step, or pipeline of steps, built from a
//! definition string and bound to the operator methods a [`Context`]
//! knows about.

use crate::parse::{normalized_definition, split_into_parameters, split_into_steps};
use crate::{Context, CoordinateSet, Error, OperatorMethod, Prepared};
use log::{debug, warn};
use std::collections::BTreeMap;

/// An instantiated, invertible coordinate operation: either a leaf bound
/// to one [`OperatorMethod`], or a pipeline of further `Operator`s run in
/// sequence.
#[derive(Debug)]
pub struct Operator {
    definition: String,
    normalized_definition: String,
    parameters: BTreeMap<String, String>,
    prepared: Prepared,
    method: OperatorMethod,
    is_pipeline: bool,
    steps: Vec<Operator>,
}

impl Operator {
    /// Parse `definition` and build the `Operator` it describes. A
    /// definition with more than one `|`-separated step (including zero,
    /// the no-op pipeline) becomes a pipeline bound to the `"pipeline"`
    /// method; a single-step definition becomes a leaf bound to the
    /// method named by its first token.
    pub fn new(definition: &str, ctx: &dyn Context) -> Result<Operator, Error> {
        let steps = split_into_steps(definition);
        let normalized = normalized_definition(definition);
        debug!("Building operator from '{normalized}'");

        if steps.len() != 1 {
            let method = *ctx
                .operator_method("pipeline")
                .ok_or_else(|| Error::UnknownMethod("pipeline".to_string()))?;
            let mut built = Vec::with_capacity(steps.len());
            for step in &steps {
                built.push(Operator::new(step, ctx)?);
            }
            return Ok(Operator {
                definition: definition.to_string(),
                normalized_definition: normalized,
                parameters: BTreeMap::new(),
                prepared: Prepared::new(),
                method,
                is_pipeline: true,
                steps: built,
            });
        }

        let parameters = steps
            .first()
            .map(|s| split_into_parameters(s))
            .unwrap_or_default();

        let name = parameters
            .get("_name")
            .ok_or_else(|| Error::UnknownMethod(definition.to_string()))?;

        let method = *ctx
            .operator_method(name)
            .ok_or_else(|| Error::UnknownMethod(name.clone()))?;

        let prepared = match method.prepare {
            Some(prepare) => prepare(&parameters)?,
            None => Prepared::new(),
        };

        Ok(Operator {
            definition: definition.to_string(),
            normalized_definition: normalized,
            parameters,
            prepared,
            method,
            is_pipeline: false,
            steps: Vec::new(),
        })
    }

    #[must_use]
    pub fn definition(&self) -> &str {
        &self.definition
    }

    #[must_use]
    pub fn normalized_definition(&self) -> &str {
        &self.normalized_definition
    }

    #[must_use]
    pub fn prepared(&self) -> &Prepared {
        &self.prepared
    }

    #[must_use]
    pub fn parameters(&self) -> &BTreeMap<String, String> {
        &self.parameters
    }

    #[must_use]
    pub fn steps(&self) -> &[Operator] {
        &self.steps
    }

    #[must_use]
    pub fn inverted(&self) -> bool {
        self.parameters.contains_key("inv")
    }

    #[must_use]
    pub fn omit_forward(&self) -> bool {
        self.parameters.contains_key("omit_fwd")
    }

    #[must_use]
    pub fn omit_inverse(&self) -> bool {
        self.parameters.contains_key("omit_inv")
    }

    /// A pipeline with no steps (an empty or all-delimiter definition).
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.is_pipeline && self.steps.is_empty()
    }

    #[must_use]
    pub fn is_pipeline(&self) -> bool {
        self.is_pipeline
    }

    /// `true` iff this leaf's method has an inverse, or (for a pipeline)
    /// every step is itself invertible.
    #[must_use]
    pub fn is_invertible(&self) -> bool {
        if self.is_pipeline {
            return self.steps.iter().all(Operator::is_invertible);
        }
        self.method.is_invertible()
    }

    /// Run this operator's forward transformation over `operands`: the
    /// bound method's `forward` function, or its `inverse` function if
    /// this operator carries the `inv` modifier.
    pub fn fwd(&self, ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
        if self.omit_forward() {
            return Ok(operands.len());
        }
        if self.inverted() {
            let inverse = self.method.inverse.ok_or_else(|| {
                warn!("Operator '{}' has no inverse to run as its forward", self.method.id);
                Error::UnknownMethod(format!("{} has no inverse", self.method.id))
            })?;
            return inverse(self, ctx, operands);
        }
        (self.method.forward)(self, ctx, operands)
    }

    /// Run this operator's inverse transformation over `operands`: the
    /// bound method's `inverse` function, or its `forward` function if
    /// this operator carries the `inv` modifier.
    pub fn inv(&self, ctx: &dyn Context, operands: &mut dyn CoordinateSet) -> Result<usize, Error> {
        if self.omit_inverse() {
            return Ok(operands.len());
        }
        if self.inverted() {
            return (self.method.forward)(self, ctx, operands);
        }
        let inverse = self.method.inverse.ok_or_else(|| {
            warn!("Operator '{}' is not invertible", self.method.id);
            Error::UnknownMethod(format!("{} has no inverse", self.method.id))
        })?;
        inverse(self, ctx, operands)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Minimal;

    #[test]
    fn empty_definition_is_a_noop_pipeline() {
        let ctx = Minimal::new();
        let op = Operator::new(" ||| | ", &ctx).unwrap();
        assert!(op.is_noop());
        let mut data: Vec<Vec<f64>> = vec![vec![1.0, 2.0]];
        assert_eq!(op.fwd(&ctx, &mut data).unwrap(), 1);
    }

    #[test]
    fn unknown_method_name_errors() {
        let ctx = Minimal::new();
        let err = Operator::new("bogus", &ctx).unwrap_err();
        assert!(matches!(err, Error::UnknownMethod(_)));
    }

    #[test]
    fn inv_modifier_swaps_forward_and_inverse() {
        let ctx = Minimal::new();
        let op = Operator::new("addone inv", &ctx).unwrap();
        let mut data: Vec<Vec<f64>> = vec![vec![1.0, 2.0]];
        op.fwd(&ctx, &mut data).unwrap();
        assert_eq!(data[0][0], 0.0);
    }

    #[test]
    fn omit_fwd_leaves_operands_untouched() {
        let ctx = Minimal::new();
        let op = Operator::new("addone omit_fwd", &ctx).unwrap();
        let mut data: Vec<Vec<f64>> = vec![vec![1.0, 2.0]];
        op.fwd(&ctx, &mut data).unwrap();
        assert_eq!(data[0][0], 1.0);
    }
}
