//! `Context`: the extensibility seam through which operators are built,
//! registered, and invoked, and `Minimal`, the crate-provided
//! implementation of it.

use crate::operators::BUILTIN_METHODS;
use crate::{CoordinateSet, Error, Operator, OperatorMethod};
use std::collections::BTreeMap;
use uuid::Uuid;

/// Which way a coordinate transformation runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Fwd,
    Inv,
}

/// An opaque, globally-unique reference to an [`Operator`] held by a
/// [`Context`]. Two handles are equal only if they refer to the exact
/// same `op` call; there is no content-based equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpHandle(Uuid);

impl OpHandle {
    /// Mint a fresh, globally-unique handle. Exposed so that user-provided
    /// `Context` implementations can issue handles the same way
    /// [`Minimal`] does.
    #[must_use]
    pub fn new() -> OpHandle {
        OpHandle(Uuid::new_v4())
    }
}

impl Default for OpHandle {
    fn default() -> OpHandle {
        OpHandle::new()
    }
}

/// The seam through which callers construct and invoke operators.
/// Implementations own the registry of available operator methods and the
/// table of live operators built from them; the crate ships one
/// implementation, [`Minimal`], and callers may supply their own.
pub trait Context {
    /// Register (or overwrite, by id) an operator method.
    fn register_operator_method(&mut self, method: OperatorMethod);

    /// Look up a registered operator method by id.
    fn operator_method(&self, id: &str) -> Option<&OperatorMethod>;

    /// The ids of every currently registered operator method.
    fn builtins(&self) -> Vec<&str>;

    /// Parse `definition`, build the `Operator` it describes, store it,
    /// and return a handle to it.
    fn op(&mut self, definition: &str) -> Result<OpHandle, Error>;

    /// Run the operator referred to by `handle` over `operands`, in the
    /// given direction, returning the number of tuples transformed. An
    /// unknown handle is a soft failure: it returns `Ok(0)` rather than
    /// an error.
    ///
    /// Callers must not share one `CoordinateSet` between concurrent
    /// `apply` calls: the exclusive `&mut` borrow on `operands` already
    /// makes that a compile-time property for any single call, but two
    /// calls against two different coordinate sets referring to the same
    /// underlying storage are the caller's responsibility to avoid.
    fn apply(
        &self,
        handle: OpHandle,
        direction: Direction,
        operands: &mut dyn CoordinateSet,
    ) -> Result<usize, Error>;
}

/// The minimal, in-process [`Context`] implementation: an operator-method
/// registry seeded from the crate's built-ins, and a table of operators
/// built so far.
pub struct Minimal {
    methods: BTreeMap<String, OperatorMethod>,
    operators: BTreeMap<OpHandle, Operator>,
}

impl Minimal {
    #[must_use]
    pub fn new() -> Minimal {
        let methods = BUILTIN_METHODS
            .iter()
            .map(|m| (m.id.to_string(), *m))
            .collect();
        Minimal {
            methods,
            operators: BTreeMap::new(),
        }
    }
}

impl Default for Minimal {
    fn default() -> Minimal {
        Minimal::new()
    }
}

impl Context for Minimal {
    fn register_operator_method(&mut self, method: OperatorMethod) {
        self.methods.insert(method.id.to_string(), method);
    }

    fn operator_method(&self, id: &str) -> Option<&OperatorMethod> {
        self.methods.get(id)
    }

    fn builtins(&self) -> Vec<&str> {
        BUILTIN_METHODS.iter().map(|m| m.id).collect()
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
