//! Builtin canonical functions.
//!
//! The catalog is generated by [`FunctionCatalogBuilder`] from declarative
//! families (one overload per eligible kind) rather than listed overload by
//! overload. Overload identity is the function name together with the full
//! ordered tuple of parameter kinds.

mod builder;
mod canonical;
mod spatial;


use std::fmt;

use canon_core::{Kind, NAMESPACE};
use indexmap::IndexMap;
use serde::Serialize;

pub use builder::{AGGREGATE_PARAMETER, FunctionCatalogBuilder};
pub use canonical::{MIN_MAX_KINDS, SUMMABLE_KINDS};

/// Declared type of a parameter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize)]
pub enum ParameterType {
    Scalar(Kind),
    /// A sequence of values of the kind. Only aggregates take one.
    Collection(Kind),
}

impl ParameterType {
    /// Element kind, for collections.
    pub fn kind(self) -> Kind {
        match self {
            Self::Scalar(kind) | Self::Collection(kind) => kind,
        }
    }

    pub fn is_collection(self) -> bool {
        matches!(self, Self::Collection(_))
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(kind) => write!(f, "{kind}"),
            Self::Collection(kind) => write!(f, "Collection({kind})"),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Parameter {
    name: &'static str,
    ty: ParameterType,
}

impl Parameter {
    pub fn scalar(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            ty: ParameterType::Scalar(kind),
        }
    }

    pub fn collection(name: &'static str, kind: Kind) -> Self {
        Self {
            name,
            ty: ParameterType::Collection(kind),
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn ty(&self) -> ParameterType {
        self.ty
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.ty.kind()
    }
}

/// How an overload's return kind follows from its argument kind.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ReturnKind {
    /// The return kind is the argument kind.
    SameAsArgument,
    /// The return kind is fixed regardless of the argument.
    Fixed(Kind),
}

impl ReturnKind {
    pub fn resolve(self, argument: Kind) -> Kind {
        match self {
            Self::SameAsArgument => argument,
            Self::Fixed(kind) => kind,
        }
    }
}

/// Overload identity: name plus ordered parameter kinds.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct Signature {
    name: &'static str,
    parameters: Vec<Kind>,
}

impl Signature {
    pub fn new(name: &'static str, parameters: Vec<Kind>) -> Self {
        Self { name, parameters }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn parameters(&self) -> &[Kind] {
        &self.parameters
    }

    /// Parameter kinds joined with `, `.
    pub fn parameter_list(&self) -> String {
        self.parameters
            .iter()
            .map(|k| k.name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.parameter_list())
    }
}

/// One builtin overload.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct CanonicalFunction {
    name: &'static str,
    return_kind: Kind,
    parameters: Vec<Parameter>,
    is_aggregate: bool,
}

impl CanonicalFunction {
    pub(crate) fn new(
        name: &'static str,
        return_kind: Kind,
        parameters: Vec<Parameter>,
        is_aggregate: bool,
    ) -> Self {
        Self {
            name,
            return_kind,
            parameters,
            is_aggregate,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn namespace(&self) -> &'static str {
        NAMESPACE
    }

    /// `Edm.<name>`.
    pub fn full_name(&self) -> String {
        format!("{NAMESPACE}.{}", self.name)
    }

    #[inline]
    pub fn return_kind(&self) -> Kind {
        self.return_kind
    }

    #[inline]
    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn parameter_kinds(&self) -> impl Iterator<Item = Kind> + '_ {
        self.parameters.iter().map(Parameter::kind)
    }

    /// Aggregates consume a sequence and need a grouping context.
    #[inline]
    pub fn is_aggregate(&self) -> bool {
        self.is_aggregate
    }

    /// Every function in the canonical catalog is builtin.
    pub fn is_builtin(&self) -> bool {
        true
    }

    pub fn signature(&self) -> Signature {
        Signature::new(self.name, self.parameter_kinds().collect())
    }

    fn matches(&self, kinds: &[Kind]) -> bool {
        self.parameters.len() == kinds.len() && self.parameter_kinds().eq(kinds.iter().copied())
    }
}

impl fmt::Display for CanonicalFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, p) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", p.name, p.ty)?;
        }
        write!(f, ") -> {}", self.return_kind)?;
        if self.is_aggregate {
            f.write_str(" [aggregate]")?;
        }
        Ok(())
    }
}

/// The finished, immutable function catalog.
///
/// Iteration order is declaration order and stable across builds.
#[derive(Debug)]
pub struct FunctionCatalog {
    functions: Vec<CanonicalFunction>,
    by_name: IndexMap<&'static str, Vec<usize>>,
}

impl FunctionCatalog {
    /// The canonical catalog, optionally without the spatial family.
    pub fn canonical(include_spatial: bool) -> crate::Result<Self> {
        let mut builder = FunctionCatalogBuilder::new();
        canonical::declare(&mut builder)?;
        if include_spatial {
            spatial::declare(&mut builder);
        }
        builder.finish()
    }

    fn new(functions: Vec<CanonicalFunction>) -> Self {
        let mut by_name: IndexMap<&'static str, Vec<usize>> = IndexMap::new();
        for (i, function) in functions.iter().enumerate() {
            by_name.entry(function.name).or_default().push(i);
        }
        Self { functions, by_name }
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CanonicalFunction> {
        self.functions.iter()
    }

    pub fn as_slice(&self) -> &[CanonicalFunction] {
        &self.functions
    }

    /// All overloads sharing `name`, in declaration order.
    pub fn overloads<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a CanonicalFunction> {
        self.by_name
            .get(name)
            .into_iter()
            .flatten()
            .map(|&i| &self.functions[i])
    }

    /// The overload of `name` whose parameter kinds are exactly `kinds`.
    pub fn resolve(&self, name: &str, kinds: &[Kind]) -> Option<&CanonicalFunction> {
        self.overloads(name).find(|f| f.matches(kinds))
    }

    pub fn aggregates(&self) -> impl Iterator<Item = &CanonicalFunction> {
        self.functions.iter().filter(|f| f.is_aggregate)
    }

    /// Distinct function names, in first-declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.by_name.keys().copied()
    }
}

impl<'a> IntoIterator for &'a FunctionCatalog {
    type Item = &'a CanonicalFunction;
    type IntoIter = std::slice::Iter<'a, CanonicalFunction>;

    fn into_iter(self) -> Self::IntoIter {
        self.functions.iter()
    }
}
