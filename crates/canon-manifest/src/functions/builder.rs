use std::collections::HashSet;

use canon_core::Kind;
use tracing::{debug, trace};

use super::{CanonicalFunction, FunctionCatalog, Parameter, ReturnKind};
use crate::{BuildError, Result};

/// Parameter name every aggregate overload uses.
pub const AGGREGATE_PARAMETER: &str = "collection";

/// Accumulates overloads, then checks them for collisions.
///
/// Families expand one declaration over a set of eligible kinds. Colliding
/// signatures are reported by [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct FunctionCatalogBuilder {
    functions: Vec<CanonicalFunction>,
}

impl FunctionCatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of overloads declared so far.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Declare one scalar overload.
    pub fn add_function(
        &mut self,
        return_kind: Kind,
        name: &'static str,
        parameters: &[(&'static str, Kind)],
    ) -> &mut Self {
        let parameters = parameters
            .iter()
            .map(|&(param, kind)| Parameter::scalar(param, kind))
            .collect();
        self.functions
            .push(CanonicalFunction::new(name, return_kind, parameters, false));
        self
    }

    /// Declare one aggregate overload over a collection of `kind`.
    pub fn add_aggregate(&mut self, rule: ReturnKind, name: &'static str, kind: Kind) -> &mut Self {
        let parameters = vec![Parameter::collection(AGGREGATE_PARAMETER, kind)];
        self.functions.push(CanonicalFunction::new(
            name,
            rule.resolve(kind),
            parameters,
            true,
        ));
        self
    }

    /// Run `declare` once per eligible kind.
    ///
    /// `name` labels the family in diagnostics; an empty kind set is a
    /// declaration defect.
    pub fn family<F>(&mut self, name: &'static str, kinds: &[Kind], mut declare: F) -> Result<&mut Self>
    where
        F: FnMut(&mut Self, Kind),
    {
        if kinds.is_empty() {
            return Err(BuildError::EmptyFamily(name.to_owned()));
        }

        let before = self.functions.len();
        for &kind in kinds {
            declare(self, kind);
        }
        trace!(
            family = name,
            overloads = self.functions.len() - before,
            "function family declared"
        );
        Ok(self)
    }

    /// One aggregate overload per eligible kind.
    pub fn aggregate_family(
        &mut self,
        name: &'static str,
        rule: ReturnKind,
        kinds: &[Kind],
    ) -> Result<&mut Self> {
        self.family(name, kinds, |b, kind| {
            b.add_aggregate(rule, name, kind);
        })
    }

    /// One single-parameter scalar overload per eligible kind.
    pub fn unary_family(
        &mut self,
        name: &'static str,
        rule: ReturnKind,
        parameter: &'static str,
        kinds: &[Kind],
    ) -> Result<&mut Self> {
        self.family(name, kinds, |b, kind| {
            b.add_function(rule.resolve(kind), name, &[(parameter, kind)]);
        })
    }

    /// Check overload identity and freeze the catalog.
    pub fn finish(self) -> Result<FunctionCatalog> {
        let mut seen = HashSet::with_capacity(self.functions.len());
        for function in &self.functions {
            let signature = function.signature();
            if !seen.insert(signature.clone()) {
                return Err(BuildError::DuplicateOverload {
                    name: signature.name().to_owned(),
                    parameters: signature.parameter_list(),
                });
            }
        }

        let catalog = FunctionCatalog::new(self.functions);
        debug!(
            functions = catalog.len(),
            names = catalog.names().count(),
            aggregates = catalog.aggregates().count(),
            "function catalog built"
        );
        Ok(catalog)
    }
}
