//! The manifest facade and its process-wide instance.

use std::sync::{LazyLock, OnceLock};

use canon_core::facet::DEFAULT_TIME_PRECISION;
use canon_core::{FacetDescription, FacetValue, Kind, NAMESPACE, PrimitiveType, TypeUsage};
use tracing::debug;

use crate::facets::FacetCatalog;
use crate::functions::FunctionCatalog;
use crate::invariants::ensure_built;
use crate::promotion::{PromotionLattice, PromotionTargets};
use crate::registry::KindRegistry;

static GLOBAL: LazyLock<Manifest> = LazyLock::new(Manifest::new);

/// Knobs a manifest is built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManifestConfig {
    /// Include the spatial function family in the function catalog.
    pub spatial_functions: bool,
    /// Default Precision of `Time` and `DateTimeOffset`.
    pub date_time_precision_default: u8,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            spatial_functions: true,
            date_time_precision_default: DEFAULT_TIME_PRECISION,
        }
    }
}

/// Builder for a [`Manifest`] with non-default configuration.
#[derive(Clone, Debug, Default)]
pub struct ManifestBuilder {
    config: ManifestConfig,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_spatial_functions(mut self, enabled: bool) -> Self {
        self.config.spatial_functions = enabled;
        self
    }

    pub fn with_date_time_precision_default(mut self, precision: u8) -> Self {
        self.config.date_time_precision_default = precision;
        self
    }

    /// Create the manifest. No catalog is built until first accessed.
    pub fn build(self) -> Manifest {
        Manifest::with_config(self.config)
    }
}

/// The canonical type manifest.
///
/// Every catalog sits in its own cell and is built on first access. Racing
/// first accesses block on the cell until one build publishes; every caller
/// then sees the same value. Canonical usages read the registry and facets,
/// promotion targets read the registry; no other cell forces another.
#[derive(Debug)]
pub struct Manifest {
    config: ManifestConfig,
    registry: OnceLock<KindRegistry>,
    facets: OnceLock<FacetCatalog>,
    promotions: OnceLock<PromotionLattice>,
    functions: OnceLock<FunctionCatalog>,
    usages: OnceLock<Box<[TypeUsage]>>,
}

impl Default for Manifest {
    fn default() -> Self {
        Self::new()
    }
}

impl Manifest {
    /// A manifest with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ManifestConfig::default())
    }

    pub fn builder() -> ManifestBuilder {
        ManifestBuilder::new()
    }

    pub fn with_config(config: ManifestConfig) -> Self {
        Self {
            config,
            registry: OnceLock::new(),
            facets: OnceLock::new(),
            promotions: OnceLock::new(),
            functions: OnceLock::new(),
            usages: OnceLock::new(),
        }
    }

    /// The process-wide manifest, default configuration.
    pub fn global() -> &'static Manifest {
        &GLOBAL
    }

    #[inline]
    pub fn config(&self) -> &ManifestConfig {
        &self.config
    }

    /// Namespace every canonical type and function lives in.
    pub fn namespace_name(&self) -> &'static str {
        NAMESPACE
    }

    pub fn registry(&self) -> &KindRegistry {
        self.registry.get_or_init(KindRegistry::build)
    }

    pub fn facet_catalog(&self) -> &FacetCatalog {
        self.facets.get_or_init(|| {
            ensure_built(
                "facet catalog",
                FacetCatalog::build(self.config.date_time_precision_default),
            )
        })
    }

    pub fn promotion_lattice(&self) -> &PromotionLattice {
        self.promotions
            .get_or_init(|| ensure_built("promotion lattice", PromotionLattice::build()))
    }

    /// Canonical record of `kind`. Repeated calls return the same reference.
    pub fn primitive_type(&self, kind: Kind) -> &PrimitiveType {
        self.registry().get(kind)
    }

    /// Dynamic lookup by bare or qualified name.
    pub fn primitive_type_by_name(&self, name: &str) -> canon_core::Result<&PrimitiveType> {
        self.registry().by_name(name)
    }

    /// Every canonical record, in kind order.
    pub fn primitive_types(&self) -> impl Iterator<Item = &PrimitiveType> {
        self.registry().iter()
    }

    /// Facet descriptions of `kind`; empty for kinds without facets.
    pub fn facets_for(&self, kind: impl Into<Kind>) -> &[FacetDescription] {
        self.facet_catalog().facets_for(kind.into())
    }

    /// Kinds `kind` implicitly widens to, `kind` first.
    pub fn promotion_targets(&self, kind: impl Into<Kind>) -> PromotionTargets<'_> {
        self.promotion_lattice()
            .targets_in(kind.into(), self.registry())
    }

    pub fn is_promotable(&self, from: Kind, to: Kind) -> bool {
        self.promotion_lattice().is_promotable(from, to)
    }

    pub fn functions(&self) -> &FunctionCatalog {
        self.functions.get_or_init(|| {
            ensure_built(
                "function catalog",
                FunctionCatalog::canonical(self.config.spatial_functions),
            )
        })
    }

    /// Usage of `kind` with every facet at its default value.
    pub fn canonical_type_usage(&self, kind: Kind) -> &TypeUsage {
        let usages = self.usages.get_or_init(|| {
            let usages: Box<[TypeUsage]> = self
                .primitive_types()
                .map(|ty| TypeUsage::with_defaults(ty.clone(), self.facets_for(ty)))
                .collect();
            debug!(usages = usages.len(), "canonical type usages built");
            usages
        });
        &usages[kind.index()]
    }

    /// Canonical usage of `kind` with `overrides` applied in order.
    pub fn type_usage(
        &self,
        kind: Kind,
        overrides: &[(&str, FacetValue)],
    ) -> canon_core::Result<TypeUsage> {
        overrides
            .iter()
            .try_fold(self.canonical_type_usage(kind).clone(), |usage, &(name, value)| {
                usage.with_facet(name, value)
            })
    }

    /// Drop every facet override: the canonical usage of the same kind.
    pub fn forget_scalar_constraints(&self, usage: &TypeUsage) -> &TypeUsage {
        self.canonical_type_usage(usage.kind())
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod manifest_tests;
