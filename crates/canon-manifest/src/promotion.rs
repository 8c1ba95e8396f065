//! Implicit widening between kinds.
//!
//! Every kind maps to an ordered list of kinds it promotes to, starting with
//! itself. The table is verified on build: reflexive, closed under
//! transitivity, and never crossing between the spatial families or out of
//! them.

use std::slice;

use canon_core::{Kind, PrimitiveType};
use tracing::debug;

use crate::registry::KindRegistry;
use crate::{BuildError, Result};

/// Verified promotion table indexed by `Kind::index()`.
#[derive(Debug)]
pub struct PromotionLattice {
    entries: Box<[Box<[Kind]>]>,
}

impl PromotionLattice {
    /// The canonical widening table.
    pub fn build() -> Result<Self> {
        Self::from_table(Kind::ALL.into_iter().map(|kind| (kind, widening_targets(kind))))
    }

    /// Build from explicit entries. Kinds not listed promote only to themselves.
    pub fn from_table<I>(table: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Kind, Vec<Kind>)>,
    {
        let mut entries: Vec<Box<[Kind]>> = Kind::ALL.iter().map(|&k| Box::from([k])).collect();
        for (kind, targets) in table {
            entries[kind.index()] = targets.into_boxed_slice();
        }

        let lattice = Self {
            entries: entries.into_boxed_slice(),
        };
        lattice.verify()?;

        debug!(
            entries = lattice.entries.len(),
            edges = lattice.entries.iter().map(|t| t.len()).sum::<usize>(),
            "promotion lattice built"
        );
        Ok(lattice)
    }

    /// Kinds `kind` promotes to, `kind` first.
    #[inline]
    pub fn targets(&self, kind: Kind) -> &[Kind] {
        &self.entries[kind.index()]
    }

    pub fn is_promotable(&self, from: Kind, to: Kind) -> bool {
        self.targets(from).contains(&to)
    }

    /// Every entry, in kind order.
    pub fn iter(&self) -> impl Iterator<Item = (Kind, &[Kind])> {
        Kind::ALL.into_iter().map(|kind| (kind, self.targets(kind)))
    }

    /// Resolve the targets of `kind` to their canonical records.
    pub fn targets_in<'a>(&'a self, kind: Kind, registry: &'a KindRegistry) -> PromotionTargets<'a> {
        PromotionTargets {
            kinds: self.targets(kind).iter(),
            registry,
        }
    }

    fn verify(&self) -> Result<()> {
        for kind in Kind::ALL {
            if self.targets(kind).first() != Some(&kind) {
                return Err(BuildError::NonReflexivePromotion(kind));
            }
        }

        for (from, targets) in self.iter() {
            if let Some(&to) = targets
                .iter()
                .find(|to| to.spatial_family() != from.spatial_family())
            {
                return Err(BuildError::CrossFamilyPromotion { from, to });
            }
        }

        for (from, targets) in self.iter() {
            for &via in targets {
                for &to in self.targets(via) {
                    if !targets.contains(&to) {
                        return Err(BuildError::PromotionNotTransitive { from, via, to });
                    }
                }
            }
        }

        Ok(())
    }
}

/// Canonical widening list for one kind.
fn widening_targets(kind: Kind) -> Vec<Kind> {
    use Kind::*;

    match kind {
        Byte => vec![Byte, Int16, Int32, Int64, Decimal, Single, Double],
        Int16 => vec![Int16, Int32, Int64, Decimal, Single, Double],
        Int32 => vec![Int32, Int64, Decimal, Single, Double],
        Int64 => vec![Int64, Decimal, Single, Double],
        Single => vec![Single, Double],
        GeometryPoint
        | GeometryLineString
        | GeometryPolygon
        | GeometryMultiPoint
        | GeometryMultiLineString
        | GeometryMultiPolygon
        | GeometryCollection => vec![kind, Geometry],
        GeographyPoint
        | GeographyLineString
        | GeographyPolygon
        | GeographyMultiPoint
        | GeographyMultiLineString
        | GeographyMultiPolygon
        | GeographyCollection => vec![kind, Geography],
        Binary | Boolean | DateTime | Decimal | Double | Guid | SByte | String | Time
        | DateTimeOffset | Geometry | Geography => vec![kind],
    }
}

/// Promotion targets of one kind, yielded as canonical records.
#[derive(Clone, Debug)]
pub struct PromotionTargets<'a> {
    kinds: slice::Iter<'a, Kind>,
    registry: &'a KindRegistry,
}

impl<'a> PromotionTargets<'a> {
    /// The remaining targets as kinds.
    pub fn kinds(&self) -> &'a [Kind] {
        self.kinds.as_slice()
    }
}

impl<'a> Iterator for PromotionTargets<'a> {
    type Item = &'a PrimitiveType;

    fn next(&mut self) -> Option<Self::Item> {
        self.kinds.next().map(|&kind| self.registry.get(kind))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.kinds.size_hint()
    }
}

impl ExactSizeIterator for PromotionTargets<'_> {}
