//! One canonical `PrimitiveType` per kind.

use canon_core::{Kind, PrimitiveType};
use tracing::debug;

/// Primitive type records indexed by `Kind::index()`.
#[derive(Debug)]
pub struct KindRegistry {
    types: Box<[PrimitiveType]>,
}

impl KindRegistry {
    /// Allocate one record per kind.
    ///
    /// Total by construction: `Kind::ALL` is in discriminant order, so the
    /// record at position `i` always describes the kind with index `i`.
    pub fn build() -> Self {
        let types: Box<[PrimitiveType]> = Kind::ALL.into_iter().map(PrimitiveType::new).collect();
        debug!(kinds = types.len(), "kind registry built");
        Self { types }
    }

    /// The record for `kind`. Never fails for a valid kind.
    #[inline]
    pub fn get(&self, kind: Kind) -> &PrimitiveType {
        &self.types[kind.index()]
    }

    /// Dynamic lookup by bare or `Edm.`-qualified name.
    pub fn by_name(&self, name: &str) -> canon_core::Result<&PrimitiveType> {
        Kind::from_name(name).map(|kind| self.get(kind))
    }

    /// Every record, in kind order.
    pub fn iter(&self) -> impl Iterator<Item = &PrimitiveType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
