//! Type usages: a primitive type together with facet values.

use std::fmt;

use serde::Serialize;

use crate::facet::{self, Facet, FacetDescription, FacetValue};
use crate::{Error, Kind, PrimitiveType, Result};

/// A primitive type with one facet per description of its kind.
///
/// Facets keep the order of the kind's descriptions. A usage built with
/// [`TypeUsage::with_defaults`] carries no overrides: every facet holds its
/// description's default (possibly unset).
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize)]
pub struct TypeUsage {
    primitive: PrimitiveType,
    facets: Vec<Facet>,
}

impl TypeUsage {
    /// Usage of `primitive` with every facet at its default value.
    pub fn with_defaults(primitive: PrimitiveType, descriptions: &[FacetDescription]) -> Self {
        let facets = descriptions
            .iter()
            .map(FacetDescription::default_facet)
            .collect();
        Self { primitive, facets }
    }

    #[inline]
    pub fn primitive(&self) -> &PrimitiveType {
        &self.primitive
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.primitive.kind()
    }

    #[inline]
    pub fn facets(&self) -> &[Facet] {
        &self.facets
    }

    /// Look up a facet by name.
    pub fn facet(&self, name: &str) -> Option<&Facet> {
        self.facets.iter().find(|f| f.name() == name)
    }

    /// Value of a facet, `None` when the facet is absent or unset.
    pub fn facet_value(&self, name: &str) -> Option<FacetValue> {
        self.facet(name).and_then(Facet::value)
    }

    /// Copy of this usage with one facet overridden.
    pub fn with_facet(&self, name: &str, value: FacetValue) -> Result<Self> {
        let Some(position) = self.facets.iter().position(|f| f.name() == name) else {
            return Err(Error::UnknownFacet {
                kind: self.kind(),
                facet: name.to_owned(),
            });
        };

        let mut facets = self.facets.clone();
        facets[position] = facets[position].with_value(value)?;

        Ok(Self {
            primitive: self.primitive.clone(),
            facets,
        })
    }

    /// Stable textual identity: `Edm.String(MaxLength=,Unicode=true,FixedLength=)`.
    ///
    /// Only identity facets are listed, so usages differing in `IsStrict`
    /// alone share an identity. A usage without facets renders `Edm.Int32()`.
    pub fn identity(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TypeUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.primitive)?;
        let identity = self
            .facets
            .iter()
            .filter(|facet| facet::is_identity_facet(facet.name()));
        for (i, facet) in identity.enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{facet}")?;
        }
        f.write_str(")")
    }
}
