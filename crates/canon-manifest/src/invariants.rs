//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::BuildError;

/// Unwrap a catalog build. A failure is a defect in a declaration table.
pub(crate) fn ensure_built<T>(catalog: &str, result: Result<T, BuildError>) -> T {
    result.unwrap_or_else(|err| panic!("Manifest: {catalog} failed to build: {err}"))
}

