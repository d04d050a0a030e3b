//! Error taxonomy registry and status resolution.
//!
//! The registry holds two tables keyed by ErrorTypeName:
//!
//! - the **taxonomy forest**: child name -> parent name
//! - the **status table**: name -> declared HTTP status
//!
//! [`TaxonomyRegistry::resolve_status`] walks a name's lineage (itself, its
//! parent, grandparent, ...) and returns the first declared status, or
//! [`FALLBACK_STATUS`] when the lineage declares none.
//!
//! # Invariants
//!
//! - The forest is acyclic: [`TaxonomyRegistry::register_parent`] rejects any
//!   pair that would make a type its own ancestor, leaving the forest unchanged.
//! - A child has exactly one parent: re-registering the same pair is a no-op,
//!   registering a different parent is rejected.
//! - Resolution is total and never fails.
//!
//! # Process-wide registry
//!
//! [`global`] returns the registry used by error constructors that are not
//! handed one explicitly. It is initialised once, behind a [`OnceLock`]
//! barrier, either lazily with [`TaxonomyRegistry::standard`] or eagerly via
//! [`install`]. After that it is read-only.
//!
//! ```rust
//! use common_errors::{define_error_kind, TaxonomyRegistry};
//!
//! define_error_kind!(QUOTA_ERROR, "QuotaError", "CommonError", 429);
//! define_error_kind!(DAILY_QUOTA_ERROR, "DailyQuotaError", "QuotaError");
//!
//! let mut registry = TaxonomyRegistry::standard();
//! registry.register_kind(&QUOTA_ERROR)?;
//! registry.register_kind(&DAILY_QUOTA_ERROR)?;
//!
//! assert_eq!(registry.resolve_status("DailyQuotaError"), 429);
//! assert!(registry.is_a("DailyQuotaError", "CommonError"));
//! # Ok::<(), common_errors::TaxonomyError>(())
//! ```

use crate::definitions::STANDARD_KINDS;
use crate::status::FALLBACK_STATUS;
use crate::ErrorKind;
use smallvec::SmallVec;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Configuration error raised while building the taxonomy.
///
/// These indicate a mistake in an error catalog, not a runtime condition,
/// and should abort initialisation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
    /// The pair would make `child` its own ancestor.
    #[error("registering {child} under {parent} would create a cycle")]
    Cycle {
        /// Kind being registered.
        child: String,
        /// Requested parent; `child` itself or one of its descendants.
        parent: String,
    },
    /// `child` is already registered under another parent.
    #[error("{child} already specializes {existing}; cannot re-register under {requested}")]
    ConflictingParent {
        /// Kind being registered.
        child: String,
        /// Parent it already has.
        existing: String,
        /// Parent asked for now.
        requested: String,
    },
}

/// Parent and status tables for a set of error types.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyRegistry {
    parents: HashMap<String, String>,
    statuses: HashMap<String, u16>,
}

impl TaxonomyRegistry {
    /// An empty registry: every name resolves to [`FALLBACK_STATUS`].
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every kind in [`STANDARD_KINDS`].
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for kind in STANDARD_KINDS {
            let result = registry.register_kind(kind);
            debug_assert!(result.is_ok(), "standard catalog rejected {}: {result:?}", kind.name());
        }
        registry
    }

    /// Build a registry from a catalog, stopping at the first configuration error.
    pub fn from_kinds<'k>(kinds: impl IntoIterator<Item = &'k ErrorKind>) -> Result<Self, TaxonomyError> {
        let mut registry = Self::new();
        for kind in kinds {
            registry.register_kind(kind)?;
        }
        Ok(registry)
    }

    /// Register a descriptor: its parent link (if any), then its status (if any).
    pub fn register_kind(&mut self, kind: &ErrorKind) -> Result<(), TaxonomyError> {
        if let Some(parent) = kind.specializes() {
            self.register_parent(kind.name(), parent)?;
        }
        if let Some(status) = kind.status() {
            self.register_status(kind.name(), status);
        }
        Ok(())
    }

    /// Record that `child` specializes `parent`.
    ///
    /// # Errors
    ///
    /// - [`TaxonomyError::ConflictingParent`] if `child` already has a different parent
    /// - [`TaxonomyError::Cycle`] if `child` is `parent` or one of its ancestors
    ///
    /// On error the forest is left unchanged.
    pub fn register_parent(
        &mut self,
        child: impl Into<String>,
        parent: impl Into<String>,
    ) -> Result<(), TaxonomyError> {
        let child = child.into();
        let parent = parent.into();

        if let Some(existing) = self.parents.get(&child) {
            if *existing == parent {
                return Ok(());
            }
            return Err(TaxonomyError::ConflictingParent {
                child,
                existing: existing.clone(),
                requested: parent,
            });
        }

        if self.lineage(&parent).any(|ancestor| ancestor == child) {
            return Err(TaxonomyError::Cycle { child, parent });
        }

        self.parents.insert(child, parent);
        Ok(())
    }

    /// Declare a default status for `name`. The last declaration wins.
    pub fn register_status(&mut self, name: impl Into<String>, status: u16) {
        self.statuses.insert(name.into(), status);
    }

    /// Status for `name`: its own declaration, else the nearest ancestor's,
    /// else [`FALLBACK_STATUS`].
    pub fn resolve_status(&self, name: &str) -> u16 {
        self.lineage(name)
            .find_map(|ancestor| self.statuses.get(ancestor).copied())
            .unwrap_or(FALLBACK_STATUS)
    }

    /// Status declared by `name` itself, ignoring ancestors.
    #[inline]
    pub fn declared_status(&self, name: &str) -> Option<u16> {
        self.statuses.get(name).copied()
    }

    /// Direct parent of `name`.
    #[inline]
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.parents.get(name).map(String::as_str)
    }

    /// `name` followed by each of its ancestors, nearest first.
    pub fn lineage<'a>(&'a self, name: &'a str) -> Lineage<'a> {
        Lineage {
            registry: self,
            next: Some(name),
            remaining: self.parents.len() + 1,
        }
    }

    /// Lineage collected inline; taxonomies are shallow.
    pub fn ancestry<'a>(&'a self, name: &'a str) -> SmallVec<[&'a str; 8]> {
        self.lineage(name).collect()
    }

    /// True if `name` is `ancestor` or specializes it transitively.
    pub fn is_a(&self, name: &str, ancestor: &str) -> bool {
        self.lineage(name).any(|n| n == ancestor)
    }

    /// True if `name` appears in either table.
    pub fn is_registered(&self, name: &str) -> bool {
        self.parents.contains_key(name)
            || self.statuses.contains_key(name)
            || self.parents.values().any(|parent| parent == name)
    }
}

/// Iterator over a name and its ancestors. See [`TaxonomyRegistry::lineage`].
#[derive(Debug, Clone)]
pub struct Lineage<'a> {
    registry: &'a TaxonomyRegistry,
    next: Option<&'a str>,
    // Upper bound on steps; the forest is acyclic so this is never reached.
    remaining: usize,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.remaining -= 1;
        self.next = self.registry.parent_of(current);
        Some(current)
    }
}

static GLOBAL: OnceLock<TaxonomyRegistry> = OnceLock::new();

/// The process-wide registry, initialised with the standard catalog on first use.
pub fn global() -> &'static TaxonomyRegistry {
    GLOBAL.get_or_init(TaxonomyRegistry::standard)
}

/// Install `registry` as the process-wide registry.
///
/// Must run before the first call to [`global`] (directly or through error
/// construction). Returns the registry back if one is already in place.
pub fn install(registry: TaxonomyRegistry) -> Result<(), TaxonomyRegistry> {
    GLOBAL.set(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::*;
    use crate::{define_error_kinds, status};

    #[test]
    fn empty_registry_falls_back() {
        let registry = TaxonomyRegistry::new();
        assert_eq!(registry.resolve_status("NotFoundError"), FALLBACK_STATUS);
        assert_eq!(registry.parent_of("NotFoundError"), None);
    }

    #[test]
    fn standard_catalog_resolution() {
        let registry = TaxonomyRegistry::standard();
        assert_eq!(registry.resolve_status("NotFoundError"), status::NOT_FOUND);
        assert_eq!(registry.resolve_status("NoAccessFileError"), status::FORBIDDEN);
        assert_eq!(registry.resolve_status("AuthenticationRequiredError"), status::UNAUTHORIZED);
        assert_eq!(registry.resolve_status("UnavailableError"), 500);
        assert_eq!(registry.resolve_status("SomethingElseError"), FALLBACK_STATUS);
    }

    #[test]
    fn standard_catalog_registers_cleanly() {
        let strict = TaxonomyRegistry::from_kinds(STANDARD_KINDS).unwrap();
        let lenient = TaxonomyRegistry::standard();
        for kind in STANDARD_KINDS {
            assert_eq!(strict.parent_of(kind.name()), lenient.parent_of(kind.name()));
            assert_eq!(strict.resolve_status(kind.name()), lenient.resolve_status(kind.name()));
        }
    }

    #[test]
    fn lineage_walks_nearest_first() {
        let registry = TaxonomyRegistry::standard();
        let chain = registry.ancestry(NO_ACCESS_FILE_ERROR.name());
        assert_eq!(
            chain.as_slice(),
            &["NoAccessFileError", "NoAccessError", "AuthError", "CommonError"]
        );
        assert!(registry.is_a("NoAccessFileError", "AuthError"));
        assert!(registry.is_a("AuthError", "AuthError"));
        assert!(!registry.is_a("AuthError", "NoAccessError"));
    }

    #[test]
    fn reregistering_same_pair_is_noop() {
        let mut registry = TaxonomyRegistry::new();
        registry.register_parent("B", "A").unwrap();
        registry.register_parent("B", "A").unwrap();
        assert_eq!(registry.parent_of("B"), Some("A"));
    }

    #[test]
    fn conflicting_parent_rejected() {
        let mut registry = TaxonomyRegistry::new();
        registry.register_parent("B", "A").unwrap();
        let err = registry.register_parent("B", "C").unwrap_err();
        assert_eq!(
            err,
            TaxonomyError::ConflictingParent {
                child: "B".into(),
                existing: "A".into(),
                requested: "C".into(),
            }
        );
        assert_eq!(registry.parent_of("B"), Some("A"));
    }

    #[test]
    fn cycles_rejected_and_forest_unchanged() {
        let mut registry = TaxonomyRegistry::new();
        registry.register_parent("A", "B").unwrap();
        registry.register_parent("B", "C").unwrap();

        let err = registry.register_parent("C", "A").unwrap_err();
        assert!(matches!(err, TaxonomyError::Cycle { .. }));
        assert_eq!(registry.parent_of("C"), None);

        assert!(matches!(
            registry.register_parent("D", "D"),
            Err(TaxonomyError::Cycle { .. })
        ));
        assert_eq!(registry.parent_of("D"), None);
    }

    #[test]
    fn own_status_beats_inherited() {
        let mut registry = TaxonomyRegistry::new();
        registry.register_parent("Child", "Parent").unwrap();
        registry.register_status("Parent", 409);
        assert_eq!(registry.resolve_status("Child"), 409);

        registry.register_status("Child", 410);
        assert_eq!(registry.resolve_status("Child"), 410);
        assert_eq!(registry.resolve_status("Parent"), 409);
    }

    #[test]
    fn last_status_declaration_wins() {
        let mut registry = TaxonomyRegistry::new();
        registry.register_status("X", 400);
        registry.register_status("X", 422);
        assert_eq!(registry.declared_status("X"), Some(422));
    }

    #[test]
    fn from_kinds_reports_conflicts() {
        define_error_kinds! {
            FIRST = ("DupError", "CommonError"),
            SECOND = ("DupError", "AuthError"),
        }
        let result = TaxonomyRegistry::from_kinds([&COMMON_ERROR, &AUTH_ERROR, &FIRST, &SECOND]);
        assert!(matches!(result, Err(TaxonomyError::ConflictingParent { .. })));
    }

    #[test]
    fn registration_is_tracked() {
        let registry = TaxonomyRegistry::standard();
        assert!(registry.is_registered("CommonError"));
        assert!(registry.is_registered("UnavailableError"));
        assert!(!registry.is_registered("NopeError"));
    }

    #[test]
    fn global_registry_is_standard() {
        assert_eq!(global().resolve_status("NotImplementedError"), status::NOT_IMPLEMENTED);
    }
}
