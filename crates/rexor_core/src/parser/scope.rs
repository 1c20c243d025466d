//! Capture-group name scoping.
//!
//! Whether `(?<n>…)` may reuse a name declared earlier depends on the
//! edition:
//!
//! - Before ES2025 the whole pattern is one flat namespace — a repeated
//!   name is always a duplicate.
//! - From ES2025, a name may be reused when every earlier declaration sits
//!   in a *disjoint* alternation branch: `(?<n>a)|(?<n>b)` is fine,
//!   `(?<n>a)(?<n>b)` is not.
//!
//! The ES2025 rule is implemented with a tree of branch identities built
//! as the validator walks disjunctions. Entering a disjunction descends to
//! a fresh child; entering alternative *k* (k ≥ 1) steps sideways to a new
//! sibling; leaving pops back to the parent. All alternatives of one
//! disjunction share a `base` (the first alternative's node), and two
//! branches are **separated** when they are distinct nodes with the same
//! base, or — recursively — when one is separated from the other's parent.

use std::collections::{HashMap, HashSet};

// ─────────────────────────────────────────────────────────────────────────────
// Branch identity arena
// ─────────────────────────────────────────────────────────────────────────────

/// Opaque identifier for a branch node within one pattern walk.
type BranchId = usize;

/// One node in the branch-identity tree.
#[derive(Debug, Clone, Copy)]
struct BranchNode {
    /// The branch this one was forked from, or `None` at the pattern root.
    parent: Option<BranchId>,
    /// Shared identity of all alternatives of one disjunction.
    base: BranchId,
}

/// ES2025 branch-scoped name registry.
#[derive(Debug, Default)]
struct BranchedNames {
    arena: Vec<BranchNode>,
    /// The branch the validator is currently inside.
    current: BranchId,
    /// Every declared name, with the branch of each declaration.
    names: HashMap<String, Vec<BranchId>>,
}

impl BranchedNames {
    fn new() -> Self {
        let mut s = Self::default();
        s.arena.push(BranchNode {
            parent: None,
            base: 0,
        });
        s.current = 0;
        s
    }

    fn enter_disjunction(&mut self) {
        let id = self.arena.len();
        self.arena.push(BranchNode {
            parent: Some(self.current),
            base: id,
        });
        self.current = id;
    }

    fn enter_alternative(&mut self, index: usize) {
        if index == 0 {
            return;
        }
        let node = self.arena[self.current];
        let id = self.arena.len();
        self.arena.push(BranchNode {
            parent: node.parent,
            base: node.base,
        });
        self.current = id;
    }

    fn leave_disjunction(&mut self) {
        // The root has no parent; the validator never pops past it.
        if let Some(parent) = self.arena[self.current].parent {
            self.current = parent;
        }
    }

    /// Two branches are separated when no string can be matched inside
    /// both: distinct siblings of one disjunction, or recursively
    /// separated from the other's ancestor.
    fn separated_from(&self, a: BranchId, b: BranchId) -> bool {
        let (na, nb) = (self.arena[a], self.arena[b]);
        if na.base == nb.base && a != b {
            return true;
        }
        if let Some(pb) = nb.parent {
            if self.separated_from(a, pb) {
                return true;
            }
        }
        if let Some(pa) = na.parent {
            if self.separated_from(pa, b) {
                return true;
            }
        }
        false
    }

    fn has_in_scope(&self, name: &str) -> bool {
        self.names
            .get(name)
            .is_some_and(|branches| {
                branches
                    .iter()
                    .any(|&b| !self.separated_from(b, self.current))
            })
    }

    fn add_to_scope(&mut self, name: &str) {
        self.names
            .entry(name.to_owned())
            .or_default()
            .push(self.current);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Public registry
// ─────────────────────────────────────────────────────────────────────────────

/// Per-parse registry of declared capture-group names.
///
/// Constructed fresh for every pattern walk; the branch tree lives only as
/// long as the walk.
#[derive(Debug)]
pub struct GroupNames {
    inner: Inner,
}

#[derive(Debug)]
enum Inner {
    /// Flat namespace (editions before 2025).
    Flat(HashSet<String>),
    /// Branch-scoped namespace (ES2025).
    Branched(BranchedNames),
}

impl GroupNames {
    /// Creates a flat registry (duplicates always rejected).
    pub fn flat() -> Self {
        Self {
            inner: Inner::Flat(HashSet::new()),
        }
    }

    /// Creates a branch-scoped registry (ES2025 semantics).
    pub fn branched() -> Self {
        Self {
            inner: Inner::Branched(BranchedNames::new()),
        }
    }

    /// The validator is entering a disjunction.
    pub fn enter_disjunction(&mut self) {
        if let Inner::Branched(b) = &mut self.inner {
            b.enter_disjunction();
        }
    }

    /// The validator is entering the `index`-th alternative of the current
    /// disjunction.
    pub fn enter_alternative(&mut self, index: usize) {
        if let Inner::Branched(b) = &mut self.inner {
            b.enter_alternative(index);
        }
    }

    /// The validator is leaving a disjunction.
    pub fn leave_disjunction(&mut self) {
        if let Inner::Branched(b) = &mut self.inner {
            b.leave_disjunction();
        }
    }

    /// Returns `true` when declaring `name` here would collide with an
    /// earlier declaration in a non-separated branch.
    pub fn has_in_scope(&self, name: &str) -> bool {
        match &self.inner {
            Inner::Flat(set) => set.contains(name),
            Inner::Branched(b) => b.has_in_scope(name),
        }
    }

    /// Records a declaration of `name` at the current branch.
    pub fn add_to_scope(&mut self, name: &str) {
        match &mut self.inner {
            Inner::Flat(set) => {
                set.insert(name.to_owned());
            }
            Inner::Branched(b) => b.add_to_scope(name),
        }
    }
}
