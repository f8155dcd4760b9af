//! CNF literal and clause representation shared by every generator.

/// A signed literal: `var` is a DIMACS variable id (always > 0), `sign`
/// is `true` for a positive occurrence and `false` for a negated one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Lit {
    pub var: u32,
    pub sign: bool,
}

impl Lit {
    pub fn new(var: u32, sign: bool) -> Self {
        Self { var, sign }
    }

    pub fn pos(var: u32) -> Self {
        Self { var, sign: true }
    }

    pub fn neg_var(var: u32) -> Self {
        Self { var, sign: false }
    }

    pub fn neg(self) -> Self {
        Self {
            var: self.var,
            sign: !self.sign,
        }
    }

    pub fn to_dimacs(self) -> i64 {
        let v = self.var as i64;
        if self.sign { v } else { -v }
    }
}

/// An annotated clause. The tag is never interpreted by the solver; it only
/// feeds the `debug` symbol-table/histogram output (spec.md §6, §9).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub tag: &'static str,
    pub lits: Vec<Lit>,
}

impl Clause {
    pub fn new(tag: &'static str, lits: Vec<Lit>) -> Self {
        Self { tag, lits }
    }
}

/// The append-only clause list produced by the assembler (spec.md §3
/// "Lifecycle"). Variable counts are owned by the registry, not here.
#[derive(Debug, Clone, Default)]
pub struct Formula {
    pub clauses: Vec<Clause>,
}

impl Formula {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: &'static str, lits: Vec<Lit>) {
        self.clauses.push(Clause::new(tag, lits));
    }

    pub fn extend(&mut self, other: Vec<Clause>) {
        self.clauses.extend(other);
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Histogram of clause counts per tag, for `debug` output (spec.md §6).
    pub fn tag_histogram(&self) -> indexmap::IndexMap<&'static str, usize> {
        let mut hist = indexmap::IndexMap::<&'static str, usize>::new();
        for c in &self.clauses {
            *hist.entry(c.tag).or_insert(0) += 1;
        }
        hist
    }
}
