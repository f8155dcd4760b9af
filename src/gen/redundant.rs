//! Redundant short-window propagators, re1/re2 (spec.md §4.9). Pure
//! binary/ternary clauses over `Pos` literals; logically implied by the
//! ca/id encodings but cheap unit-propagation accelerants for options with
//! very tight capacity. Callers are expected to only invoke `re1` for
//! options with capacity 1 and `re2` for capacity 2 (spec.md's own
//! restriction); neither function re-checks the capacity itself.

use crate::clause::{Clause, Lit};
use crate::model::CountedEntity;
use crate::vars::{PosDesc, Registry};

/// At most one of any two positions less than `q` apart (u=1).
pub fn re1(reg: &mut Registry, size: usize, e: &CountedEntity) -> Vec<Clause> {
    let mut clauses = Vec::new();
    let q = e.window;
    for p in 0..size {
        for pp in (p + 1)..size {
            if pp - p >= q {
                break;
            }
            let lp = reg.pos_id(PosDesc { id: e.id, pos: p });
            let lpp = reg.pos_id(PosDesc { id: e.id, pos: pp });
            clauses.push(Clause::new("re1", vec![Lit::neg_var(lp), Lit::neg_var(lpp)]));
        }
    }
    clauses
}

/// At most two of any three positions spanning less than `q` (u=2).
pub fn re2(reg: &mut Registry, size: usize, e: &CountedEntity) -> Vec<Clause> {
    let mut clauses = Vec::new();
    let q = e.window;
    for p in 0..size {
        for pp in (p + 1)..size {
            if pp - p >= q {
                break;
            }
            for ppp in (pp + 1)..size {
                if ppp - p >= q {
                    break;
                }
                let lp = reg.pos_id(PosDesc { id: e.id, pos: p });
                let lpp = reg.pos_id(PosDesc { id: e.id, pos: pp });
                let lppp = reg.pos_id(PosDesc { id: e.id, pos: ppp });
                clauses.push(Clause::new(
                    "re2",
                    vec![Lit::neg_var(lp), Lit::neg_var(lpp), Lit::neg_var(lppp)],
                ));
            }
        }
    }
    clauses
}
