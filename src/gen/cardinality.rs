//! Sequential cardinality counter, id1-id5 (spec.md §4.3).
//!
//! `count(id, pos, n)` is true iff at least `n` of the option/class's cars
//! occupy the first `pos+1` positions. id1/id2 chain the counter forward
//! (implication only); id3/id4 add the converse direction guarded by the
//! position literal (full biconditional); id5 pins the counter to its
//! precomputed bounds at every position.

use crate::clause::{Clause, Lit};
use crate::config::Config;
use crate::model::CountedEntity;
use crate::vars::{CountDesc, PosDesc, Registry};

pub fn counter(reg: &mut Registry, cfg: &Config, size: usize, e: &CountedEntity) -> Vec<Clause> {
    let mut clauses = Vec::new();

    if cfg.id3 {
        let p = reg.pos_id(PosDesc { id: e.id, pos: 0 });
        let c = reg.count_id(CountDesc {
            id: e.id,
            pos: 0,
            count: 1,
        });
        clauses.push(Clause::new("id3", vec![Lit::pos(p), Lit::neg_var(c)]));
    }

    for i in 0..size.saturating_sub(1) {
        for j in e.lower[i]..=e.upper[i] {
            let c1 = reg.count_id(CountDesc {
                id: e.id,
                pos: i,
                count: j,
            });
            let c2 = reg.count_id(CountDesc {
                id: e.id,
                pos: i + 1,
                count: j,
            });
            if cfg.id1 {
                clauses.push(Clause::new("id1", vec![Lit::neg_var(c1), Lit::pos(c2)]));
            }
            if cfg.id3 {
                let p = reg.pos_id(PosDesc { id: e.id, pos: i + 1 });
                clauses.push(Clause::new(
                    "id3",
                    vec![Lit::pos(p), Lit::pos(c1), Lit::neg_var(c2)],
                ));
            }
        }
    }

    if cfg.id4 {
        let p = reg.pos_id(PosDesc { id: e.id, pos: 0 });
        let c = reg.count_id(CountDesc {
            id: e.id,
            pos: 0,
            count: 1,
        });
        clauses.push(Clause::new("id4", vec![Lit::neg_var(p), Lit::pos(c)]));
    }

    for i in 0..size.saturating_sub(1) {
        for j in e.lower[i]..e.upper[i] {
            let c1 = reg.count_id(CountDesc {
                id: e.id,
                pos: i,
                count: j,
            });
            let c2 = reg.count_id(CountDesc {
                id: e.id,
                pos: i + 1,
                count: j + 1,
            });
            if cfg.id2 {
                clauses.push(Clause::new("id2", vec![Lit::pos(c1), Lit::neg_var(c2)]));
            }
            if cfg.id4 {
                let p = reg.pos_id(PosDesc { id: e.id, pos: i + 1 });
                clauses.push(Clause::new(
                    "id4",
                    vec![Lit::neg_var(p), Lit::neg_var(c1), Lit::pos(c2)],
                ));
            }
        }
    }

    clauses
}

/// Pins the counter to its precomputed bounds at every position (id5).
pub fn at_most_seq5(reg: &mut Registry, size: usize, e: &CountedEntity) -> Vec<Clause> {
    let mut clauses = Vec::with_capacity(size * 2);
    for i in 0..size {
        let lo = reg.count_id(CountDesc {
            id: e.id,
            pos: i,
            count: e.lower[i],
        });
        clauses.push(Clause::new("id5", vec![Lit::pos(lo)]));

        let hi = reg.count_id(CountDesc {
            id: e.id,
            pos: i,
            count: e.upper[i],
        });
        clauses.push(Clause::new("id5", vec![Lit::neg_var(hi)]));
    }
    clauses
}
