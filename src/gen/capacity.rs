//! Sliding-window capacity counter, ca1-ca5 (spec.md §4.5).
//!
//! For each window start `first`, `atMost(id, first, pos, n)` tracks how many
//! of the window's cars (from `first` up to `pos`) use the option, biased so
//! that `n` counts "at most" rather than "at least" — ca1/ca2 chain the
//! counter, ca3/ca4 add the position-guarded converse, ca5 pins the boundary
//! values of each window directly.

use crate::clause::{Clause, Lit};
use crate::config::Config;
use crate::model::CountedEntity;
use crate::vars::{AtMostDesc, PosDesc, Registry};

pub fn capacity_constraints(
    reg: &mut Registry,
    cfg: &Config,
    size: usize,
    e: &CountedEntity,
) -> Vec<Clause> {
    let mut clauses = Vec::new();
    let q = e.window;
    let u = e.capacity;

    if q == 0 || size < q {
        return clauses;
    }

    for first in 0..=(size - q) {
        if cfg.ca3 {
            let p0 = reg.pos_id(PosDesc { id: e.id, pos: first });
            let am2 = reg.at_most_id(AtMostDesc {
                id: e.id,
                first,
                pos: first,
                count: 1,
            });
            clauses.push(Clause::new("ca3", vec![Lit::pos(p0), Lit::neg_var(am2)]));
        }

        for i in first..first + q - 1 {
            for j in 0..=(u as i64 + 1) {
                let am1 = reg.at_most_id(AtMostDesc {
                    id: e.id,
                    first,
                    pos: i,
                    count: j,
                });
                let am2 = reg.at_most_id(AtMostDesc {
                    id: e.id,
                    first,
                    pos: i + 1,
                    count: j,
                });
                if cfg.ca1 {
                    clauses.push(Clause::new("ca1", vec![Lit::neg_var(am1), Lit::pos(am2)]));
                }
                if cfg.ca3 {
                    let p = reg.pos_id(PosDesc { id: e.id, pos: i + 1 });
                    clauses.push(Clause::new(
                        "ca3",
                        vec![Lit::pos(p), Lit::pos(am1), Lit::neg_var(am2)],
                    ));
                }
            }
        }

        if cfg.ca4 {
            let p0 = reg.pos_id(PosDesc { id: e.id, pos: first });
            let am2 = reg.at_most_id(AtMostDesc {
                id: e.id,
                first,
                pos: first,
                count: 1,
            });
            clauses.push(Clause::new("ca4", vec![Lit::neg_var(p0), Lit::pos(am2)]));
        }

        for i in first..first + q - 1 {
            for j in 0..=(u as i64) {
                let am1 = reg.at_most_id(AtMostDesc {
                    id: e.id,
                    first,
                    pos: i,
                    count: j,
                });
                let am2 = reg.at_most_id(AtMostDesc {
                    id: e.id,
                    first,
                    pos: i + 1,
                    count: j + 1,
                });
                if cfg.ca2 {
                    clauses.push(Clause::new("ca2", vec![Lit::pos(am1), Lit::neg_var(am2)]));
                }
                if cfg.ca4 {
                    let p = reg.pos_id(PosDesc { id: e.id, pos: i + 1 });
                    clauses.push(Clause::new(
                        "ca4",
                        vec![Lit::neg_var(p), Lit::neg_var(am1), Lit::pos(am2)],
                    ));
                }
            }
        }

        if cfg.ca5 {
            let am1 = reg.at_most_id(AtMostDesc {
                id: e.id,
                first,
                pos: first,
                count: 2,
            });
            let am2 = reg.at_most_id(AtMostDesc {
                id: e.id,
                first,
                pos: first + q - 1,
                count: u as i64 + 1,
            });
            let am3 = reg.at_most_id(AtMostDesc {
                id: e.id,
                first,
                pos: first,
                count: 0,
            });
            clauses.push(Clause::new("ca5", vec![Lit::neg_var(am1)]));
            clauses.push(Clause::new("ca5", vec![Lit::neg_var(am2)]));
            clauses.push(Clause::new("ca5", vec![Lit::pos(am3)]));
        }
    }

    clauses
}
