//! Optimisation (cost) counters, op0-op4 (spec.md §4.10).
//!
//! `createOptPositions` forces an `Optimization`-kind `Pos` marker whenever a
//! sliding window exceeds its capacity, reusing the option's own `Count`
//! variables exactly like `id6` (tag `op0`). `createOptCounter` then runs a
//! second sequential counter — structurally id1-id4 again, tagged op1-op4 —
//! over those markers, counting violation incidents from position `B-1`
//! onward. No "counter ≥ B" assertion is emitted here; that belongs to a
//! driver that iterates `B` (spec.md §4.10, last paragraph).

use crate::clause::{Clause, Lit};
use crate::config::Config;
use crate::model::CountedEntity;
use crate::vars::{CountDesc, PosDesc, Registry};

/// Introduces `Pos(opti, p)` for every window that can exceed capacity
/// (tag `op0`; the unit/binary boundary at `p = q-1` is tagged `op1`).
/// Mirrors `atmostseqcard::at_most_seq6` but with an extra disjunct forcing
/// the marker true instead of forbidding the overshoot.
pub fn opt_positions(reg: &mut Registry, cfg_sbd: bool, size: usize, e: &CountedEntity) -> Vec<Clause> {
    let mut clauses = Vec::new();
    let q = e.window;
    let u = e.capacity as i64;
    if q == 0 || size < q {
        return clauses;
    }
    let opti = e.id.as_optimization();

    if cfg_sbd {
        let marker = reg.pos_id(PosDesc { id: opti, pos: q - 1 });
        let v = reg.count_id(CountDesc {
            id: e.id,
            pos: q - 1,
            count: u + 1,
        });
        clauses.push(Clause::new("op1", vec![Lit::pos(marker), Lit::neg_var(v)]));
    }

    for i in q..size {
        for j in e.lower[i - q]..e.upper[i - q] {
            let shifted = j + u;
            if shifted < e.upper[i] {
                let marker = reg.pos_id(PosDesc { id: opti, pos: i });
                let c1 = reg.count_id(CountDesc {
                    id: e.id,
                    pos: i - q,
                    count: j,
                });
                let c2 = reg.count_id(CountDesc {
                    id: e.id,
                    pos: i,
                    count: shifted,
                });
                clauses.push(Clause::new(
                    "op0",
                    vec![Lit::pos(marker), Lit::pos(c1), Lit::neg_var(c2)],
                ));
            }
        }
    }

    clauses
}

/// Cumulative counter over the `opti` markers, counting violations from
/// position `bound - 1` onward, untightened (band is `0..=demand` at every
/// position). Tags op1/op2/op3/op4 mirror id1/id2/id3/id4, gated by the
/// same `cfg` flags as their cardinality-counter counterparts.
pub fn opt_counter(reg: &mut Registry, cfg: &Config, size: usize, e: &CountedEntity, bound: i64) -> Vec<Clause> {
    let mut clauses = Vec::new();
    let opti = e.id.as_optimization();
    let d = e.demand;
    let start = (bound - 1).max(0) as usize;

    if start == 0 {
        if cfg.id3 {
            let p = reg.pos_id(PosDesc { id: opti, pos: 0 });
            let c = reg.count_id(CountDesc {
                id: opti,
                pos: 0,
                count: 1,
            });
            clauses.push(Clause::new("op3", vec![Lit::pos(p), Lit::neg_var(c)]));
        }
        if cfg.id4 {
            let p = reg.pos_id(PosDesc { id: opti, pos: 0 });
            let c = reg.count_id(CountDesc {
                id: opti,
                pos: 0,
                count: 1,
            });
            clauses.push(Clause::new("op4", vec![Lit::neg_var(p), Lit::pos(c)]));
        }
    }

    for i in start..size.saturating_sub(1) {
        for j in 0..=d {
            let c1 = reg.count_id(CountDesc {
                id: opti,
                pos: i,
                count: j,
            });
            let c2 = reg.count_id(CountDesc {
                id: opti,
                pos: i + 1,
                count: j,
            });
            if cfg.id1 {
                clauses.push(Clause::new("op1", vec![Lit::neg_var(c1), Lit::pos(c2)]));
            }
            if cfg.id3 {
                let p = reg.pos_id(PosDesc { id: opti, pos: i + 1 });
                clauses.push(Clause::new(
                    "op3",
                    vec![Lit::pos(p), Lit::pos(c1), Lit::neg_var(c2)],
                ));
            }
        }

        for j in 0..d {
            let c1 = reg.count_id(CountDesc {
                id: opti,
                pos: i,
                count: j,
            });
            let c2 = reg.count_id(CountDesc {
                id: opti,
                pos: i + 1,
                count: j + 1,
            });
            if cfg.id2 {
                clauses.push(Clause::new("op2", vec![Lit::pos(c1), Lit::neg_var(c2)]));
            }
            if cfg.id4 {
                let p = reg.pos_id(PosDesc { id: opti, pos: i + 1 });
                clauses.push(Clause::new(
                    "op4",
                    vec![Lit::neg_var(p), Lit::neg_var(c1), Lit::pos(c2)],
                ));
            }
        }
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vars::{EntityId, Kind};

    fn entity() -> CountedEntity {
        CountedEntity {
            id: EntityId::new(Kind::Option, 0),
            window: 2,
            capacity: 1,
            demand: 2,
            lower: vec![0, 0, 1, 1, 2],
            upper: vec![2, 2, 3, 3, 3],
        }
    }

    #[test]
    fn opt_positions_only_emits_op0() {
        let mut reg = Registry::new();
        let clauses = opt_positions(&mut reg, false, 5, &entity());
        assert!(clauses.iter().all(|c| c.tag == "op0"));
        assert!(!clauses.is_empty());
    }

    #[test]
    fn opt_counter_skips_positions_before_the_bound() {
        let mut reg = Registry::new();
        let cfg = Config {
            id1: true,
            id2: true,
            ..Default::default()
        };
        let clauses = opt_counter(&mut reg, &cfg, 5, &entity(), 4);
        // start = bound - 1 = 3, so only the i=3 transition (to i=4) runs.
        assert!(clauses.iter().all(|c| c.tag == "op1" || c.tag == "op2"));
        assert!(!clauses.is_empty());
    }

    #[test]
    fn opt_counter_emits_boundary_only_when_bound_is_one() {
        let mut reg = Registry::new();
        let cfg = Config {
            id3: true,
            id4: true,
            ..Default::default()
        };
        let clauses = opt_counter(&mut reg, &cfg, 3, &entity(), 1);
        assert!(clauses.iter().any(|c| c.lits.len() == 2));
    }
}
