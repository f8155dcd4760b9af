//! AtMostSeqCard, id6 (spec.md §4.4): reuses the cardinality counter's own
//! `count` variables to express the window-capacity bound, instead of the
//! dedicated `atMost` family capacity.rs builds. Saves the extra variable
//! family at the cost of only firing where both positions' bound ranges
//! already make the implication informative.

use crate::clause::{Clause, Lit};
use crate::model::CountedEntity;
use crate::vars::{CountDesc, Registry};

pub fn at_most_seq6(reg: &mut Registry, cfg_sbd: bool, size: usize, e: &CountedEntity) -> Vec<Clause> {
    let mut clauses = Vec::new();
    let q = e.window;
    let u = e.capacity as i64;

    if q == 0 || size < q {
        return clauses;
    }

    if cfg_sbd {
        let v = reg.count_id(CountDesc {
            id: e.id,
            pos: q - 1,
            count: u + 1,
        });
        clauses.push(Clause::new("id6", vec![Lit::neg_var(v)]));
    }

    for i in q..size {
        for j in e.lower[i - q]..e.upper[i - q] {
            let shifted = j + u;
            if e.lower[i] <= shifted && shifted < e.upper[i] {
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
                clauses.push(Clause::new("id6", vec![Lit::pos(c1), Lit::neg_var(c2)]));
            }
        }
    }

    clauses
}
