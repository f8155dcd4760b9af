//! Sequence-reversal symmetry breaking, sym (spec.md §4.8).
//!
//! Reuses the `ExactlyOne` chain auxiliaries built by `exactly_one` to force
//! the class id at position 0 to be lexicographically ≤ the class id at the
//! last position: `aux[i]` is true once a class at or below `i` has been
//! selected, so comparing `aux[i]` at position 0 against position `S-1` for
//! every prefix `i` is exactly a lexicographic compare over the one-hot
//! chain, finished off by a direct tie-break on the top class.

use crate::clause::{Clause, Lit};
use crate::vars::{EntityId, Kind, PosDesc, Registry};

pub fn symmetry_breaking(reg: &mut Registry, size: usize, class_count: usize) -> Vec<Clause> {
    let mut clauses = Vec::new();
    if size == 0 || class_count < 2 {
        return clauses;
    }
    let last = size - 1;

    for i in 0..class_count.saturating_sub(1) {
        let aux_first = reg.pos_id(PosDesc {
            id: EntityId::new(Kind::ExactlyOne, i),
            pos: 0,
        });
        let aux_last = reg.pos_id(PosDesc {
            id: EntityId::new(Kind::ExactlyOne, i),
            pos: last,
        });
        clauses.push(Clause::new(
            "sym",
            vec![Lit::pos(aux_first), Lit::neg_var(aux_last)],
        ));
    }

    let top = class_count - 1;
    let top_first = reg.pos_id(PosDesc {
        id: EntityId::new(Kind::Class, top),
        pos: 0,
    });
    let top_last = reg.pos_id(PosDesc {
        id: EntityId::new(Kind::Class, top),
        pos: last,
    });
    let aux_top_last = reg.pos_id(PosDesc {
        id: EntityId::new(Kind::ExactlyOne, top - 1),
        pos: last,
    });
    clauses.push(Clause::new(
        "sym",
        vec![
            Lit::pos(top_first),
            Lit::neg_var(top_last),
            Lit::neg_var(aux_top_last),
        ],
    ));

    clauses
}
