//! Exactly-one-class-per-position, ex1 (spec.md §4.7).
//!
//! At each position, a chain of auxiliary `ExactlyOne` variables threads
//! through the classes in order: `aux[j]` becomes true the first time a
//! class at or below `j` is selected, and cannot become true again once a
//! later class is selected (the `lt1` clauses). The final `gt1` clause lists
//! every class's position literal, forcing at least one to hold — combined
//! with the per-class at-most-one-position cardinality counters elsewhere,
//! this gives exactly one.

use crate::clause::{Clause, Lit};
use crate::vars::{EntityId, Kind, PosDesc, Registry};

pub fn exactly_one(reg: &mut Registry, size: usize, class_count: usize) -> Vec<Clause> {
    let mut clauses = Vec::new();
    if class_count == 0 {
        return clauses;
    }

    for i in 0..size {
        let mut at_least_one = Vec::with_capacity(class_count);

        for j in 0..class_count.saturating_sub(1) {
            let pos_j = reg.pos_id(PosDesc {
                id: EntityId::new(Kind::Class, j),
                pos: i,
            });
            let pos_j1 = reg.pos_id(PosDesc {
                id: EntityId::new(Kind::Class, j + 1),
                pos: i,
            });
            at_least_one.push(Lit::pos(pos_j));

            let aux_j = reg.pos_id(PosDesc {
                id: EntityId::new(Kind::ExactlyOne, j),
                pos: i,
            });

            clauses.push(Clause::new("lt1", vec![Lit::neg_var(pos_j), Lit::pos(aux_j)]));
            clauses.push(Clause::new("lt1", vec![Lit::neg_var(pos_j1), Lit::neg_var(aux_j)]));

            if j < class_count.saturating_sub(2) {
                let aux_j1 = reg.pos_id(PosDesc {
                    id: EntityId::new(Kind::ExactlyOne, j + 1),
                    pos: i,
                });
                clauses.push(Clause::new("lt1", vec![Lit::neg_var(aux_j), Lit::pos(aux_j1)]));
            }
        }

        let last = reg.pos_id(PosDesc {
            id: EntityId::new(Kind::Class, class_count - 1),
            pos: i,
        });
        at_least_one.push(Lit::pos(last));

        clauses.push(Clause::new("gt1", at_least_one));
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_gt1_clause_per_position() {
        let mut reg = Registry::new();
        let clauses = exactly_one(&mut reg, 3, 4);
        assert_eq!(clauses.iter().filter(|c| c.tag == "gt1").count(), 3);
    }

    #[test]
    fn single_class_has_no_lt1_chain() {
        let mut reg = Registry::new();
        let clauses = exactly_one(&mut reg, 2, 1);
        assert!(clauses.iter().all(|c| c.tag == "gt1"));
        assert_eq!(clauses.len(), 2);
    }
}
