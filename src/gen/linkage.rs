//! Class-option linkage, id7/id8/id9 (spec.md §4.6): ties a class's position
//! variable to the position variables of the options it does or doesn't
//! carry. id7 and id9 are per-(class, option) binary implications; id8 is
//! id9's alternative, a single completion clause per option listing every
//! class that carries it.

use crate::clause::{Clause, Lit};
use crate::vars::{EntityId, PosDesc, Registry};

/// id7: class at position `p` implies option at position `p`, for every
/// (class, option) pair the instance marks as carrying the option.
pub fn class_implies_option(reg: &mut Registry, size: usize, class: EntityId, option: EntityId) -> Vec<Clause> {
    (0..size)
        .map(|p| {
            let pc = reg.pos_id(PosDesc { id: class, pos: p });
            let po = reg.pos_id(PosDesc { id: option, pos: p });
            Clause::new("id7", vec![Lit::neg_var(pc), Lit::pos(po)])
        })
        .collect()
}

/// id9: class at position `p` implies option absent at position `p`, for
/// every (class, option) pair the instance marks as NOT carrying the option.
/// Alternative to id8.
pub fn class_implies_not_option(
    reg: &mut Registry,
    size: usize,
    class: EntityId,
    option: EntityId,
) -> Vec<Clause> {
    (0..size)
        .map(|p| {
            let pc = reg.pos_id(PosDesc { id: class, pos: p });
            let po = reg.pos_id(PosDesc { id: option, pos: p });
            Clause::new("id9", vec![Lit::neg_var(pc), Lit::neg_var(po)])
        })
        .collect()
}

/// id8: option at position `p` implies one of the classes that carry it
/// occupies position `p`. Alternative to id9.
pub fn option_completion(
    reg: &mut Registry,
    size: usize,
    option: EntityId,
    carrying_classes: &[EntityId],
) -> Vec<Clause> {
    (0..size)
        .map(|p| {
            let po = reg.pos_id(PosDesc { id: option, pos: p });
            let mut lits = Vec::with_capacity(carrying_classes.len() + 1);
            lits.push(Lit::neg_var(po));
            for &class in carrying_classes {
                lits.push(Lit::pos(reg.pos_id(PosDesc { id: class, pos: p })));
            }
            Clause::new("id8", lits)
        })
        .collect()
}
