//! Variable registry (spec.md §4.1) and the three disjoint descriptor
//! families it allocates ids for (spec.md §3 "Variable descriptors").

use indexmap::IndexMap;

/// What a countable/positional entity refers to. `ExactlyOne` and
/// `Optimization` are auxiliary kinds introduced by the exactly-one chain
/// (§4.7) and the optimisation counter (§4.10) respectively — they only ever
/// appear as `Pos` descriptors (`ExactlyOne`) or across all three families
/// (`Optimization`), never as a user-facing option or class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Option,
    Class,
    ExactlyOne,
    Optimization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntityId {
    pub kind: Kind,
    pub index: usize,
}

impl EntityId {
    pub fn new(kind: Kind, index: usize) -> Self {
        Self { kind, index }
    }

    /// The optimisation-marker id tracking the same index as this entity,
    /// used by `createOptPositions`/`createOptCounter` (§4.10).
    pub fn as_optimization(self) -> Self {
        Self {
            kind: Kind::Optimization,
            index: self.index,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PosDesc {
    pub id: EntityId,
    pub pos: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountDesc {
    pub id: EntityId,
    pub pos: usize,
    pub count: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AtMostDesc {
    pub id: EntityId,
    pub first: usize,
    pub pos: usize,
    pub count: i64,
}

/// Allocates DIMACS variable ids on first reference and caches them.
/// Three independent maps partition the descriptor space (spec.md §4.1);
/// a flat, 1-indexed label table (index 0 left blank) backs `debug` output
/// and is filled in allocation order regardless of which family a
/// descriptor belongs to, matching the original's single symbol table.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    next_id: u32,
    pos: IndexMap<PosDesc, u32>,
    count: IndexMap<CountDesc, u32>,
    at_most: IndexMap<AtMostDesc, u32>,
    labels: Vec<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            pos: IndexMap::new(),
            count: IndexMap::new(),
            at_most: IndexMap::new(),
            labels: vec![String::new()],
        }
    }

    pub fn num_vars(&self) -> u32 {
        self.next_id
    }

    fn alloc(&mut self, label: String) -> u32 {
        self.next_id += 1;
        self.labels.push(label);
        self.next_id
    }

    pub fn pos_id(&mut self, d: PosDesc) -> u32 {
        if let Some(&id) = self.pos.get(&d) {
            return id;
        }
        let id = self.alloc(format_pos(d));
        self.pos.insert(d, id);
        id
    }

    pub fn count_id(&mut self, d: CountDesc) -> u32 {
        if let Some(&id) = self.count.get(&d) {
            return id;
        }
        let id = self.alloc(format_count(d));
        self.count.insert(d, id);
        id
    }

    pub fn at_most_id(&mut self, d: AtMostDesc) -> u32 {
        if let Some(&id) = self.at_most.get(&d) {
            return id;
        }
        let id = self.alloc(format_at_most(d));
        self.at_most.insert(d, id);
        id
    }

    /// `labels[0]` is the blank placeholder entry; `labels[v]` for `v in
    /// 1..=num_vars()` is the descriptor that allocated variable `v`.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

fn kind_word(kind: Kind) -> &'static str {
    match kind {
        Kind::Option => "option",
        Kind::Class => "class",
        Kind::ExactlyOne => "aux",
        Kind::Optimization => "opti",
    }
}

fn format_pos(d: PosDesc) -> String {
    format!("pos({},{},{})", kind_word(d.id.kind), d.id.index, d.pos)
}

fn format_count(d: CountDesc) -> String {
    format!(
        "count({},{},{},{})",
        kind_word(d.id.kind),
        d.id.index,
        d.pos,
        d.count
    )
}

fn format_at_most(d: AtMostDesc) -> String {
    format!(
        "atMost({},{},{},{},{})",
        kind_word(d.id.kind),
        d.id.index,
        d.first,
        d.pos,
        d.count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_descriptor_returns_same_id() {
        let mut reg = Registry::new();
        let d = PosDesc {
            id: EntityId::new(Kind::Class, 0),
            pos: 3,
        };
        let a = reg.pos_id(d);
        let b = reg.pos_id(d);
        assert_eq!(a, b);
        assert_eq!(reg.num_vars(), 1);
    }

    #[test]
    fn distinct_families_never_collide() {
        let mut reg = Registry::new();
        let pos_id = reg.pos_id(PosDesc {
            id: EntityId::new(Kind::Option, 0),
            pos: 0,
        });
        let count_id = reg.count_id(CountDesc {
            id: EntityId::new(Kind::Option, 0),
            pos: 0,
            count: 0,
        });
        let at_most_id = reg.at_most_id(AtMostDesc {
            id: EntityId::new(Kind::Option, 0),
            first: 0,
            pos: 0,
            count: 0,
        });
        assert_ne!(pos_id, count_id);
        assert_ne!(count_id, at_most_id);
        assert_ne!(pos_id, at_most_id);
        assert_eq!(reg.num_vars(), 3);
    }

    #[test]
    fn labels_len_is_num_vars_plus_one() {
        let mut reg = Registry::new();
        reg.pos_id(PosDesc {
            id: EntityId::new(Kind::Class, 1),
            pos: 2,
        });
        reg.count_id(CountDesc {
            id: EntityId::new(Kind::Class, 1),
            pos: 2,
            count: 1,
        });
        assert_eq!(reg.labels().len() as u32, reg.num_vars() + 1);
        assert_eq!(reg.labels()[0], "");
    }
}
