//! Feature-flag configuration (spec.md §6 "Invocation" / the flag table) and
//! preset expansion. Passed as an immutable record into the assembler and
//! every generator, per spec.md §9 ("Global configuration").

/// One flat, immutable configuration record. Presets (`e1`..`e5`) and the
/// `cnt` meta-flag are expanded once, at construction time, into the
/// individual flags they stand for (spec.md §6 table) — downstream code
/// never re-checks a preset flag, only the flags it expands to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub ex1: bool,
    pub sym: bool,
    pub id1: bool,
    pub id2: bool,
    pub id3: bool,
    pub id4: bool,
    pub id5: bool,
    pub id6: bool,
    pub id7: bool,
    pub id8: bool,
    pub id9: bool,
    pub ca1: bool,
    pub ca2: bool,
    pub ca3: bool,
    pub ca4: bool,
    pub ca5: bool,
    pub re1: bool,
    pub re2: bool,
    pub sbd: bool,
    pub ian: bool,
    pub debug: bool,
    /// `opt N`: `None` unless the optimisation counters are enabled, `Some(N)`
    /// with the configured cost bound otherwise (spec.md §4.10).
    pub opt: Option<i64>,
    /// `add N`: dummy cars to append (spec.md §3).
    pub add: i64,
}

/// Raw flags as the CLI surface presents them, before preset expansion.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFlags {
    pub e1: bool,
    pub e2: bool,
    pub e3: bool,
    pub e4: bool,
    pub e5: bool,
    pub ex1: bool,
    pub sym: bool,
    pub cnt: bool,
    pub id1: bool,
    pub id2: bool,
    pub id3: bool,
    pub id4: bool,
    pub id5: bool,
    pub id6: bool,
    pub id7: bool,
    pub id8: bool,
    pub id9: bool,
    pub ca1: bool,
    pub ca2: bool,
    pub ca3: bool,
    pub ca4: bool,
    pub ca5: bool,
    pub re1: bool,
    pub re2: bool,
    pub sbd: bool,
    pub ian: bool,
    pub debug: bool,
    pub opt: Option<i64>,
    pub add: i64,
}

impl Config {
    /// Expands presets and the `cnt` meta-flag into `Config` (spec.md §6
    /// table: `e1`..`e5` each expand to a fixed flag set; `cnt` expands to
    /// id1..id5).
    pub fn from_raw(raw: RawFlags) -> Self {
        let mut c = Config {
            ex1: raw.ex1,
            sym: raw.sym,
            id1: raw.id1,
            id2: raw.id2,
            id3: raw.id3,
            id4: raw.id4,
            id5: raw.id5,
            id6: raw.id6,
            id7: raw.id7,
            id8: raw.id8,
            id9: raw.id9,
            ca1: raw.ca1,
            ca2: raw.ca2,
            ca3: raw.ca3,
            ca4: raw.ca4,
            ca5: raw.ca5,
            re1: raw.re1,
            re2: raw.re2,
            sbd: raw.sbd,
            ian: raw.ian,
            debug: raw.debug,
            opt: raw.opt,
            add: raw.add,
        };

        if raw.e1 {
            c.ex1 = true;
            c.enable_cnt();
            c.enable_ca_all();
            c.id7 = true;
            c.id8 = true;
            c.id9 = true;
        }
        if raw.e2 {
            c.ex1 = true;
            c.enable_cnt();
            c.re1 = true;
            c.re2 = true;
            c.id7 = true;
            c.id8 = true;
            c.id9 = true;
        }
        if raw.e3 {
            c.ex1 = true;
            c.enable_cnt();
            c.id6 = true;
            c.id7 = true;
            c.id8 = true;
            c.id9 = true;
        }
        if raw.e4 {
            c.ex1 = true;
            c.enable_cnt();
            c.re1 = true;
            c.re2 = true;
            c.id6 = true;
            c.id7 = true;
            c.id8 = true;
            c.id9 = true;
        }
        if raw.e5 {
            c.ex1 = true;
            c.enable_cnt();
            c.enable_ca_all();
            c.re1 = true;
            c.re2 = true;
            c.id6 = true;
            c.id7 = true;
            c.id8 = true;
            c.id9 = true;
        }
        if raw.cnt {
            c.enable_cnt();
        }

        c
    }

    fn enable_cnt(&mut self) {
        self.id1 = true;
        self.id2 = true;
        self.id3 = true;
        self.id4 = true;
        self.id5 = true;
    }

    fn enable_ca_all(&mut self) {
        self.ca1 = true;
        self.ca2 = true;
        self.ca3 = true;
        self.ca4 = true;
        self.ca5 = true;
    }

    pub fn any_cardinality(&self) -> bool {
        self.id1 || self.id2 || self.id3 || self.id4
    }

    pub fn any_capacity(&self) -> bool {
        self.ca1 || self.ca2 || self.ca3 || self.ca4 || self.ca5
    }

    pub fn bounds_mode(&self) -> crate::model::BoundsMode {
        if self.sbd {
            crate::model::BoundsMode::Simple
        } else {
            crate::model::BoundsMode::Improved
        }
    }

    /// `opt > 0` is meant to be paired with `sbd` and without `re1`/`re2`
    /// (spec.md §4.10, §9 Open Questions). The source does not enforce
    /// this; this implementation only warns, returning the diagnostic
    /// message(s) for the caller to print.
    pub fn pairing_warnings(&self) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if self.opt.is_some() && !self.sbd {
            warnings.push(
                "opt > 0 without sbd: the cost counter is not anchored by the same window \
                 structure as the improved bounds; consider adding -sbd",
            );
        }
        if self.opt.is_some() && (self.re1 || self.re2) {
            warnings.push(
                "opt > 0 with re1/re2: the redundant propagators' relaxations can interact \
                 badly with the cost counter; consider dropping -re1/-re2",
            );
        }
        warnings
    }
}
