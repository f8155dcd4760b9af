//! IAN redundant-constraint diagnostic, ian (spec.md §4.11). Pure
//! analysis over the instance; never touches the registry and never
//! contributes clauses — the assembler does not call this module at all
//! (spec.md §9: "do not wire its output into the CNF"). It is wired up only
//! at the CLI layer, which prints `format_report`'s output when `-ian` is
//! given.

use crate::instance::Instance;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub options: Vec<usize>,
    pub cap12: i64,
    pub cap1k: i64,
    pub cap2k: i64,
    pub demand: i64,
    pub supply: i64,
    pub rest: i64,
}

/// Enumerates every non-empty subset of options as a bitmask and flags the
/// ones satisfying one of the three arithmetic conditions (spec.md §4.11).
/// The empty subset is skipped: its `cap12`/`cap1k` are always zero, so it
/// can never satisfy a condition. Instances with more than 24 options make
/// the exponential scan impractical; this matches the source's own
/// limitation rather than imposing a new one.
pub fn diagnostic_report(instance: &Instance) -> Vec<Finding> {
    let m = instance.option_count;
    if m == 0 || m > 24 {
        return Vec::new();
    }

    let mut findings = Vec::new();
    for mask in 1u32..(1u32 << m) {
        let options: Vec<usize> = (0..m).filter(|&j| mask & (1 << j) != 0).collect();

        let mut cap12 = 0i64;
        let mut cap1k = 0i64;
        let mut cap2k = 0i64;
        for &j in &options {
            let o = &instance.options[j];
            if o.window == 2 && o.capacity == 1 {
                cap12 += 1;
            } else if o.window > 2 && o.capacity == 1 {
                cap1k += 1;
            } else if o.window > 2 && o.capacity == 2 {
                cap2k += 1;
            }
        }

        let mut demand = 0i64;
        let mut supply = 0i64;
        let mut rest = 0i64;
        for class in &instance.classes {
            let superset = options.iter().all(|&j| class.has_option[j]);
            let disjoint = options.iter().all(|&j| !class.has_option[j]);
            if superset {
                demand += class.demand;
            } else if disjoint {
                supply += class.demand;
            } else {
                rest += class.demand;
            }
        }

        let flagged = (cap12 > 0 && cap2k == 0 && demand - 2 >= supply)
            || (cap1k > 0 && cap2k == 0 && 2 * (demand - 1) >= supply)
            || (cap1k > 0 && cap2k == 1 && demand - 2 >= supply);

        if flagged {
            findings.push(Finding {
                options,
                cap12,
                cap1k,
                cap2k,
                demand,
                supply,
                rest,
            });
        }
    }
    findings
}

/// Renders findings as DIMACS comment lines, ready to interleave with the
/// rest of the `c`-prefixed commentary (spec.md §6).
pub fn format_report(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return "c ian: no redundant subsets found\n".to_string();
    }
    let mut out = String::new();
    for f in findings {
        out.push_str(&format!(
            "c ian: T={:?} cap12={} cap1k={} cap2k={} demand={} supply={} rest={}\n",
            f.options, f.cap12, f.cap1k, f.cap2k, f.demand, f.supply, f.rest
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instance::Instance;

    #[test]
    fn no_options_produces_no_findings() {
        let inst = Instance {
            size: 2,
            option_count: 0,
            class_count: 1,
            options: vec![],
            classes: vec![crate::instance::ClassSpec {
                demand: 2,
                has_option: vec![],
                window: 1,
                capacity: 1,
            }],
            comments: vec![],
        };
        assert!(diagnostic_report(&inst).is_empty());
    }

    #[test]
    fn a_tight_capacity_one_option_can_be_flagged() {
        // S=4, one option q=2,u=1 carried by a 3-demand class, one
        // option-free class with demand 1: demand(=3) - 2 = 1 >= supply(=1).
        let text = "4 1 2\n1\n2\n0 3 1\n1 1 0\n";
        let inst = Instance::parse(text).expect("parse");
        let findings = diagnostic_report(&inst);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].options, vec![0]);
        assert_eq!(findings[0].cap12, 1);
        assert_eq!(findings[0].demand, 3);
        assert_eq!(findings[0].supply, 1);
    }

    #[test]
    fn format_report_handles_the_empty_case() {
        assert_eq!(format_report(&[]), "c ian: no redundant subsets found\n");
    }
}
