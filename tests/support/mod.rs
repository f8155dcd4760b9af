//! Brute-force DPLL solver for tests only, grounded on the teacher's
//! `src/sat/dpll.rs`. The production encoder never solves anything (spec.md
//! §1 "Non-goals: no solver"); this exists purely so `tests/scenarios.rs`
//! can check that tiny instances (S <= 6) produce satisfiable/unsatisfiable
//! formulas and can enumerate all models, as spec.md §8's concrete
//! scenarios require.

use carseq::clause::Formula;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatResult {
    Sat(Vec<bool>),
    Unsat,
}

pub fn is_sat(formula: &Formula, num_vars: u32) -> bool {
    matches!(solve(formula, num_vars), SatResult::Sat(_))
}

pub fn solve(formula: &Formula, num_vars: u32) -> SatResult {
    let mut assignment = vec![None; num_vars as usize + 1];
    if search(formula, &mut assignment) {
        let model = assignment.into_iter().map(|v| v.unwrap_or(false)).collect();
        SatResult::Sat(model)
    } else {
        SatResult::Unsat
    }
}

/// Enumerates every satisfying assignment by brute force, for the tiny
/// instances spec.md §8's scenarios use. Returns full models (1-indexed,
/// index 0 unused) restricted to `relevant_vars` for de-duplication by the
/// caller (e.g. the position literals only, ignoring auxiliary variables).
pub fn all_models(formula: &Formula, num_vars: u32) -> Vec<Vec<bool>> {
    let mut models = Vec::new();
    let assignment = vec![None; num_vars as usize + 1];
    enumerate(formula, assignment, &mut models);
    models
}

/// Unlike `search`, which stops at the first model, this runs unit
/// propagation at every node so branching only ever happens on genuinely
/// undetermined variables — without it, the sequential-counter encodings
/// these tests exercise have too many forced-but-unpropagated literals for
/// plain binary branching to finish in reasonable time.
fn enumerate(formula: &Formula, assignment: Vec<Option<bool>>, out: &mut Vec<Vec<bool>>) {
    let mut assignment = assignment;
    if !unit_propagate(formula, &mut assignment) {
        return;
    }
    match eval_formula_partial(formula, &assignment) {
        Some(false) => return,
        Some(true) => {
            out.push(assignment.iter().map(|v| v.unwrap_or(false)).collect());
            return;
        }
        None => {}
    }
    let Some(var) = (1..assignment.len()).find(|&i| assignment[i].is_none()) else {
        return;
    };
    for value in [false, true] {
        let mut next = assignment.clone();
        next[var] = Some(value);
        enumerate(formula, next, out);
    }
}

fn search(formula: &Formula, assignment: &mut [Option<bool>]) -> bool {
    if !unit_propagate(formula, assignment) {
        return false;
    }
    match eval_formula_partial(formula, assignment) {
        Some(true) => return true,
        Some(false) => return false,
        None => {}
    }

    let Some(var) = (1..assignment.len()).find(|&i| assignment[i].is_none()) else {
        return false;
    };

    let mut try_true = assignment.to_vec();
    try_true[var] = Some(true);
    if search(formula, &mut try_true) {
        assignment.copy_from_slice(&try_true);
        return true;
    }

    let mut try_false = assignment.to_vec();
    try_false[var] = Some(false);
    if search(formula, &mut try_false) {
        assignment.copy_from_slice(&try_false);
        return true;
    }

    false
}

fn unit_propagate(formula: &Formula, assignment: &mut [Option<bool>]) -> bool {
    loop {
        let mut changed = false;
        for clause in &formula.clauses {
            let mut open_count = 0usize;
            let mut last_open_var = 0usize;
            let mut last_open_sign = true;
            let mut has_true = false;

            for lit in &clause.lits {
                let var = lit.var as usize;
                match assignment.get(var).copied().flatten() {
                    Some(v) if v == lit.sign => {
                        has_true = true;
                        break;
                    }
                    Some(_) => {}
                    None => {
                        open_count += 1;
                        last_open_var = var;
                        last_open_sign = lit.sign;
                    }
                }
            }

            if has_true {
                continue;
            }
            if open_count == 0 {
                return false;
            }
            if open_count == 1 {
                match assignment[last_open_var] {
                    Some(v) if v != last_open_sign => return false,
                    Some(_) => {}
                    None => {
                        assignment[last_open_var] = Some(last_open_sign);
                        changed = true;
                    }
                }
            }
        }
        if !changed {
            return true;
        }
    }
}

fn eval_formula_partial(formula: &Formula, assignment: &[Option<bool>]) -> Option<bool> {
    let mut all_true = true;
    for clause in &formula.clauses {
        let mut clause_true = false;
        let mut clause_false = true;
        for lit in &clause.lits {
            match assignment.get(lit.var as usize).copied().flatten() {
                Some(v) if v == lit.sign => {
                    clause_true = true;
                    clause_false = false;
                    break;
                }
                Some(_) => {}
                None => clause_false = false,
            }
        }
        if clause_true {
            continue;
        }
        if clause_false {
            return Some(false);
        }
        all_true = false;
    }
    if all_true { Some(true) } else { None }
}
