//! The car sequencing instance: data model (spec.md §3) and the textual
//! parser for the external file format (spec.md §6). Parsing itself is an
//! "external collaborator" per spec.md's Scope section, but a faithful
//! implementation still needs it to be a runnable program, so it is given a
//! small, well-tested module rather than hand-waved.

use thiserror::Error;

use crate::model::{BoundsMode, CountedEntity};
use crate::vars::{EntityId, Kind};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected a header line 'S M K', found none")]
    MissingHeader,
    #[error("header line has {found} field(s), expected 3 (S M K)")]
    BadHeaderArity { found: usize },
    #[error("expected a capacity line with {expected} field(s), found {found}")]
    BadCapacityArity { expected: usize, found: usize },
    #[error("expected a window line with {expected} field(s), found {found}")]
    BadWindowArity { expected: usize, found: usize },
    #[error("non-numeric token '{token}' where an integer was expected")]
    NotAnInteger { token: String },
    #[error("class row has {found} field(s), expected {expected} (index, demand, {option_count} option bits)")]
    BadClassArity {
        found: usize,
        expected: usize,
        option_count: usize,
    },
    #[error("class row declares index {declared}, expected the next row to be {expected}")]
    OutOfOrderClassIndex { declared: usize, expected: usize },
    #[error("option bit must be 0 or 1, found {value}")]
    BadOptionBit { value: i64 },
    #[error("expected {expected} class row(s), found {found}")]
    MissingClassRows { expected: usize, found: usize },
}

/// Configuration inconsistencies rejected after a structurally valid parse
/// (spec.md §7 "EncodeError"): the file parses, but the values it carries
/// would make a downstream generator degenerate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    #[error("option {index} has window 0, which makes every window-capacity clause degenerate")]
    ZeroWindow { index: usize },
    #[error("option {index} has capacity 0, which forbids the option outright")]
    ZeroCapacity { index: usize },
}

#[derive(Debug, Clone)]
pub struct OptionSpec {
    pub capacity: usize,
    pub window: usize,
    /// d_j^opt = Σ_{i : has_option[i][j]} d_i, accumulated while parsing.
    pub demand: i64,
}

#[derive(Debug, Clone)]
pub struct ClassSpec {
    pub demand: i64,
    pub has_option: Vec<bool>,
    /// Window/capacity inherited from this class's tightest-slope option;
    /// (1, 1) if the class carries no options (spec.md §3 "CountedEntity").
    pub window: usize,
    pub capacity: usize,
}

#[derive(Debug, Clone)]
pub struct Instance {
    pub size: usize,
    pub option_count: usize,
    pub class_count: usize,
    pub options: Vec<OptionSpec>,
    pub classes: Vec<ClassSpec>,
    /// Non-numeric lines encountered while parsing, verbatim, in order
    /// (spec.md §6: "echoed as DIMACS comments").
    pub comments: Vec<String>,
}

impl Instance {
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut comments = Vec::new();
        let mut numeric_lines = Vec::<Vec<i64>>::new();

        for line in text.lines() {
            let trimmed = line.trim();
            let mut tokens = trimmed.split_whitespace();
            let Some(first) = tokens.next() else {
                continue;
            };
            if !is_digits(first) {
                comments.push(line.to_string());
                continue;
            }
            let mut fields = Vec::with_capacity(4);
            fields.push(parse_int(first)?);
            for tok in tokens {
                fields.push(parse_int(tok)?);
            }
            numeric_lines.push(fields);
        }

        let mut lines = numeric_lines.into_iter();

        let header = lines.next().ok_or(ParseError::MissingHeader)?;
        if header.len() != 3 {
            return Err(ParseError::BadHeaderArity {
                found: header.len(),
            });
        }
        let size = header[0].max(0) as usize;
        let option_count = header[1].max(0) as usize;
        let class_count = header[2].max(0) as usize;

        let cap_line = lines.next().unwrap_or_default();
        if cap_line.len() != option_count {
            return Err(ParseError::BadCapacityArity {
                expected: option_count,
                found: cap_line.len(),
            });
        }
        let win_line = lines.next().unwrap_or_default();
        if win_line.len() != option_count {
            return Err(ParseError::BadWindowArity {
                expected: option_count,
                found: win_line.len(),
            });
        }

        let mut options = Vec::with_capacity(option_count);
        for j in 0..option_count {
            options.push(OptionSpec {
                capacity: cap_line[j].max(0) as usize,
                window: win_line[j].max(0) as usize,
                demand: 0,
            });
        }

        let expected_class_fields = option_count + 2;
        let mut classes = Vec::with_capacity(class_count);
        for expected_idx in 0..class_count {
            let row = lines.next().ok_or(ParseError::MissingClassRows {
                expected: class_count,
                found: classes.len(),
            })?;
            if row.len() != expected_class_fields {
                return Err(ParseError::BadClassArity {
                    found: row.len(),
                    expected: expected_class_fields,
                    option_count,
                });
            }
            let declared = row[0];
            if declared != expected_idx as i64 {
                return Err(ParseError::OutOfOrderClassIndex {
                    declared: declared.max(0) as usize,
                    expected: expected_idx,
                });
            }
            let demand = row[1];
            let mut has_option = Vec::with_capacity(option_count);
            let mut window = 1usize;
            let mut capacity = 1usize;
            let mut slope = 1.0f64;
            for j in 0..option_count {
                let bit = row[2 + j];
                if bit != 0 && bit != 1 {
                    return Err(ParseError::BadOptionBit { value: bit });
                }
                let has = bit == 1;
                has_option.push(has);
                if has {
                    options[j].demand += demand;
                    let slope2 = options[j].capacity as f64 / options[j].window as f64;
                    if slope2 < slope {
                        slope = slope2;
                        window = options[j].window;
                        capacity = options[j].capacity;
                    }
                }
            }
            classes.push(ClassSpec {
                demand,
                has_option,
                window,
                capacity,
            });
        }

        Ok(Instance {
            size,
            option_count,
            class_count,
            options,
            classes,
            comments,
        })
    }

    /// Appends a synthetic dummy class with the given demand, no options,
    /// window 1, capacity 1, and grows `size` to match (spec.md §3
    /// "Optional transformation").
    pub fn add_dummy_cars(&mut self, n: i64) {
        if n <= 0 {
            return;
        }
        self.classes.push(ClassSpec {
            demand: n,
            has_option: vec![false; self.option_count],
            window: 1,
            capacity: 1,
        });
        self.class_count += 1;
        self.size += n as usize;
    }

    /// Builds the `CountedEntity` list for options, in option order.
    pub fn option_entities(&self, mode: BoundsMode) -> Vec<CountedEntity> {
        self.options
            .iter()
            .enumerate()
            .map(|(j, o)| {
                let mut e = CountedEntity::new(
                    EntityId::new(Kind::Option, j),
                    o.window,
                    o.capacity,
                    o.demand,
                );
                e.compute_bounds(self.size, mode);
                e
            })
            .collect()
    }

    /// Builds the `CountedEntity` list for classes, in class order.
    pub fn class_entities(&self, mode: BoundsMode) -> Vec<CountedEntity> {
        self.classes
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let mut e =
                    CountedEntity::new(EntityId::new(Kind::Class, i), c.window, c.capacity, c.demand);
                e.compute_bounds(self.size, mode);
                e
            })
            .collect()
    }

    /// Σ d_i over all classes (spec.md §3 "Derived invariants").
    pub fn total_class_demand(&self) -> i64 {
        self.classes.iter().map(|c| c.demand).sum()
    }

    /// Rejects a structurally valid but degenerate configuration (spec.md
    /// §7 "EncodeError"). Called once, after `parse`, before any generator
    /// runs.
    pub fn validate(&self) -> Result<(), EncodeError> {
        for (j, o) in self.options.iter().enumerate() {
            if o.window == 0 {
                return Err(EncodeError::ZeroWindow { index: j });
            }
            if o.capacity == 0 {
                return Err(EncodeError::ZeroCapacity { index: j });
            }
        }
        Ok(())
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn parse_int(tok: &str) -> Result<i64, ParseError> {
    tok.parse::<i64>().map_err(|_| ParseError::NotAnInteger {
        token: tok.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
3 1 2
1
2
0 2 1
1 1 0
";

    #[test]
    fn parses_scenario_1_from_spec() {
        let inst = Instance::parse(SAMPLE).expect("parse");
        assert_eq!(inst.size, 3);
        assert_eq!(inst.option_count, 1);
        assert_eq!(inst.class_count, 2);
        assert_eq!(inst.options[0].capacity, 1);
        assert_eq!(inst.options[0].window, 2);
        assert_eq!(inst.options[0].demand, 2);
        assert_eq!(inst.classes[0].demand, 2);
        assert!(inst.classes[0].has_option[0]);
        assert_eq!(inst.classes[0].window, 2);
        assert_eq!(inst.classes[0].capacity, 1);
        assert_eq!(inst.classes[1].demand, 1);
        assert!(!inst.classes[1].has_option[0]);
        assert_eq!(inst.classes[1].window, 1);
        assert_eq!(inst.classes[1].capacity, 1);
        assert_eq!(inst.total_class_demand(), 3);
    }

    #[test]
    fn comments_are_collected_verbatim() {
        let text = "; a header comment\n3 1 2\n1\n2\n0 2 1\n1 1 0\n";
        let inst = Instance::parse(text).expect("parse");
        assert_eq!(inst.comments, vec!["; a header comment".to_string()]);
    }

    #[test]
    fn add_dummy_cars_grows_size_and_class_count() {
        let mut inst = Instance::parse(SAMPLE).expect("parse");
        inst.add_dummy_cars(2);
        assert_eq!(inst.size, 5);
        assert_eq!(inst.class_count, 3);
        assert_eq!(inst.classes[2].demand, 2);
        assert_eq!(inst.classes[2].window, 1);
        assert_eq!(inst.classes[2].capacity, 1);
        assert!(inst.classes[2].has_option.iter().all(|&b| !b));
    }

    #[test]
    fn zero_window_parses_but_fails_validation() {
        let text = "3 1 2\n1\n0\n0 2 1\n1 1 0\n";
        let inst = Instance::parse(text).expect("parse");
        assert_eq!(inst.validate(), Err(EncodeError::ZeroWindow { index: 0 }));
    }

    #[test]
    fn zero_capacity_fails_validation() {
        let text = "3 1 2\n0\n2\n0 2 1\n1 1 0\n";
        let inst = Instance::parse(text).expect("parse");
        assert_eq!(inst.validate(), Err(EncodeError::ZeroCapacity { index: 0 }));
    }

    #[test]
    fn a_well_formed_instance_passes_validation() {
        let inst = Instance::parse(SAMPLE).expect("parse");
        assert_eq!(inst.validate(), Ok(()));
    }

    #[test]
    fn rejects_ragged_class_row() {
        let text = "3 1 2\n1\n2\n0 2 1\n1 1\n";
        assert!(matches!(
            Instance::parse(text),
            Err(ParseError::BadClassArity { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_token_in_numeric_line() {
        let text = "3 1 2\n1\n2\n0 2 x\n1 1 0\n";
        assert!(matches!(
            Instance::parse(text),
            Err(ParseError::NotAnInteger { .. })
        ));
    }
}
