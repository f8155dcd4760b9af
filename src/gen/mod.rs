//! Clause generators (spec.md §4.3-§4.11). Each module is independent and
//! shares only the variable registry passed in by the assembler.

pub mod atmostseqcard;
pub mod capacity;
pub mod cardinality;
pub mod exactly_one;
pub mod ian;
pub mod linkage;
pub mod optimisation;
pub mod redundant;
pub mod symmetry;
