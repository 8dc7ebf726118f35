//! Exhaustive program search
//!
//! Every sequence of `length` courses (repetition allowed) is built and
//! resolved. Redundant programs are dropped; the rest are kept when their
//! doable-mission count exceeds the threshold. Output follows product order,
//! with the last course varying fastest.

use itertools::Itertools;

use crate::core::Attributes;
use crate::training::{Course, TrainingProgram};

/// Every sequence of `length` courses, in product order; a length of 0 yields
/// the single empty sequence
pub fn course_sequences(length: usize) -> Box<dyn Iterator<Item = Vec<Course>>> {
    if length == 0 {
        return Box::new(std::iter::once(Vec::new()));
    }
    Box::new(
        (0..length)
            .map(|_| Course::ALL.into_iter())
            .multi_cartesian_product(),
    )
}

/// A non-redundant program and the items it makes doable
#[derive(Debug, Clone)]
pub struct ProgramMatch<T> {
    pub program: TrainingProgram,
    pub doable: Vec<T>,
}

/// Resolve every program of `length` courses and keep those whose `doable`
/// result holds more than `threshold` items
pub fn search_programs<T, F>(
    initial_attr: Attributes,
    cap: i32,
    length: usize,
    threshold: usize,
    mut doable: F,
) -> Vec<ProgramMatch<T>>
where
    F: FnMut(&Attributes) -> Vec<T>,
{
    let mut redundant = 0usize;
    let matches: Vec<ProgramMatch<T>> = course_sequences(length)
        .map(|courses| TrainingProgram::new(initial_attr, cap, courses))
        .filter(|program| {
            if program.is_redundant() {
                redundant += 1;
            }
            !program.is_redundant()
        })
        .filter_map(|program| {
            let found = doable(&program.attr());
            (found.len() > threshold).then_some(ProgramMatch { program, doable: found })
        })
        .collect();

    tracing::debug!(
        "Program search (length {}): {} redundant, {} above threshold {}",
        length,
        redundant,
        matches.len(),
        threshold
    );
    matches
}
