//! Training simulation
//!
//! Courses nudge the squadron's training bonus along one or two attributes.
//! The bonus lives under a cap that applies to every attribute and to the
//! total, so once the cap is reached a course can only shift points around.
//! Each course resolves through a fixed cascade of candidate deltas, biggest
//! plausible increase first; when none fits, the course changes nothing and
//! the program holding it is flagged redundant.

pub mod course;
pub mod program;
pub mod search;

pub use course::{apply_course, Course, CourseOutcome};
pub use program::{ProgramSummary, TrainingProgram};
pub use search::{course_sequences, search_programs, ProgramMatch};
