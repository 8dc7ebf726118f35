use serde::Serialize;

use crate::core::Attributes;
use crate::training::{apply_course, Course, CourseOutcome};

/// An ordered list of courses resolved against a starting training vector
///
/// Courses are applied left to right, each against the vector left by the
/// previous one. The program is redundant as soon as one course changes
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingProgram {
    initial_attr: Attributes,
    cap: i32,
    steps: Vec<CourseOutcome>,
    attr: Attributes,
    is_redundant: bool,
}

impl TrainingProgram {
    pub fn new(initial_attr: Attributes, cap: i32, courses: impl IntoIterator<Item = Course>) -> Self {
        let mut attr = initial_attr;
        let mut is_redundant = false;
        let steps: Vec<CourseOutcome> = courses
            .into_iter()
            .map(|course| {
                let outcome = apply_course(attr, course, cap);
                is_redundant |= outcome.is_redundant();
                attr = outcome.attr;
                outcome
            })
            .collect();

        Self {
            initial_attr,
            cap,
            steps,
            attr,
            is_redundant,
        }
    }

    pub fn initial_attr(&self) -> Attributes {
        self.initial_attr
    }

    pub fn cap(&self) -> i32 {
        self.cap
    }

    /// Training vector after every course
    pub fn attr(&self) -> Attributes {
        self.attr
    }

    pub fn is_redundant(&self) -> bool {
        self.is_redundant
    }

    pub fn courses(&self) -> impl Iterator<Item = Course> + '_ {
        self.steps.iter().map(|step| step.course)
    }

    pub fn steps(&self) -> &[CourseOutcome] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Course tags joined with `+`, e.g. `PHY+MEN_TAC`
    pub fn label(&self) -> String {
        self.courses().map(|c| c.tag()).collect::<Vec<_>>().join("+")
    }
}

/// Flat view used when reporting programs
#[derive(Debug, Clone, Serialize)]
pub struct ProgramSummary {
    pub courses: Vec<Course>,
    pub initial_attr: Attributes,
    pub attr: Attributes,
}

impl From<&TrainingProgram> for ProgramSummary {
    fn from(program: &TrainingProgram) -> Self {
        Self {
            courses: program.courses().collect(),
            initial_attr: program.initial_attr,
            attr: program.attr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CAP: i32 = 280;

    #[test]
    fn test_empty_program() {
        let initial = Attributes::new(20, 120, 140);
        let program = TrainingProgram::new(initial, CAP, Vec::<Course>::new());
        assert_eq!(program.attr(), initial);
        assert!(!program.is_redundant());
        assert!(program.is_empty());
    }

    #[test]
    fn test_saturating_course_twice_is_redundant() {
        let initial = Attributes::new(240, 0, 0);
        let once = TrainingProgram::new(initial, CAP, [Course::Phy]);
        assert_eq!(once.attr(), Attributes::new(280, 0, 0));
        assert!(!once.is_redundant());

        let twice = TrainingProgram::new(initial, CAP, [Course::Phy, Course::Phy]);
        assert!(twice.is_redundant());
        assert_eq!(twice.attr(), once.attr());
        assert!(twice.steps()[1].is_redundant());
    }

    #[test]
    fn test_redundancy_sticks() {
        let initial = Attributes::new(240, 0, 0);
        let program = TrainingProgram::new(initial, CAP, [Course::Phy, Course::Phy, Course::Men]);
        assert!(program.is_redundant());
        // MEN still applies after the no-op step
        assert_eq!(program.attr(), Attributes::new(260, 20, 0));
    }

    #[test]
    fn test_order_matters() {
        let initial = Attributes::new(0, 0, 260);
        let phy_then_men = TrainingProgram::new(initial, CAP, [Course::Phy, Course::Men]);
        let men_then_phy = TrainingProgram::new(initial, CAP, [Course::Men, Course::Phy]);
        assert_eq!(phy_then_men.attr(), Attributes::new(0, 40, 240));
        assert_eq!(men_then_phy.attr(), Attributes::new(40, 0, 240));
        assert_ne!(phy_then_men.attr(), men_then_phy.attr());
    }

    #[test]
    fn test_label() {
        let program = TrainingProgram::new(Attributes::ZERO, CAP, [Course::Phy, Course::MenTac]);
        assert_eq!(program.label(), "PHY+MEN_TAC");
        assert_eq!(program.len(), 2);
    }
}
