//! Step plans
//!
//! A step pairs one collection with one iteration-data file, the shared
//! environment, and the school name. A plan is an ordered list of steps.
//! Two named sub-plans exist (`setup-all`, `delete`); the default plan runs
//! both, setup first.

pub mod resolve;

pub use resolve::ResolvedPaths;

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::common::{Error, Result};

/// Variable key injected into every run
pub const SCHOOL_NAME_KEY: &str = "school_name";

/// One invocation of the collection engine
#[derive(Debug, Clone)]
pub struct Step {
    /// Logical name, used in progress output and error reporting
    pub name: &'static str,
    pub collection: PathBuf,
    pub data: PathBuf,
    pub environment: PathBuf,
    /// Value for the `school_name` runtime variable
    pub school_name: String,
}

/// A named group of steps selectable with `--tests`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubPlan {
    /// Create a school and its associated entities
    SetupAll,
    /// Tear the school down again
    Delete,
}

impl FromStr for SubPlan {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "setup-all" => Ok(Self::SetupAll),
            "delete" => Ok(Self::Delete),
            other => Err(Error::UnknownPlan(other.to_string())),
        }
    }
}

impl fmt::Display for SubPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SetupAll => f.write_str("setup-all"),
            Self::Delete => f.write_str("delete"),
        }
    }
}

/// Build the ordered step list for one invocation
///
/// `selection` holds the raw `--tests` values: `None` produces the default
/// plan (setup-all followed by delete), an explicit empty list produces an
/// empty plan. An unrecognized name aborts before any step is built.
pub fn build(
    paths: &ResolvedPaths,
    school_name: &str,
    selection: Option<&[String]>,
) -> Result<Vec<Step>> {
    let Some(names) = selection else {
        let mut steps = setup_steps(paths, school_name);
        steps.extend(delete_steps(paths, school_name));
        return Ok(steps);
    };

    let mut steps = Vec::new();
    for name in names {
        match name.parse::<SubPlan>()? {
            SubPlan::SetupAll => steps.extend(setup_steps(paths, school_name)),
            SubPlan::Delete => steps.extend(delete_steps(paths, school_name)),
        }
    }
    Ok(steps)
}

/// The five setup steps, in the order the school API expects them
fn setup_steps(paths: &ResolvedPaths, school_name: &str) -> Vec<Step> {
    vec![
        make("setup-school", &paths.setup_school, &paths.school_data, paths, school_name),
        make("setup-ay-grades", &paths.setup_ay_grades, &paths.school_data, paths, school_name),
        make("create-timetable", &paths.create_timetable, &paths.timetables_data, paths, school_name),
        make("add-teachers", &paths.add_teachers, &paths.teachers_data, paths, school_name),
        make("add-students", &paths.add_students, &paths.students_data, paths, school_name),
    ]
}

fn delete_steps(paths: &ResolvedPaths, school_name: &str) -> Vec<Step> {
    vec![make("delete-school", &paths.delete_school, &paths.school_data, paths, school_name)]
}

fn make(
    name: &'static str,
    collection: &Path,
    data: &Path,
    paths: &ResolvedPaths,
    school_name: &str,
) -> Step {
    Step {
        name,
        collection: collection.to_path_buf(),
        data: data.to_path_buf(),
        environment: paths.environment.clone(),
        school_name: school_name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> ResolvedPaths {
        ResolvedPaths::new(Path::new("/c"), Path::new("/d"), None, "localhost")
    }

    fn names(steps: &[Step]) -> Vec<&'static str> {
        steps.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_default_plan_is_setup_then_delete() {
        let steps = build(&paths(), "Acme", None).unwrap();
        assert_eq!(
            names(&steps),
            vec![
                "setup-school",
                "setup-ay-grades",
                "create-timetable",
                "add-teachers",
                "add-students",
                "delete-school",
            ]
        );
    }

    #[test]
    fn test_setup_all_selection() {
        let selection = vec!["setup-all".to_string()];
        let steps = build(&paths(), "Acme", Some(&selection)).unwrap();
        assert_eq!(
            names(&steps),
            vec![
                "setup-school",
                "setup-ay-grades",
                "create-timetable",
                "add-teachers",
                "add-students",
            ]
        );
    }

    #[test]
    fn test_delete_selection() {
        let selection = vec!["delete".to_string()];
        let steps = build(&paths(), "Acme", Some(&selection)).unwrap();
        assert_eq!(names(&steps), vec!["delete-school"]);
    }

    #[test]
    fn test_both_selections_match_default_plan() {
        let selection = vec!["setup-all".to_string(), "delete".to_string()];
        let selected = build(&paths(), "Acme", Some(&selection)).unwrap();
        let default = build(&paths(), "Acme", None).unwrap();
        assert_eq!(names(&selected), names(&default));
    }

    #[test]
    fn test_empty_selection_builds_nothing() {
        let steps = build(&paths(), "Acme", Some(&[])).unwrap();
        assert!(steps.is_empty());
    }

    #[test]
    fn test_unknown_plan_is_fatal() {
        let selection = vec!["setup-all".to_string(), "bogus-name".to_string()];
        let err = build(&paths(), "Acme", Some(&selection)).unwrap_err();
        assert!(matches!(err, Error::UnknownPlan(name) if name == "bogus-name"));
    }

    #[test]
    fn test_subplan_from_str() {
        assert_eq!("setup-all".parse::<SubPlan>().unwrap(), SubPlan::SetupAll);
        assert_eq!("delete".parse::<SubPlan>().unwrap(), SubPlan::Delete);
        assert!("bogus".parse::<SubPlan>().is_err());
    }

    #[test]
    fn test_steps_share_environment_and_school_name() {
        let steps = build(&paths(), "Acme", None).unwrap();
        let environment = &steps[0].environment;
        for step in &steps {
            assert_eq!(&step.environment, environment);
            assert_eq!(step.school_name, "Acme");
        }
    }

    #[test]
    fn test_steps_pair_collections_with_data() {
        let paths = paths();
        let steps = build(&paths, "Acme", None).unwrap();
        let timetable = steps.iter().find(|s| s.name == "create-timetable").unwrap();
        assert_eq!(timetable.collection, paths.create_timetable);
        assert_eq!(timetable.data, paths.timetables_data);
        let teachers = steps.iter().find(|s| s.name == "add-teachers").unwrap();
        assert_eq!(teachers.data, paths.teachers_data);
    }
}
