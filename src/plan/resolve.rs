//! Path resolution for collections, data files, and the environment
//!
//! Every concrete file path is computed once, up front, from the root
//! directories given on the command line. No existence checks happen here:
//! a missing file surfaces when newman tries to read it.

use std::path::{Path, PathBuf};

/// Canonical suffix for collection files
pub const COLLECTION_SUFFIX: &str = ".postman_collection.json";

/// Canonical suffix for environment files
pub const ENVIRONMENT_SUFFIX: &str = ".postman_environment.json";

/// Append `suffix` unless the path already ends with it
///
/// Idempotent: applying it twice yields the same path as applying it once.
pub fn with_suffix(path: PathBuf, suffix: &str) -> PathBuf {
    if path.to_string_lossy().ends_with(suffix) {
        path
    } else {
        let mut raw = path.into_os_string();
        raw.push(suffix);
        PathBuf::from(raw)
    }
}

/// Concrete paths for one invocation, shared by every step
#[derive(Debug, Clone)]
pub struct ResolvedPaths {
    /// Shared environment file
    pub environment: PathBuf,

    // collections
    pub setup_school: PathBuf,
    pub setup_ay_grades: PathBuf,
    pub create_timetable: PathBuf,
    pub add_teachers: PathBuf,
    pub add_students: PathBuf,
    pub delete_school: PathBuf,

    // iteration data
    pub school_data: PathBuf,
    pub teachers_data: PathBuf,
    pub students_data: PathBuf,
    pub timetables_data: PathBuf,
}

impl ResolvedPaths {
    /// Resolve every path from the root directories
    ///
    /// The environment file is searched in `env_dir` when given, otherwise
    /// in the collection root.
    pub fn new(
        collection_root: &Path,
        data_root: &Path,
        env_dir: Option<&Path>,
        env_name: &str,
    ) -> Self {
        let env_dir = env_dir.unwrap_or(collection_root);
        let collection =
            |name: &str| with_suffix(collection_root.join(name), COLLECTION_SUFFIX);

        Self {
            environment: with_suffix(env_dir.join(env_name), ENVIRONMENT_SUFFIX),

            setup_school: collection("setup-school"),
            setup_ay_grades: collection("setup-ay-grades"),
            create_timetable: collection("create-timetable"),
            add_teachers: collection("add-teachers"),
            add_students: collection("add-students"),
            delete_school: collection("delete-school"),

            school_data: data_root.join("school.json"),
            teachers_data: data_root.join("teachers.json"),
            students_data: data_root.join("students.json"),
            timetables_data: data_root.join("timetables.json"),
        }
    }
}
