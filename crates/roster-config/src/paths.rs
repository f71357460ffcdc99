use std::path::{Path, PathBuf};

use crate::errors::PathError;

/// Centralized path construction for the `~/.roster/` directory layout.
///
/// Use `resolve()` in production code and `from_dir()` in tests.
#[derive(Debug, Clone)]
pub struct RosterPaths {
    roster_dir: PathBuf,
}

impl RosterPaths {
    /// Resolve paths from the user's home directory (`~/.roster`).
    pub fn resolve() -> Result<Self, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeNotFound)?;
        Ok(Self {
            roster_dir: home.join(".roster"),
        })
    }

    /// Create paths from an explicit base directory. Use in tests.
    pub fn from_dir(roster_dir: PathBuf) -> Self {
        Self { roster_dir }
    }

    /// The base `~/.roster` directory.
    pub fn roster_dir(&self) -> &Path {
        &self.roster_dir
    }

    /// User-level config file (`~/.roster/config.toml`).
    pub fn user_config(&self) -> PathBuf {
        self.roster_dir.join("config.toml")
    }

    /// Project-level config file (`<project>/.roster/config.toml`).
    pub fn project_config(project_root: &Path) -> PathBuf {
        project_root.join(".roster").join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_config_under_roster_dir() {
        let paths = RosterPaths::from_dir(PathBuf::from("/home/test/.roster"));
        assert_eq!(
            paths.user_config(),
            PathBuf::from("/home/test/.roster/config.toml")
        );
        assert_eq!(paths.roster_dir(), Path::new("/home/test/.roster"));
    }

    #[test]
    fn test_project_config_path() {
        assert_eq!(
            RosterPaths::project_config(Path::new("/work/app")),
            PathBuf::from("/work/app/.roster/config.toml")
        );
    }
}
