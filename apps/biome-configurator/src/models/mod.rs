//! Shared data models for scan results and migration families.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// A legacy tool whose config can be migrated into `biome.json`.
pub enum Family {
    Eslint,
    Prettier,
}

impl Family {
    pub const ALL: [Family; 2] = [Family::Eslint, Family::Prettier];

    /// Subcommand argument understood by `biome migrate`.
    pub fn migrate_arg(self) -> &'static str {
        match self {
            Family::Eslint => "eslint",
            Family::Prettier => "prettier",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Family::Eslint => "ESLint",
            Family::Prettier => "Prettier",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A directory holding at least one legacy config file.
pub struct ConfigLocation {
    pub dir: PathBuf,
    pub has_eslint: bool,
    pub has_prettier: bool,
}

impl ConfigLocation {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            has_eslint: false,
            has_prettier: false,
        }
    }

    pub fn mark(&mut self, family: Family) {
        match family {
            Family::Eslint => self.has_eslint = true,
            Family::Prettier => self.has_prettier = true,
        }
    }

    pub fn has(&self, family: Family) -> bool {
        match family {
            Family::Eslint => self.has_eslint,
            Family::Prettier => self.has_prettier,
        }
    }

    /// Flagged families, linter first.
    pub fn families(&self) -> Vec<Family> {
        Family::ALL.into_iter().filter(|f| self.has(*f)).collect()
    }
}

/// Scan result keyed by absolute directory path.
pub type Locations = BTreeMap<PathBuf, ConfigLocation>;
