//! Error types for loading and assembling warband data.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`LoadError`].
pub type Result<T> = std::result::Result<T, LoadError>;

/// Failures while reading the data tree. Any of these keeps the service from starting.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("data root not found: {}", .0.display())]
    DataRootNotFound(PathBuf),

    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{}': {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

/// Data-integrity failures found while grouping records into warbands.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    #[error("duplicate fighter id '{id}' in warband '{warband}'{}", describe_file(file))]
    DuplicateFighter {
        id: String,
        warband: String,
        file: Option<PathBuf>,
    },

    #[error("duplicate ability id '{id}' in warband '{warband}'{}", describe_file(file))]
    DuplicateAbility {
        id: String,
        warband: String,
        file: Option<PathBuf>,
    },
}

impl AssemblyError {
    /// Attach the source file of the offending record.
    pub fn with_file(self, path: Option<PathBuf>) -> Self {
        match self {
            Self::DuplicateFighter { id, warband, .. } => Self::DuplicateFighter {
                id,
                warband,
                file: path,
            },
            Self::DuplicateAbility { id, warband, .. } => Self::DuplicateAbility {
                id,
                warband,
                file: path,
            },
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::DuplicateFighter { id, .. } | Self::DuplicateAbility { id, .. } => id,
        }
    }
}

fn describe_file(file: &Option<PathBuf>) -> String {
    file.as_ref()
        .map(|path| format!(" (from '{}')", path.display()))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_message_names_file_when_known() {
        let err = AssemblyError::DuplicateFighter {
            id: "f1".to_string(),
            warband: "Ironjawz".to_string(),
            file: None,
        };
        assert_eq!(
            err.to_string(),
            "duplicate fighter id 'f1' in warband 'Ironjawz'"
        );

        let err = err.with_file(Some(PathBuf::from("Destruction/ironjawz_fighters.json")));
        assert_eq!(
            err.to_string(),
            "duplicate fighter id 'f1' in warband 'Ironjawz' (from 'Destruction/ironjawz_fighters.json')"
        );
        assert_eq!(err.id(), "f1");
    }
}
