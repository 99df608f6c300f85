//! `.env` file loading
//!
//! Variables already present in the process environment win over the file.

use std::path::{Path, PathBuf};

/// Load `.env` from the working directory or one of its parents
///
/// Returns the path that was loaded, or `None` when there is no file.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Load a specific env file
pub fn load_dotenv_from(path: &Path) -> Result<(), dotenvy::Error> {
    dotenvy::from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use vault_core::VaultConfig;

    #[test]
    fn test_env_file_supplies_missing_key() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        std::fs::write(
            &path,
            "# legacy deployment\nPASSVAULT_TEST_DOTENV_KEY=\"abcdefghijklmnopqrstuvwxyz012345\"\n",
        )
        .unwrap();

        load_dotenv_from(&path).unwrap();

        let config = VaultConfig {
            encryption_key: std::env::var("PASSVAULT_TEST_DOTENV_KEY").ok(),
            ..VaultConfig::default()
        };
        let key = config.validate().unwrap();
        assert_eq!(key.as_bytes(), b"abcdefghijklmnopqrstuvwxyz012345");
    }

    #[test]
    fn test_process_env_wins_over_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".env");
        std::fs::write(&path, "PASSVAULT_TEST_DOTENV_PORT=4000\n").unwrap();

        std::env::set_var("PASSVAULT_TEST_DOTENV_PORT", "5000");
        load_dotenv_from(&path).unwrap();

        assert_eq!(std::env::var("PASSVAULT_TEST_DOTENV_PORT").unwrap(), "5000");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(load_dotenv_from(&temp_dir.path().join(".env")).is_err());
    }
}
