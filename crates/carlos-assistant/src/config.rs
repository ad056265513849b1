use crate::error::AppError;

/// Application configuration loaded explicitly from environment variables.
///
/// No default is assumed for the corpus path — the caller must provide it.
#[derive(Debug, Clone)]
pub struct Config {
    /// Filesystem path to the help-articles JSON file.
    pub kb_path: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required:
    /// - `CARLOS_KB_PATH`: path to the help-articles JSON file
    pub fn from_env() -> Result<Self, AppError> {
        let kb_path = std::env::var("CARLOS_KB_PATH").map_err(|_| {
            AppError::Config("CARLOS_KB_PATH environment variable is required".to_string())
        })?;

        if !std::path::Path::new(&kb_path).is_file() {
            return Err(AppError::Config(format!(
                "help articles file not found at {kb_path}"
            )));
        }

        Ok(Self { kb_path })
    }
}
