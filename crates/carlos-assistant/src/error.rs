use help_kb::error::KbError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Kb(#[from] KbError),

    #[error("config error: {0}")]
    Config(String),
}
