#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid settings: {0}")]
    InvalidSettings(&'static str),
    #[error("failed to open the render window")]
    WindowUnavailable,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
