use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported operand for {op}: {operand}")]
    InvalidOperand { op: &'static str, operand: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
