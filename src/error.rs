use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("the path is not specified")]
    EmptyPath,

    #[error("parameter store request failed: {0}")]
    Store(String),

    #[error("{} escaped the output directory", .0.display())]
    Escape(PathBuf),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
