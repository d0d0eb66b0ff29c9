use crate::options::OptionsError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    #[error("path '{path}' must begin with '/'")]
    InvalidPath { path: String },
    #[error("duplicate path '{path}'")]
    DuplicatePath { path: String },
    #[error("wildcard segment {index} in '{path}' is missing a name")]
    EmptyWildcardName { path: String, index: usize },
    #[error("path '{path}' has {segments} segments, exceeding the limit of {limit}")]
    TooManySegments {
        path: String,
        segments: usize,
        limit: usize,
    },
    #[error(transparent)]
    Options(#[from] OptionsError),
}

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FindError {
    #[error("path '{path}' must begin with '/'")]
    MalformedPath { path: String },
    #[error("path '{path}' has {segments} segments, exceeding the limit of {limit}")]
    TooManySegments {
        path: String,
        segments: usize,
        limit: usize,
    },
    #[error("no pattern matched path '{path}'")]
    NotFound { path: String },
}

pub type FindResult<T> = Result<T, FindError>;
