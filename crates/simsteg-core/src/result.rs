use crate::SimstegError;

pub type Result<T> = std::result::Result<T, SimstegError>;
