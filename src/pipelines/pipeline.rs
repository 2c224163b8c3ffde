//! Pipeline trait.
use crate::error::Error;

/// Implemented by each pipeline.
///
/// Generic over the return type, so that pipelines can hand back
/// whatever summary of their run they produce (see [super::RunReport]).
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
