use crate::relation::RelationDataError;
use crate::validator::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CharmError {
    #[error(transparent)]
    RelationData(#[from] RelationDataError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}
