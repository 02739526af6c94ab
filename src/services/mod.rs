use crate::database::StoreError;
use crate::domain::ValidationError;
use thiserror::Error;

pub mod series;
pub mod substitutions;

pub use self::series::{SeriesReceipt, SeriesService};
pub use self::substitutions::SubstitutionLog;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
