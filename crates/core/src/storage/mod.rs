mod error;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use traits::ProductRepository;
pub use types::ProductFilter;
