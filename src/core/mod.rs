pub mod client;
pub mod results;
pub mod submission;

pub use crate::domain::model::{TaxRequest, TaxResponse};
pub use crate::domain::ports::{ConfigProvider, ResultsSink, TaxApi};
pub use crate::utils::error::Result;
