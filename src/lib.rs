pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::CliConfig;
pub use core::client::HttpTaxApi;
pub use core::results::SharedResults;
pub use core::submission::SubmissionHandler;
pub use domain::model::{TaxRequest, TaxResponse};
pub use utils::error::{Result, TaxClientError};
