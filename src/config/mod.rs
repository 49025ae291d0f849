use crate::core::ConfigProvider;
use crate::domain::model::TaxRequest;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:3000/calculate_tax";

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tax-form-client")]
#[command(about = "Submit a salary form to the local tax calculation service")]
pub struct CliConfig {
    /// 年薪欄位,原樣以字串送出,不做數值驗證
    #[arg(long)]
    pub salary: String,

    #[arg(long)]
    pub year: String,

    /// 對應表單上的 calculateBeyondMax 勾選框
    #[arg(long = "beyond-max", help = "Calculate superannuation beyond the capped maximum")]
    pub calculate_beyond_max: bool,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn to_request(&self) -> TaxRequest {
        TaxRequest {
            salary: self.salary.clone(),
            year: self.year.clone(),
            calculate_beyond_max: self.calculate_beyond_max,
        }
    }
}

impl ConfigProvider for CliConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_endpoint(endpoint: &str) -> CliConfig {
        CliConfig {
            salary: "1000".to_string(),
            year: "2".to_string(),
            calculate_beyond_max: false,
            endpoint: endpoint.to_string(),
            verbose: false,
        }
    }

    #[test]
    fn test_default_endpoint_passes_validation() {
        assert!(config_with_endpoint(DEFAULT_ENDPOINT).validate().is_ok());
    }

    #[test]
    fn test_bad_endpoint_fails_validation() {
        assert!(config_with_endpoint("not a url").validate().is_err());
    }

    #[test]
    fn test_to_request_carries_fields_verbatim() {
        let mut config = config_with_endpoint(DEFAULT_ENDPOINT);
        config.salary = "not numeric".to_string();
        config.calculate_beyond_max = true;

        let request = config.to_request();
        assert_eq!(request.salary, "not numeric");
        assert_eq!(request.year, "2");
        assert!(request.calculate_beyond_max);
    }
}
