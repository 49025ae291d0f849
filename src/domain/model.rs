use serde::{Deserialize, Serialize};

/// 表單送出時建立的請求主體,欄位值原樣沿用使用者輸入的字串
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRequest {
    pub salary: String,
    pub year: String,
    pub calculate_beyond_max: bool,
}

/// 稅務服務的回應,欄位形狀是假設的而非驗證過的
///
/// The service normally returns numbers, but nothing guarantees it, so both
/// fields stay as raw JSON values. Missing fields deserialize to `None` and
/// render as `undefined` in the results text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaxResponse {
    pub annual_post_tax_salary: Option<serde_json::Value>,
    pub superannuation: Option<serde_json::Value>,
}
