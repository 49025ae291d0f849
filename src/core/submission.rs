use crate::core::{Result, ResultsSink, TaxApi, TaxRequest, TaxResponse};

/// 表單送出流程:呼叫 API,成功就把格式化後的文字寫進結果面
///
/// On failure the sink keeps whatever it held before. There are no retries,
/// no timeout and no in-flight guard; callers may overlap submissions.
pub struct SubmissionHandler<A: TaxApi, S: ResultsSink> {
    api: A,
    results: S,
}

impl<A: TaxApi, S: ResultsSink> SubmissionHandler<A, S> {
    pub fn new(api: A, results: S) -> Self {
        Self { api, results }
    }

    pub async fn submit(&self, request: &TaxRequest) -> Result<String> {
        tracing::debug!(
            "Submitting form: salary={}, year={}, calculate_beyond_max={}",
            request.salary,
            request.year,
            request.calculate_beyond_max
        );

        match self.api.calculate(request).await {
            Ok(response) => {
                let text = render_response(&response);
                self.results.set_text(text.clone());
                Ok(text)
            }
            Err(e) => {
                tracing::error!("Error: {}", e);
                Err(e)
            }
        }
    }
}

pub fn render_response(response: &TaxResponse) -> String {
    format!(
        "Annual Post-Tax Salary: {}, Superannuation: {}",
        render_field(response.annual_post_tax_salary.as_ref()),
        render_field(response.superannuation.as_ref()),
    )
}

// 缺少的欄位比照原本頁面的行為顯示成 undefined
fn render_field(value: Option<&serde_json::Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
