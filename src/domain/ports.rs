use crate::domain::model::{TaxRequest, TaxResponse};
use crate::utils::error::Result;
use async_trait::async_trait;

/// 稅務計算服務的抽象,成功與失敗都是明確的 Result 分支
#[async_trait]
pub trait TaxApi: Send + Sync {
    async fn calculate(&self, request: &TaxRequest) -> Result<TaxResponse>;
}

/// 顯示結果的輸出面,對應原本頁面上的 results 元素
///
/// Overlapping submissions race to the same sink, so implementations must be
/// safe to share. Last write wins.
pub trait ResultsSink: Send + Sync {
    fn set_text(&self, text: String);
    fn text(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
}
