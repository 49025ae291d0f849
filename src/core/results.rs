use crate::core::ResultsSink;
use std::sync::{Arc, Mutex};

/// 共享的結果輸出面,多個併發送出會競爭同一份文字
#[derive(Debug, Clone, Default)]
pub struct SharedResults {
    text: Arc<Mutex<String>>,
}

impl SharedResults {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultsSink for SharedResults {
    fn set_text(&self, text: String) {
        *self.text.lock().unwrap() = text;
    }

    fn text(&self) -> String {
        self.text.lock().unwrap().clone()
    }
}
