//! 轉換階段的錯誤型別。
//!
//! 所有失敗（檔案內容不可讀、轉換函式拋出錯誤、轉換函式回報錯誤）都包成同一個
//! [`PluginError`]，宿主只能從訊息文字區分，訊息中一定帶有轉換器的顯示名稱。

use thiserror::Error;

use crate::models::conversion::ConverterIdentity;

/// 轉換函式拋出或回報的錯誤型別
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 標記來源轉換器的錯誤
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{converter_name}: {message}")]
pub struct PluginError {
    pub converter_name: String,
    pub message: String,
}

impl PluginError {
    pub fn new(identity: &ConverterIdentity, message: impl Into<String>) -> Self {
        PluginError {
            converter_name: identity.name().to_string(),
            message: message.into(),
        }
    }

    /// 檔案內容為空（未讀取）時的錯誤
    pub fn unreadable(identity: &ConverterIdentity) -> Self {
        let message = format!(
            "{} 需要讀取檔案內容，請移除 {{read: false}} 選項",
            identity.name()
        );
        PluginError::new(identity, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_message_names_converter() {
        let identity = ConverterIdentity::new(Some("test"));
        let err = PluginError::unreadable(&identity);
        assert_eq!(err.converter_name, "stage-test");
        assert!(err.message.contains("stage-test"));
        assert!(err.message.contains("read: false"));
    }

    #[test]
    fn display_prefixes_converter_name() {
        let identity = ConverterIdentity::new(Some("markdown"));
        let err = PluginError::new(&identity, "解析失敗");
        assert_eq!(err.to_string(), "stage-markdown: 解析失敗");
    }
}
