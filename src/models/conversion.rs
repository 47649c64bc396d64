/// 顯示名稱的前綴
pub const PLUGIN_PREFIX: &str = "stage";

/// 未指定名稱時使用的固定顯示名稱
pub const UNNAMED_CONVERTER: &str = "unnamed-converter";

/// 轉換器的顯示名稱，只用於錯誤與日誌的來源標記，不保證唯一
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConverterIdentity {
    display_name: String,
}

impl ConverterIdentity {
    pub fn new(name: Option<&str>) -> Self {
        let display_name = match name.filter(|n| !n.is_empty()) {
            Some(n) => format!("{}-{}", PLUGIN_PREFIX, n),
            None => UNNAMED_CONVERTER.to_string(),
        };
        ConverterIdentity { display_name }
    }

    pub fn name(&self) -> &str {
        &self.display_name
    }
}

/// 單一檔案的轉換結果：轉換後的文字，或帶訊息的失敗
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformOutcome {
    Converted(String),
    Failed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_uses_prefix() {
        assert_eq!(ConverterIdentity::new(Some("test")).name(), "stage-test");
    }

    #[test]
    fn identity_falls_back_to_placeholder() {
        assert_eq!(ConverterIdentity::new(None).name(), UNNAMED_CONVERTER);
        assert_eq!(ConverterIdentity::new(Some("")).name(), UNNAMED_CONVERTER);
    }
}
