use crate::error::BoxError;
use crate::service::outcome::Reporter;

/// 轉換函式的同步結果：
/// - `Ok(Some(text))`：同步回傳轉換後的文字
/// - `Ok(None)`：稍後透過 `Reporter` 回報
/// - `Err(e)`：同步失敗
pub type TransformResult = Result<Option<String>, BoxError>;

// 轉換函式接口，每個檔案呼叫一次
pub trait Transform<C>: Send + Sync {
    /// 轉換單一檔案的文字
    /// # 參數
    /// - text: 檔案的完整文字
    /// - config: 建立階段時提供的設定
    /// - reporter: 非同步回報結果用的回報端
    /// # 回傳
    /// - 同步結果，見 [`TransformResult`]
    fn transform(&self, text: String, config: &C, reporter: Reporter) -> TransformResult;
}

impl<C, F> Transform<C> for F
where
    F: Fn(String, &C, Reporter) -> TransformResult + Send + Sync,
{
    fn transform(&self, text: String, config: &C, reporter: Reporter) -> TransformResult {
        self(text, config, reporter)
    }
}

