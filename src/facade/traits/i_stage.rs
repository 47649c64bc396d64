use futures::future::BoxFuture;

use crate::error::PluginError;
use crate::models::file::FileUnit;

// 管線階段接口，讓宿主以 Box<dyn FileStage> 持有不同設定型別的階段
pub trait FileStage: Send + Sync {
    /// 階段所屬轉換器的顯示名稱
    fn name(&self) -> &str;

    /// 處理單一檔案
    /// # 參數
    /// - file: 待處理的檔案，內容必須已讀取
    /// # 回傳
    /// - 成功時返回內容已替換的同一個檔案，失敗時返回標記轉換器名稱的錯誤
    fn process_file(&self, file: FileUnit) -> BoxFuture<'_, Result<FileUnit, PluginError>>;
}
