//! 把任意轉換函式包裝成管線階段的工廠。
//!
//! [`ConverterFabric`] 保存轉換器名稱、轉換函式與選用的初始化函式；每次呼叫
//! [`ConverterFabric::create`] 會以一份設定建立新的 [`Stage`]。階段逐一處理
//! [`FileUnit`]：檢查內容、取出文字、呼叫轉換函式一次，成功時替換內容，失敗時
//! 回傳 [`PluginError`]。

use std::mem;
use std::sync::Arc;

use futures::future::BoxFuture;
use futures::stream::{Stream, StreamExt};
use log::{debug, error, info};

use crate::error::PluginError;
use crate::facade::traits::i_stage::FileStage;
use crate::models::conversion::{ConverterIdentity, TransformOutcome};
use crate::models::file::{FileContents, FileUnit};
use crate::service::content::read_contents;
use crate::service::outcome::{OutcomeCell, Reporter};
use crate::service::traits::i_service::{Transform, TransformResult};

type Initializer<C> = Arc<dyn Fn(&C) + Send + Sync>;

/// 階段工廠
pub struct ConverterFabric<C> {
    identity: ConverterIdentity,
    transform: Arc<dyn Transform<C>>,
    initializer: Option<Initializer<C>>,
}

impl<C> Clone for ConverterFabric<C> {
    fn clone(&self) -> Self {
        ConverterFabric {
            identity: self.identity.clone(),
            transform: Arc::clone(&self.transform),
            initializer: self.initializer.clone(),
        }
    }
}

impl<C: Send + Sync + 'static> ConverterFabric<C> {
    /// 以轉換函式建立工廠，`name` 為空時使用預設顯示名稱
    pub fn new<F>(name: Option<&str>, transform: F) -> Self
    where
        F: Fn(String, &C, Reporter) -> TransformResult + Send + Sync + 'static,
    {
        Self::from_transform(name, transform)
    }

    /// 以實作 [`Transform`] 的型別建立工廠
    pub fn from_transform<T>(name: Option<&str>, transform: T) -> Self
    where
        T: Transform<C> + 'static,
    {
        ConverterFabric {
            identity: ConverterIdentity::new(name),
            transform: Arc::new(transform),
            initializer: None,
        }
    }

    /// 設定初始化函式，每次建立階段時以同一份設定呼叫一次
    pub fn with_initializer<I>(mut self, initializer: I) -> Self
    where
        I: Fn(&C) + Send + Sync + 'static,
    {
        self.initializer = Some(Arc::new(initializer));
        self
    }

    pub fn identity(&self) -> &ConverterIdentity {
        &self.identity
    }

    /// 建立新的階段，初始化函式在任何檔案處理前執行
    pub fn create(&self, config: C) -> Stage<C> {
        if let Some(initializer) = &self.initializer {
            info!("執行 {} 的初始化函式", self.identity.name());
            initializer(&config);
        }
        info!("建立轉換階段：{}", self.identity.name());
        Stage {
            inner: Arc::new(StageInner {
                identity: self.identity.clone(),
                transform: Arc::clone(&self.transform),
                config,
            }),
        }
    }
}

struct StageInner<C> {
    identity: ConverterIdentity,
    transform: Arc<dyn Transform<C>>,
    config: C,
}

/// 持有一份設定的轉換階段，可複製，複本共用同一份設定
pub struct Stage<C> {
    inner: Arc<StageInner<C>>,
}

impl<C> Clone for Stage<C> {
    fn clone(&self) -> Self {
        Stage {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Send + Sync + 'static> Stage<C> {
    pub fn name(&self) -> &str {
        self.inner.identity.name()
    }

    pub fn config(&self) -> &C {
        &self.inner.config
    }

    /// 處理單一檔案
    /// # 參數
    /// - file: 待處理的檔案
    /// # 回傳
    /// - 成功時返回內容已替換為轉換結果的檔案，其餘欄位不變
    /// - 內容未讀取、串流讀取失敗或轉換失敗時返回 PluginError
    pub async fn process(&self, mut file: FileUnit) -> Result<FileUnit, PluginError> {
        if file.is_null() {
            let err = PluginError::unreadable(&self.inner.identity);
            error!("{}（{}）", err, file.path.display());
            return Err(err);
        }
        debug!("{} 開始處理：{}", self.name(), file.path.display());

        let contents = mem::replace(&mut file.contents, FileContents::Null);
        let text = read_contents(contents)
            .await
            .map_err(|e| self.fail(&file, format!("讀取串流內容失敗：{}", e)))?;

        match self.run(text).await {
            TransformOutcome::Converted(text) => {
                debug!("{} 完成：{}，{} 位元組", self.name(), file.path.display(), text.len());
                file.contents = FileContents::Buffer(text.into_bytes());
                Ok(file)
            }
            TransformOutcome::Failed(message) => Err(self.fail(&file, message)),
        }
    }

    /// 依序處理串流中的檔案，每次只處理一個，輸出順序與輸入相同
    pub fn pipe<S>(&self, files: S) -> impl Stream<Item = Result<FileUnit, PluginError>>
    where
        S: Stream<Item = FileUnit>,
    {
        let stage = self.clone();
        files.then(move |file| {
            let stage = stage.clone();
            async move { stage.process(file).await }
        })
    }

    async fn run(&self, text: String) -> TransformOutcome {
        let (cell, pending) = OutcomeCell::new();
        let result = self
            .inner
            .transform
            .transform(text, &self.inner.config, cell.reporter());
        match result {
            Ok(Some(text)) => {
                cell.resolve(TransformOutcome::Converted(text));
            }
            Ok(None) => {}
            Err(err) => {
                cell.resolve(TransformOutcome::Failed(err.to_string()));
            }
        }
        // 之後只剩轉換函式手上的回報端能決定結果
        drop(cell);
        pending.wait().await
    }

    fn fail(&self, file: &FileUnit, message: String) -> PluginError {
        let err = PluginError::new(&self.inner.identity, message);
        error!("處理檔案 {} 失敗: {}", file.path.display(), err);
        err
    }
}

impl<C: Send + Sync + 'static> FileStage for Stage<C> {
    fn name(&self) -> &str {
        self.inner.identity.name()
    }

    fn process_file(&self, file: FileUnit) -> BoxFuture<'_, Result<FileUnit, PluginError>> {
        Box::pin(self.process(file))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(text: String, _: &(), _: Reporter) -> TransformResult {
        Ok(Some(text.to_uppercase()))
    }

    #[tokio::test]
    async fn metadata_is_left_untouched() {
        let stage = ConverterFabric::new(Some("upper"), upper).create(());
        let file = FileUnit::new("notes/a.txt", FileContents::Buffer(b"abc".to_vec()))
            .with_attribute("base", "notes");
        let file = stage.process(file).await.unwrap();
        assert_eq!(file.path(), std::path::Path::new("notes/a.txt"));
        assert_eq!(file.attributes.get("base").map(String::as_str), Some("notes"));
        assert_eq!(file.buffer(), Some(&b"ABC"[..]));
    }

    #[tokio::test]
    async fn stage_is_usable_as_trait_object() {
        let stage: Box<dyn FileStage> =
            Box::new(ConverterFabric::new(Some("upper"), upper).create(()));
        assert_eq!(stage.name(), "stage-upper");
        let file = stage
            .process_file(FileUnit::new("a.txt", FileContents::Buffer(b"x".to_vec())))
            .await
            .unwrap();
        assert_eq!(file.buffer(), Some(&b"X"[..]));
    }
}
