use std::collections::HashMap;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;

use futures::stream::{self, Stream};
use tokio::io::{AsyncRead, AsyncReadExt};

/// 從讀取器取資料時每次的區塊大小
pub const READ_CHUNK_SIZE: usize = 64 * 1024;

/// 依序產生位元組區塊的串流
pub type ContentStream = Pin<Box<dyn Stream<Item = io::Result<Vec<u8>>> + Send>>;

/// 檔案內容的三種表示方式
pub enum FileContents {
    /// 未讀取內容
    Null,
    /// 記憶體中的位元組
    Buffer(Vec<u8>),
    /// 尚未讀完的資料串流
    Stream(ContentStream),
}

impl FileContents {
    pub fn from_chunks<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
        I::IntoIter: Send + 'static,
    {
        FileContents::Stream(Box::pin(stream::iter(chunks.into_iter().map(Ok))))
    }

    /// 把非同步讀取器包成串流內容，讀到 EOF 為止
    pub fn from_reader<R>(reader: R) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
    {
        let chunks = stream::unfold(Some(reader), |state| async move {
            let mut reader = state?;
            let mut buf = vec![0u8; READ_CHUNK_SIZE];
            match reader.read(&mut buf).await {
                Ok(0) => None,
                Ok(n) => {
                    buf.truncate(n);
                    Some((Ok(buf), Some(reader)))
                }
                // 出錯後不再讀取
                Err(e) => Some((Err(e), None)),
            }
        });
        FileContents::Stream(Box::pin(chunks))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, FileContents::Null)
    }

    pub fn is_buffer(&self) -> bool {
        matches!(self, FileContents::Buffer(_))
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, FileContents::Stream(_))
    }
}

impl fmt::Debug for FileContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContents::Null => f.write_str("Null"),
            FileContents::Buffer(data) => write!(f, "Buffer({} bytes)", data.len()),
            FileContents::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// 管線中流動的單一檔案。
///
/// `path` 與 `attributes` 由宿主維護，轉換階段只會替換 `contents`。
#[derive(Debug)]
pub struct FileUnit {
    pub path: PathBuf,
    pub attributes: HashMap<String, String>,
    pub contents: FileContents,
}

impl FileUnit {
    pub fn new(path: impl Into<PathBuf>, contents: FileContents) -> Self {
        FileUnit {
            path: path.into(),
            attributes: HashMap::new(),
            contents,
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_null(&self) -> bool {
        self.contents.is_null()
    }

    pub fn is_buffer(&self) -> bool {
        self.contents.is_buffer()
    }

    pub fn is_stream(&self) -> bool {
        self.contents.is_stream()
    }

    /// 內容為 `Buffer` 時回傳位元組
    pub fn buffer(&self) -> Option<&[u8]> {
        match &self.contents {
            FileContents::Buffer(data) => Some(data),
            _ => None,
        }
    }
}
