use std::io;

use futures::StreamExt;
use log::debug;

use crate::models::file::{ContentStream, FileContents};

/// 取出檔案內容對應的文字
/// # 參數
/// - contents: 檔案內容，`Null` 應由呼叫端先行拒絕
/// # 回傳
/// - 成功時返回完整文字；串流出錯或內容為 `Null` 時返回 IO 錯誤
pub async fn read_contents(contents: FileContents) -> io::Result<String> {
    match contents {
        FileContents::Buffer(data) => Ok(decode_buffer(&data)),
        FileContents::Stream(stream) => drain_stream(stream).await,
        FileContents::Null => Err(io::Error::new(io::ErrorKind::InvalidInput, "檔案內容未讀取")),
    }
}

pub fn decode_buffer(data: &[u8]) -> String {
    String::from_utf8_lossy(data).into_owned()
}

/// 收集串流的所有區塊，結束後一次解碼，跨區塊的多位元組字元不會被拆開
pub async fn drain_stream(mut stream: ContentStream) -> io::Result<String> {
    let mut buffer = Vec::new();
    let mut chunks = 0usize;
    while let Some(chunk) = stream.next().await {
        buffer.extend_from_slice(&chunk?);
        chunks += 1;
    }
    debug!("串流讀取完成：{} 個區塊，共 {} 位元組", chunks, buffer.len());
    Ok(decode_buffer(&buffer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::file::READ_CHUNK_SIZE;
    use futures::stream;

    #[tokio::test]
    async fn buffer_and_stream_decode_the_same() {
        let text = "Some text，含中文";
        let bytes = text.as_bytes().to_vec();
        // 在多位元組字元中間切開
        let chunks: Vec<Vec<u8>> = bytes.chunks(5).map(|c| c.to_vec()).collect();

        let from_buffer = read_contents(FileContents::Buffer(bytes.clone())).await.unwrap();
        let from_stream = read_contents(FileContents::from_chunks(chunks)).await.unwrap();
        assert_eq!(from_buffer, text);
        assert_eq!(from_stream, text);
    }

    #[tokio::test]
    async fn empty_stream_is_empty_text() {
        let text = read_contents(FileContents::from_chunks(Vec::new())).await.unwrap();
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn stream_error_is_returned() {
        let items: Vec<io::Result<Vec<u8>>> = vec![
            Ok(b"partial".to_vec()),
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "管線中斷")),
        ];
        let contents = FileContents::Stream(Box::pin(stream::iter(items)));
        let err = read_contents(contents).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[tokio::test]
    async fn null_contents_are_rejected() {
        let err = read_contents(FileContents::Null).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[tokio::test]
    async fn reader_contents_are_drained() {
        let data = vec![b'a'; READ_CHUNK_SIZE * 2 + 3];
        let contents = FileContents::from_reader(std::io::Cursor::new(data.clone()));
        let text = read_contents(contents).await.unwrap();
        assert_eq!(text.len(), data.len());
    }
}
