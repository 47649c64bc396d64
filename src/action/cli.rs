use std::io;
use clap::Parser;
use log::info;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use crate::config::config::Cli;
use crate::config::ports::AppConfig;
use crate::models::file::{FileContents, FileUnit};
use crate::service::builtin::builtin_stage;
use crate::service::config_service::{CliConfigAdapter, ConfigService};
use crate::utils::utils::{format_file_size, setup_logging};

pub fn process_args() -> io::Result<String> {
    let cli = Cli::parse();
    setup_logging(&cli.log_level)?;

    let config_service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
    let config = config_service.get_config()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let mut stdout = tokio::io::stdout();
        run_stage(&config, tokio::io::stdin(), &mut stdout).await
    })
}

/// 讀取輸入作為單一檔案，經轉換階段處理後寫入輸出
/// # 參數
/// - config: 應用配置
/// - reader: 輸入來源
/// - writer: 轉換結果的去處
/// # 回傳
/// - 成功時返回轉換器的顯示名稱，轉換失敗時返回 IO 錯誤
pub async fn run_stage<R, W>(config: &AppConfig, reader: R, writer: &mut W) -> io::Result<String>
where
    R: AsyncRead + Send + Unpin + 'static,
    W: AsyncWrite + Unpin,
{
    let stage = builtin_stage(config)?;
    info!("開始轉換，轉換器：{}，輸入：{}", stage.name(), config.path);

    let contents = if config.stream {
        FileContents::from_reader(reader)
    } else {
        let mut reader = reader;
        let mut data = Vec::new();
        reader.read_to_end(&mut data).await?;
        info!("讀取輸入：{}，大小：{}", config.path, format_file_size(data.len()));
        FileContents::Buffer(data)
    };

    let file = stage
        .process_file(FileUnit::new(&config.path, contents))
        .await
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let data = file.buffer().unwrap_or_default();
    writer.write_all(data).await?;
    writer.flush().await?;
    info!("輸出完成，大小：{}", format_file_size(data.len()));

    Ok(stage.name().to_string())
}
