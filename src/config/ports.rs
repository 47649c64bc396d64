use std::io;
use crate::config::config::ConverterKind;

// 應用配置結構體，封裝所有參數
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub converter: ConverterKind,
    pub name: Option<String>,
    pub suffix: String,
    pub pattern: Option<String>,
    pub replacement: String,
    pub stream: bool,
    pub path: String,
}

// 配置來源的 Port
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
