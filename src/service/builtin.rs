//! 內建轉換器，各示範一種回傳方式：
//! - `suffix`：同步回傳
//! - `uppercase`：由另一個任務透過 `Reporter` 回報
//! - `replace`：正規表示式取代，樣式無效時同步失敗

use std::io;

use log::info;
use regex::Regex;

use crate::config::config::ConverterKind;
use crate::config::ports::AppConfig;
use crate::facade::converter_fabric::ConverterFabric;
use crate::facade::traits::i_stage::FileStage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixOptions {
    pub suffix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOptions {
    pub pattern: String,
    pub replacement: String,
}

pub fn suffix_fabric(name: Option<&str>) -> ConverterFabric<SuffixOptions> {
    ConverterFabric::new(name.or(Some("suffix")), |text, options: &SuffixOptions, _| {
        Ok(Some(text + &options.suffix))
    })
}

/// 需在 tokio 執行環境中使用
pub fn uppercase_fabric(name: Option<&str>) -> ConverterFabric<()> {
    ConverterFabric::new(name.or(Some("uppercase")), |text, _: &(), reporter| {
        tokio::spawn(async move {
            reporter.resolve(text.to_uppercase());
        });
        Ok(None)
    })
}

pub fn replace_fabric(name: Option<&str>) -> ConverterFabric<ReplaceOptions> {
    ConverterFabric::new(name.or(Some("replace")), |text, options: &ReplaceOptions, _| {
        let re = Regex::new(&options.pattern)?;
        Ok(Some(re.replace_all(&text, options.replacement.as_str()).into_owned()))
    })
    .with_initializer(|options: &ReplaceOptions| {
        info!("取代模式：{} -> {}", options.pattern, options.replacement);
    })
}

/// 依配置建立對應的內建轉換階段
pub fn builtin_stage(config: &AppConfig) -> io::Result<Box<dyn FileStage>> {
    let name = config.name.as_deref();
    let stage: Box<dyn FileStage> = match config.converter {
        ConverterKind::Suffix => Box::new(suffix_fabric(name).create(SuffixOptions {
            suffix: config.suffix.clone(),
        })),
        ConverterKind::Uppercase => Box::new(uppercase_fabric(name).create(())),
        ConverterKind::Replace => {
            let pattern = config.pattern.clone().ok_or_else(|| {
                io::Error::new(io::ErrorKind::InvalidInput, "replace 轉換器需要指定 --pattern")
            })?;
            Box::new(replace_fabric(name).create(ReplaceOptions {
                pattern,
                replacement: config.replacement.clone(),
            }))
        }
    };
    Ok(stage)
}
