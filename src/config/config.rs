use clap::{Parser, ValueEnum};
use std::io;

#[derive(Parser, Clone, Debug)]
#[command(
    name = "convert_stage",
    about = "以內建轉換器處理標準輸入，結果寫到標準輸出",
    long_about = "把標準輸入視為單一檔案，交給內建轉換器（suffix、uppercase、replace）組成的轉換階段處理，轉換後的文字寫到標準輸出。\n使用 --stream 以串流方式讀取輸入。\n使用 `--help` 查看詳細用法。"
)]
pub struct Cli {
    #[arg(long, default_value = "suffix")]
    pub converter: ConverterKind,
    /// 轉換器名稱，影響錯誤訊息中的顯示名稱
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long, default_value = "")]
    pub suffix: String,
    #[arg(long)]
    pub pattern: Option<String>,
    #[arg(long, default_value = "")]
    pub replacement: String,
    #[arg(long, default_value_t = false)]
    pub stream: bool,
    #[arg(long, default_value = "<stdin>")]
    pub path: String,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

#[derive(Clone, ValueEnum, PartialEq, Debug)]
pub enum ConverterKind {
    Suffix,
    Uppercase,
    Replace,
}

pub fn validate_cli_args(cli: &Cli) -> io::Result<()> {
    match (&cli.converter, &cli.pattern) {
        (ConverterKind::Replace, None) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "replace 轉換器需要指定 --pattern",
        )),
        (ConverterKind::Replace, Some(pattern)) if pattern.is_empty() => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "--pattern 不可為空",
        )),
        (_, Some(_)) => {
            log::warn!("{:?} 轉換器不使用 --pattern，已忽略", cli.converter);
            Ok(())
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("convert_stage").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_to_suffix() {
        let cli = parse(&[]);
        assert_eq!(cli.converter, ConverterKind::Suffix);
        assert!(!cli.stream);
        assert!(validate_cli_args(&cli).is_ok());
    }

    #[test]
    fn replace_requires_pattern() {
        let cli = parse(&["--converter", "replace"]);
        let err = validate_cli_args(&cli).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let cli = parse(&["--converter", "replace", "--pattern", "a+"]);
        assert!(validate_cli_args(&cli).is_ok());
    }
}
