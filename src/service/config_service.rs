use std::io;
use crate::config::config::{validate_cli_args, Cli};
use crate::config::ports::{AppConfig, ConfigPort};

// 配置服務，負責選擇適當的配置適配器
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

// CLI 配置適配器
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        validate_cli_args(&self.cli)?;
        Ok(AppConfig {
            converter: self.cli.converter.clone(),
            // 空字串視同未指定
            name: self.cli.name.clone().filter(|n| !n.is_empty()),
            suffix: self.cli.suffix.clone(),
            pattern: self.cli.pattern.clone(),
            replacement: self.cli.replacement.clone(),
            stream: self.cli.stream,
            path: self.cli.path.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use crate::config::config::ConverterKind;

    #[test]
    fn cli_adapter_maps_arguments() {
        let cli = Cli::parse_from([
            "convert_stage", "--converter", "uppercase", "--name", "", "--stream", "--path", "in.txt",
        ]);
        let service = ConfigService::new(Box::new(CliConfigAdapter::new(cli)));
        let config = service.get_config().unwrap();
        assert_eq!(config.converter, ConverterKind::Uppercase);
        assert_eq!(config.name, None);
        assert!(config.stream);
        assert_eq!(config.path, "in.txt");
    }
}
