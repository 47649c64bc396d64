pub mod error;

pub mod models {
    pub mod conversion;
    pub mod file;
}

pub mod service {
    pub mod builtin;
    pub mod config_service;
    pub mod content;
    pub mod outcome;
    pub mod traits {
        pub mod i_service;
    }
}

pub mod facade {
    pub mod converter_fabric;
    pub mod traits {
        pub mod i_stage;
    }
}

pub mod config {
    pub mod config;
    pub mod ports;
}

pub mod action {
    pub mod cli;
}

pub mod utils {
    pub mod utils;
}

pub use error::{BoxError, PluginError};
pub use facade::converter_fabric::{ConverterFabric, Stage};
pub use facade::traits::i_stage::FileStage;
pub use models::conversion::{ConverterIdentity, TransformOutcome};
pub use models::file::{ContentStream, FileContents, FileUnit};
pub use service::outcome::Reporter;
pub use service::traits::i_service::{Transform, TransformResult};
