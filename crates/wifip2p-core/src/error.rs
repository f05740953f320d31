use thiserror::Error;

/// wifip2p-core 错误类型
#[derive(Error, Debug)]
pub enum Error {
    /// 平台返回了未声明的整数码（平台版本不匹配或解码错误）
    #[error("Unknown {kind} value: {value}")]
    UnknownEnumValue { kind: &'static str, value: i32 },

    #[error("Unknown Wi-Fi P2P intent action: {0}")]
    UnknownAction(String),

    #[error("Failed to serialize/deserialize: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
