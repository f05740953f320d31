//! wifip2p-snippet Core Library
//!
//! Wi-Fi Direct (Wi-Fi P2P) 自动化测试使用的常量、平台状态码和连接配置。
//! 设备端由 snippet RPC 服务驱动，本库只负责与之约定的数据。
//!
//! # 模块
//!
//! - **constants**: snippet 包名、intent action、extras key
//! - **status**: `ActionListenerOnFailure` / `ExtraWifiState` 状态码（严格解码）
//! - **intent**: 广播 action 的类型化表示
//! - **config**: `WifiP2pConfig` 连接配置及其 RPC 参数映射
//! - **settings**: 本地持久化的测试工具设置
//!
//! # 使用示例
//!
//! ```
//! use wifip2p_core::{ExtraWifiState, WifiP2pConfig};
//!
//! let config = WifiP2pConfig::for_device("AA:BB:CC:DD:EE:FF");
//! assert_eq!(config.to_json().to_string(), r#"{"device_address":"AA:BB:CC:DD:EE:FF"}"#);
//!
//! let state = ExtraWifiState::try_from(2).unwrap();
//! assert!(state.is_enabled());
//! assert!(ExtraWifiState::try_from(5).is_err());
//! ```

pub mod config;
pub mod constants;
pub mod intent;
pub mod settings;
pub mod status;

mod error;

pub use error::{Error, Result};

pub use config::WifiP2pConfig;
pub use intent::P2pIntentAction;
pub use settings::HarnessSettings;
pub use status::{ActionListenerOnFailure, ExtraWifiState};
