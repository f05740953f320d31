//! Wi-Fi P2P 连接配置
//!
//! [`WifiP2pConfig`] 是传给 snippet "建立 P2P 连接" RPC 的参数。
//! 字段名即 RPC 载荷的键名，必须与设备端 snippet 保持一致，不能改名。
//!
//! <https://developer.android.com/reference/android/net/wifi/p2p/WifiP2pConfig>

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// `WifiP2pConfig`: 字段与设备端 snippet 的参数名完全一致
///
/// 构造后不可变；所有字段都可以为空，表示使用平台默认值。
/// "修改" 只能通过 `with_*` 方法得到一个新的配置。
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, Hash)]
#[serde(deny_unknown_fields)]
pub struct WifiP2pConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    persistent_mode: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    device_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_client_ip_provisioning_mode: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_operating_band: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group_operating_frequency: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    network_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    passphrase: Option<String>,
}

impl WifiP2pConfig {
    /// 创建全部字段为空的配置
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定对端设备地址的配置（最常见的连接方式）
    pub fn for_device(device_address: impl Into<String>) -> Self {
        Self::new().with_device_address(device_address)
    }

    #[must_use]
    pub fn with_persistent_mode(self, persistent_mode: bool) -> Self {
        Self {
            persistent_mode: Some(persistent_mode),
            ..self
        }
    }

    #[must_use]
    pub fn with_device_address(self, device_address: impl Into<String>) -> Self {
        Self {
            device_address: Some(device_address.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_group_client_ip_provisioning_mode(self, mode: i32) -> Self {
        Self {
            group_client_ip_provisioning_mode: Some(mode),
            ..self
        }
    }

    #[must_use]
    pub fn with_group_operating_band(self, band: i32) -> Self {
        Self {
            group_operating_band: Some(band),
            ..self
        }
    }

    #[must_use]
    pub fn with_group_operating_frequency(self, frequency: i32) -> Self {
        Self {
            group_operating_frequency: Some(frequency),
            ..self
        }
    }

    #[must_use]
    pub fn with_network_name(self, network_name: impl Into<String>) -> Self {
        Self {
            network_name: Some(network_name.into()),
            ..self
        }
    }

    #[must_use]
    pub fn with_passphrase(self, passphrase: impl Into<String>) -> Self {
        Self {
            passphrase: Some(passphrase.into()),
            ..self
        }
    }

    pub fn persistent_mode(&self) -> Option<bool> {
        self.persistent_mode
    }

    pub fn device_address(&self) -> Option<&str> {
        self.device_address.as_deref()
    }

    pub fn group_client_ip_provisioning_mode(&self) -> Option<i32> {
        self.group_client_ip_provisioning_mode
    }

    pub fn group_operating_band(&self) -> Option<i32> {
        self.group_operating_band
    }

    pub fn group_operating_frequency(&self) -> Option<i32> {
        self.group_operating_frequency
    }

    pub fn network_name(&self) -> Option<&str> {
        self.network_name.as_deref()
    }

    pub fn passphrase(&self) -> Option<&str> {
        self.passphrase.as_deref()
    }

    /// 所有字段均为空
    pub fn is_empty(&self) -> bool {
        self.to_dict().is_empty()
    }

    /// 转换为 RPC 参数映射
    ///
    /// 只包含已设置的字段，未设置的字段不会以 null 出现。
    pub fn to_dict(&self) -> Map<String, Value> {
        let mut dict = Map::new();

        if let Some(v) = self.persistent_mode {
            dict.insert("persistent_mode".to_string(), Value::from(v));
        }
        if let Some(v) = &self.device_address {
            dict.insert("device_address".to_string(), Value::from(v.as_str()));
        }
        if let Some(v) = self.group_client_ip_provisioning_mode {
            dict.insert(
                "group_client_ip_provisioning_mode".to_string(),
                Value::from(v),
            );
        }
        if let Some(v) = self.group_operating_band {
            dict.insert("group_operating_band".to_string(), Value::from(v));
        }
        if let Some(v) = self.group_operating_frequency {
            dict.insert("group_operating_frequency".to_string(), Value::from(v));
        }
        if let Some(v) = &self.network_name {
            dict.insert("network_name".to_string(), Value::from(v.as_str()));
        }
        if let Some(v) = &self.passphrase {
            dict.insert("passphrase".to_string(), Value::from(v.as_str()));
        }

        dict
    }

    /// `to_dict` 的 JSON 对象形式，可直接作为 RPC 参数
    pub fn to_json(&self) -> Value {
        Value::Object(self.to_dict())
    }

    /// 从 `to_dict` 产生的映射重建配置
    ///
    /// 未知键或类型不符的值返回 [`Error::Serialization`](crate::Error::Serialization)。
    pub fn from_dict(dict: Map<String, Value>) -> Result<Self> {
        Ok(serde_json::from_value(Value::Object(dict))?)
    }
}
