//! 平台状态码
//!
//! 与 `WifiP2pManager` 的整数常量一一对应。解码是严格的：
//! 未声明的整数码一律返回 [`Error::UnknownEnumValue`]，不会回退到默认成员。

use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// `ActionListener#onFailure(int)` 的失败原因
///
/// <https://developer.android.com/reference/android/net/wifi/p2p/WifiP2pManager.ActionListener#onFailure(int)>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum ActionListenerOnFailure {
    Error = 0,
    P2pUnsupported = 1,
    Busy = 2,
}

impl ActionListenerOnFailure {
    pub const ALL: [Self; 3] = [
        ActionListenerOnFailure::Error,
        ActionListenerOnFailure::P2pUnsupported,
        ActionListenerOnFailure::Busy,
    ];

    /// 获取整数码
    pub fn code(self) -> i32 {
        self as i32
    }

    /// 平台常量名
    pub fn name(self) -> &'static str {
        match self {
            ActionListenerOnFailure::Error => "ERROR",
            ActionListenerOnFailure::P2pUnsupported => "P2P_UNSUPPORTED",
            ActionListenerOnFailure::Busy => "BUSY",
        }
    }
}

impl TryFrom<i32> for ActionListenerOnFailure {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(ActionListenerOnFailure::Error),
            1 => Ok(ActionListenerOnFailure::P2pUnsupported),
            2 => Ok(ActionListenerOnFailure::Busy),
            _ => {
                debug!("Unrecognized onFailure reason: {}", value);
                Err(Error::UnknownEnumValue {
                    kind: "ActionListenerOnFailure",
                    value,
                })
            }
        }
    }
}

impl From<ActionListenerOnFailure> for i32 {
    fn from(reason: ActionListenerOnFailure) -> Self {
        reason.code()
    }
}

impl fmt::Display for ActionListenerOnFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// `EXTRA_WIFI_STATE` 的取值：Wi-Fi P2P 是否启用
///
/// <https://developer.android.com/reference/android/net/wifi/p2p/WifiP2pManager#EXTRA_WIFI_STATE>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum ExtraWifiState {
    WifiP2pStateUnknown = 0,
    WifiP2pStateDisabled = 1,
    WifiP2pStateEnabled = 2,
}

impl ExtraWifiState {
    pub const ALL: [Self; 3] = [
        Self::WifiP2pStateUnknown,
        Self::WifiP2pStateDisabled,
        Self::WifiP2pStateEnabled,
    ];

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::WifiP2pStateUnknown => "WIFI_P2P_STATE_UNKNOWN",
            Self::WifiP2pStateDisabled => "WIFI_P2P_STATE_DISABLED",
            Self::WifiP2pStateEnabled => "WIFI_P2P_STATE_ENABLED",
        }
    }

    pub fn is_enabled(self) -> bool {
        self == Self::WifiP2pStateEnabled
    }
}

impl TryFrom<i32> for ExtraWifiState {
    type Error = Error;

    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::WifiP2pStateUnknown),
            1 => Ok(Self::WifiP2pStateDisabled),
            2 => Ok(Self::WifiP2pStateEnabled),
            _ => {
                debug!("Unrecognized {}: {}", crate::constants::EXTRA_WIFI_STATE, value);
                Err(Error::UnknownEnumValue {
                    kind: "ExtraWifiState",
                    value,
                })
            }
        }
    }
}

impl From<ExtraWifiState> for i32 {
    fn from(state: ExtraWifiState) -> Self {
        state.code()
    }
}

impl fmt::Display for ExtraWifiState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
