//! Wi-Fi Direct snippet 常量
//!
//! 字符串值必须与 Android 平台及设备端 snippet 完全一致，
//! 测试代码直接拿它们与观察到的广播名称比较。

/// 设备端 Wi-Fi Direct snippet 的包名
pub const WIFI_DIRECT_SNIPPET_PACKAGE_NAME: &str = "com.google.snippet.wifi.direct";

// ============================================================================
// Extras keys
// ============================================================================

pub const EXTRA_WIFI_P2P_GROUP: &str = "p2pGroupInfo";
pub const EXTRA_WIFI_STATE: &str = "wifi_p2p_state";

/// NetworkInfo 的连接状态字符串
pub const WIFI_P2P_CONNECTED: &str = "CONNECTED";

// ============================================================================
// Intent actions
// ============================================================================

pub const WIFI_P2P_CONNECTION_CHANGED_ACTION: &str =
    "android.net.wifi.p2p.CONNECTION_STATE_CHANGE";
pub const WIFI_P2P_DISCOVERY_CHANGED_ACTION: &str = "android.net.wifi.p2p.DISCOVERY_STATE_CHANGE";
pub const WIFI_P2P_PEERS_CHANGED_ACTION: &str = "android.net.wifi.p2p.PEERS_CHANGED";
pub const WIFI_P2P_STATE_CHANGED_ACTION: &str = "android.net.wifi.p2p.STATE_CHANGED";
pub const WIFI_P2P_THIS_DEVICE_CHANGED_ACTION: &str = "android.net.wifi.p2p.THIS_DEVICE_CHANGED";

// ============================================================================
// WifiP2pConfig 取值 (android.net.wifi.p2p.WifiP2pConfig)
// ============================================================================

/// `group_operating_band`: 由系统自动选择频段
pub const GROUP_OWNER_BAND_AUTO: i32 = 0;
/// `group_operating_band`: 2.4GHz
pub const GROUP_OWNER_BAND_2GHZ: i32 = 1;
/// `group_operating_band`: 5GHz
pub const GROUP_OWNER_BAND_5GHZ: i32 = 2;

/// `group_client_ip_provisioning_mode`: 通过 DHCP 获取 IPv4 地址
pub const GROUP_CLIENT_IP_PROVISIONING_MODE_IPV4_DHCP: i32 = 0;
/// `group_client_ip_provisioning_mode`: 仅使用 IPv6 链路本地地址
pub const GROUP_CLIENT_IP_PROVISIONING_MODE_IPV6_LINK_LOCAL: i32 = 1;
