//! Wi-Fi P2P 广播 intent action

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::{
    WIFI_P2P_CONNECTION_CHANGED_ACTION, WIFI_P2P_DISCOVERY_CHANGED_ACTION,
    WIFI_P2P_PEERS_CHANGED_ACTION, WIFI_P2P_STATE_CHANGED_ACTION,
    WIFI_P2P_THIS_DEVICE_CHANGED_ACTION,
};
use crate::error::Error;

/// snippet 转发的 Wi-Fi P2P 广播类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum P2pIntentAction {
    ConnectionChanged,
    DiscoveryChanged,
    PeersChanged,
    StateChanged,
    ThisDeviceChanged,
}

impl P2pIntentAction {
    /// 注册广播过滤器时使用
    pub const ALL: [Self; 5] = [
        Self::ConnectionChanged,
        Self::DiscoveryChanged,
        Self::PeersChanged,
        Self::StateChanged,
        Self::ThisDeviceChanged,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::ConnectionChanged => WIFI_P2P_CONNECTION_CHANGED_ACTION,
            Self::DiscoveryChanged => WIFI_P2P_DISCOVERY_CHANGED_ACTION,
            Self::PeersChanged => WIFI_P2P_PEERS_CHANGED_ACTION,
            Self::StateChanged => WIFI_P2P_STATE_CHANGED_ACTION,
            Self::ThisDeviceChanged => WIFI_P2P_THIS_DEVICE_CHANGED_ACTION,
        }
    }
}

impl FromStr for P2pIntentAction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| Error::UnknownAction(s.to_string()))
    }
}

impl TryFrom<String> for P2pIntentAction {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<P2pIntentAction> for String {
    fn from(action: P2pIntentAction) -> Self {
        action.as_str().to_string()
    }
}

impl fmt::Display for P2pIntentAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_actions() {
        assert_eq!(
            "android.net.wifi.p2p.PEERS_CHANGED"
                .parse::<P2pIntentAction>()
                .unwrap(),
            P2pIntentAction::PeersChanged
        );
        for action in P2pIntentAction::ALL {
            assert_eq!(action.to_string().parse::<P2pIntentAction>().unwrap(), action);
        }
    }

    #[test]
    fn test_parse_is_strict() {
        for bad in [
            "",
            "android.net.wifi.p2p.peers_changed",
            "android.net.wifi.STATE_CHANGE",
            " android.net.wifi.p2p.STATE_CHANGED",
        ] {
            match bad.parse::<P2pIntentAction>() {
                Err(Error::UnknownAction(s)) => assert_eq!(s, bad),
                other => panic!("expected UnknownAction for {:?}, got {:?}", bad, other),
            }
        }
    }

    #[test]
    fn test_serde_as_action_string() {
        let json = serde_json::to_string(&P2pIntentAction::ConnectionChanged).unwrap();
        assert_eq!(json, "\"android.net.wifi.p2p.CONNECTION_STATE_CHANGE\"");

        let parsed: P2pIntentAction =
            serde_json::from_str("\"android.net.wifi.p2p.THIS_DEVICE_CHANGED\"").unwrap();
        assert_eq!(parsed, P2pIntentAction::ThisDeviceChanged);
        assert!(serde_json::from_str::<P2pIntentAction>("\"CONNECTED\"").is_err());
    }
}
