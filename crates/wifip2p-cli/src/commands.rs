//! 子命令实现

use anyhow::{Result, bail};
use clap::{Args, Subcommand};
use serde_json::{Value, json};
use tracing::{debug, info};

use wifip2p_core::constants::{
    EXTRA_WIFI_P2P_GROUP, EXTRA_WIFI_STATE, GROUP_CLIENT_IP_PROVISIONING_MODE_IPV4_DHCP,
    GROUP_CLIENT_IP_PROVISIONING_MODE_IPV6_LINK_LOCAL, GROUP_OWNER_BAND_2GHZ,
    GROUP_OWNER_BAND_5GHZ, GROUP_OWNER_BAND_AUTO, WIFI_DIRECT_SNIPPET_PACKAGE_NAME,
    WIFI_P2P_CONNECTED,
};
use wifip2p_core::{
    ActionListenerOnFailure, ExtraWifiState, HarnessSettings, P2pIntentAction, WifiP2pConfig,
};

#[derive(Args, Debug, Default)]
pub struct ConfigArgs {
    /// 以设置文件中的默认连接参数为基础
    #[arg(long)]
    pub from_settings: bool,
    /// 输出带目标 snippet 包名的完整请求，而不只是参数
    #[arg(long)]
    pub request: bool,
    /// 断开后是否保留组
    #[arg(long)]
    pub persistent_mode: Option<bool>,
    /// 对端 MAC 地址
    #[arg(short, long)]
    pub device_address: Option<String>,
    /// 组客户端 IP 分配方式 (0 = IPv4 DHCP, 1 = IPv6 link-local)
    #[arg(long)]
    pub ip_provisioning_mode: Option<i32>,
    /// 组工作频段 (0 = auto, 1 = 2.4GHz, 2 = 5GHz)
    #[arg(long)]
    pub band: Option<i32>,
    /// 组工作频率 (MHz)
    #[arg(long)]
    pub frequency: Option<i32>,
    /// 组网络名称
    #[arg(short, long)]
    pub network_name: Option<String>,
    /// 组密码
    #[arg(short, long)]
    pub passphrase: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum DecodeKind {
    /// ActionListener#onFailure 的失败原因
    Failure {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
    /// EXTRA_WIFI_STATE 的取值
    State {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// 显示当前设置
    Show,
    /// 写入默认设置文件
    Init {
        /// 覆盖已存在的文件
        #[arg(short, long)]
        force: bool,
    },
}

/// 在 base 之上叠加命令行指定的字段
fn build_config(args: &ConfigArgs, base: WifiP2pConfig) -> WifiP2pConfig {
    let mut config = base;
    if let Some(v) = args.persistent_mode {
        config = config.with_persistent_mode(v);
    }
    if let Some(v) = &args.device_address {
        config = config.with_device_address(v.as_str());
    }
    if let Some(v) = args.ip_provisioning_mode {
        config = config.with_group_client_ip_provisioning_mode(v);
    }
    if let Some(v) = args.band {
        config = config.with_group_operating_band(v);
    }
    if let Some(v) = args.frequency {
        config = config.with_group_operating_frequency(v);
    }
    if let Some(v) = &args.network_name {
        config = config.with_network_name(v.as_str());
    }
    if let Some(v) = &args.passphrase {
        config = config.with_passphrase(v.as_str());
    }
    config
}

/// 发往设备端 snippet 的 "建立连接" 请求
fn rpc_request(settings: &HarnessSettings, config: &WifiP2pConfig) -> Value {
    json!({
        "package": settings.snippet_package,
        "params": [config.to_json()],
    })
}

pub fn config(args: &ConfigArgs, settings: &HarnessSettings) -> Result<()> {
    let base = if args.from_settings {
        settings.connection.clone()
    } else {
        WifiP2pConfig::default()
    };

    let config = build_config(args, base);
    debug!("Built config: {:?}", config);
    if config.is_empty() {
        info!("No field set, the platform defaults will be used");
    }

    let output = if args.request {
        info!("Target snippet package: {}", settings.snippet_package);
        rpc_request(settings, &config)
    } else {
        config.to_json()
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn decode(kind: &DecodeKind) -> Result<()> {
    match *kind {
        DecodeKind::Failure { code } => {
            let reason = ActionListenerOnFailure::try_from(code)?;
            println!("{} ({})", reason, reason.code());
        }
        DecodeKind::State { code } => {
            let state = ExtraWifiState::try_from(code)?;
            println!("{} ({})", state, state.code());
        }
    }
    Ok(())
}

pub fn action(action: &str) -> Result<()> {
    let parsed: P2pIntentAction = action.parse()?;
    println!("{:?}", parsed);
    Ok(())
}

pub fn constants() {
    println!("📦 Snippet");
    println!("   WIFI_DIRECT_SNIPPET_PACKAGE_NAME = {}", WIFI_DIRECT_SNIPPET_PACKAGE_NAME);

    println!("📡 Intent actions");
    for action in P2pIntentAction::ALL {
        println!("   {:?} = {}", action, action);
    }

    println!("🔑 Extras");
    println!("   EXTRA_WIFI_P2P_GROUP = {}", EXTRA_WIFI_P2P_GROUP);
    println!("   EXTRA_WIFI_STATE = {}", EXTRA_WIFI_STATE);
    println!("   WIFI_P2P_CONNECTED = {}", WIFI_P2P_CONNECTED);

    println!("❌ ActionListenerOnFailure");
    for reason in ActionListenerOnFailure::ALL {
        println!("   {} = {}", reason, reason.code());
    }

    println!("📶 ExtraWifiState");
    for state in ExtraWifiState::ALL {
        println!("   {} = {}", state, state.code());
    }

    println!("⚙️  WifiP2pConfig values");
    println!("   GROUP_OWNER_BAND_AUTO = {}", GROUP_OWNER_BAND_AUTO);
    println!("   GROUP_OWNER_BAND_2GHZ = {}", GROUP_OWNER_BAND_2GHZ);
    println!("   GROUP_OWNER_BAND_5GHZ = {}", GROUP_OWNER_BAND_5GHZ);
    println!(
        "   GROUP_CLIENT_IP_PROVISIONING_MODE_IPV4_DHCP = {}",
        GROUP_CLIENT_IP_PROVISIONING_MODE_IPV4_DHCP
    );
    println!(
        "   GROUP_CLIENT_IP_PROVISIONING_MODE_IPV6_LINK_LOCAL = {}",
        GROUP_CLIENT_IP_PROVISIONING_MODE_IPV6_LINK_LOCAL
    );
}

pub fn settings(command: &SettingsCommand, settings: &HarnessSettings) -> Result<()> {
    let path = HarnessSettings::config_path();
    match *command {
        SettingsCommand::Show => {
            println!("📁 {}", path.display());
            println!("{:#?}", settings);
        }
        SettingsCommand::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            HarnessSettings::default().save_to(&path)?;
            println!("✅ 已写入默认设置: {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        args: ConfigArgs,
    }

    #[test]
    fn test_build_config_from_flags() {
        let cli = TestCli::parse_from([
            "wifip2p",
            "--device-address",
            "AA:BB:CC:DD:EE:FF",
            "--band",
            "2",
            "--persistent-mode",
            "true",
        ]);

        let config = build_config(&cli.args, WifiP2pConfig::default());
        let dict = config.to_dict();

        assert_eq!(dict.len(), 3);
        assert_eq!(dict["device_address"], "AA:BB:CC:DD:EE:FF");
        assert_eq!(dict["group_operating_band"], 2);
        assert_eq!(dict["persistent_mode"], true);
    }

    #[test]
    fn test_build_config_overrides_base() {
        let base = WifiP2pConfig::new()
            .with_network_name("DIRECT-base")
            .with_passphrase("basepass1");
        let args = ConfigArgs {
            passphrase: Some("override1".to_string()),
            ..Default::default()
        };

        let config = build_config(&args, base);
        assert_eq!(config.network_name(), Some("DIRECT-base"));
        assert_eq!(config.passphrase(), Some("override1"));
    }

    #[test]
    fn test_build_config_no_flags() {
        let config = build_config(&ConfigArgs::default(), WifiP2pConfig::default());
        assert!(config.is_empty());
    }

    #[test]
    fn test_rpc_request_uses_settings_package() {
        let settings = HarnessSettings {
            snippet_package: "com.example.snippet.p2p".to_string(),
            ..Default::default()
        };
        let config = WifiP2pConfig::for_device("AA:BB:CC:DD:EE:FF");

        assert_eq!(
            rpc_request(&settings, &config),
            json!({
                "package": "com.example.snippet.p2p",
                "params": [{ "device_address": "AA:BB:CC:DD:EE:FF" }]
            })
        );
    }

    #[test]
    fn test_rpc_request_default_package() {
        let request = rpc_request(&HarnessSettings::default(), &WifiP2pConfig::new());
        assert_eq!(request["package"], WIFI_DIRECT_SNIPPET_PACKAGE_NAME);
        assert_eq!(request["params"], json!([{}]));
    }

    #[test]
    fn test_decode_rejects_unknown_code() {
        assert!(decode(&DecodeKind::Failure { code: 2 }).is_ok());
        assert!(decode(&DecodeKind::Failure { code: 3 }).is_err());
        assert!(decode(&DecodeKind::State { code: -1 }).is_err());
    }

    #[test]
    fn test_action_rejects_unknown() {
        assert!(action("android.net.wifi.p2p.PEERS_CHANGED").is_ok());
        assert!(action("android.net.wifi.SCAN_RESULTS").is_err());
    }
}
