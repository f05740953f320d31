//! wifip2p CLI
//!
//! 在主机端查看 snippet 常量、解码平台状态码、生成连接 RPC 参数

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use wifip2p_core::HarnessSettings;

#[derive(Parser)]
#[command(name = "wifip2p", version, about = "Wi-Fi Direct snippet 测试辅助工具")]
struct Cli {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 生成 WifiP2pConfig 的 RPC 参数 (JSON)
    Config(commands::ConfigArgs),
    /// 解码平台返回的整数状态码
    Decode {
        #[command(subcommand)]
        kind: commands::DecodeKind,
    },
    /// 识别广播 intent action
    Action {
        /// 广播 action 字符串
        action: String,
    },
    /// 列出所有常量
    Constants,
    /// 查看或初始化设置文件
    Settings {
        #[command(subcommand)]
        command: commands::SettingsCommand,
    },
}

/// `RUST_LOG` 未设置时使用的过滤规则
fn default_filter(cli_verbose: bool, settings: &HarnessSettings) -> &'static str {
    if cli_verbose || settings.verbose {
        "debug"
    } else {
        "info,wifip2p_core=debug"
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 桥接 log crate（wifip2p-core 使用）到 tracing
    let _ = tracing_log::LogTracer::init();

    let settings = HarnessSettings::load();
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(cli.verbose, &settings))),
        )
        .try_init();

    match cli.command {
        Commands::Config(args) => commands::config(&args, &settings)?,
        Commands::Decode { kind } => commands::decode(&kind)?,
        Commands::Action { action } => commands::action(&action)?,
        Commands::Constants => commands::constants(),
        Commands::Settings { command } => commands::settings(&command, &settings)?,
    }

    Ok(())
}
