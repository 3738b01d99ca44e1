//! envsaurus 主程序入口
//!
//! 设计原则：
//! - 模块化：入口代码简洁，逻辑委托给各模块
//! - 错误处理：详细/安静错误模式，通过 --verbose 切换

use clap::{CommandFactory, Parser, error::ErrorKind};
use envsaurus::cli::{Cli, Commands};
use envsaurus::commands::{
    CheckCommand, CommandContext, CommandHandler, GenCommand, SchemaCommand,
};
use envsaurus::error::Result;
use envsaurus::infrastructure::{Settings, paths};
use tracing_subscriber::EnvFilter;

fn main() {
    // 解析 CLI 参数；帮助与版本退出码 0，其余参数错误退出码 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    init_tracing(cli.verbose);
    tracing::debug!("envsaurus v{} starting", envsaurus::version());

    let Some(command) = cli.command else {
        let _ = Cli::command().print_help();
        println!();
        return;
    };

    if let Err(e) = run_command(command, cli.verbose) {
        e.report(cli.verbose);
        std::process::exit(1);
    }
}

/// 日志输出到 stderr，ENVSAURUS_LOG 优先于 --verbose
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("ENVSAURUS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// 运行具体命令
fn run_command(command: Commands, verbose: bool) -> Result<()> {
    let cwd = paths::current_dir()?;
    let settings = Settings::load_layered(&cwd)?.merge(command.overrides());
    tracing::debug!(?settings, "resolved settings");

    let ctx = CommandContext { verbose, cwd };
    let handler: Box<dyn CommandHandler> = match command {
        Commands::Gen { .. } => Box::new(GenCommand::new(settings)),
        Commands::Schema { .. } => Box::new(SchemaCommand::new(settings)),
        Commands::Check { .. } => Box::new(CheckCommand::new(settings)),
    };

    handler.execute(&ctx)
}
