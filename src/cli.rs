//! CLI 参数定义

use crate::infrastructure::Settings;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// envsaurus - 从带类型注释的 .env.example 生成类型化配置
#[derive(Parser, Debug)]
#[command(
    name = "envsaurus",
    version,
    about = "从带类型注释的 .env.example 生成类型化配置",
    long_about = "读取 .env.example 中的类型注释（# PORT:number=3000），生成配置模块、输出 schema 或校验当前环境变量"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 详细输出模式
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

// 示例文件参数（三个命令共用）
#[derive(Args, Debug, Clone, Default)]
pub struct ExampleArg {
    /// 示例文件路径 [默认: .env.example]
    #[arg(long, value_name = "PATH")]
    pub example: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// 生成配置模块
    #[command(name = "gen")]
    Gen {
        #[command(flatten)]
        example: ExampleArg,
        /// 输出路径 [默认: 存在 src 目录时为 src/config.ts，否则 config.ts]
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
        /// 生成带 JSDoc 的 JavaScript 而不是 TypeScript
        #[arg(long)]
        js: bool,
    },

    /// 打印 schema
    Schema {
        #[command(flatten)]
        example: ExampleArg,
        /// 输出格式 (json/yaml) [默认: json]
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// 用 schema 校验当前环境变量
    Check {
        #[command(flatten)]
        example: ExampleArg,
        /// 同时报告未声明的大写变量
        #[arg(long)]
        strict: bool,
    },
}

impl Commands {
    /// 命令行参数作为最高优先级的配置层
    ///
    /// 布尔开关只在显式给出时覆盖下层配置。
    pub fn overrides(&self) -> Settings {
        match self {
            Commands::Gen { example, out, js } => Settings {
                example: example.example.clone(),
                out: out.clone(),
                js: js.then_some(true),
                ..Default::default()
            },
            Commands::Schema { example, format } => Settings {
                example: example.example.clone(),
                format: format.clone(),
                ..Default::default()
            },
            Commands::Check { example, strict } => Settings {
                example: example.example.clone(),
                strict: strict.then_some(true),
                ..Default::default()
            },
        }
    }
}
