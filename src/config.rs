use clap::Parser;
use std::path::PathBuf;

/// 命令行参数
#[derive(Parser, Debug, Clone)]
#[command(name = "exam_splitter", about = "Process student exam submissions")]
pub struct Cli {
    /// Path to folder containing student submissions
    #[arg(short = 'i', long = "input_path", default_value = "exam_submissions/")]
    pub input_path: PathBuf,

    /// Path to folder in which to put output
    #[arg(short = 'o', long = "output_path", default_value = "split_exams/")]
    pub output_path: PathBuf,
}

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 答卷 PDF 所在目录
    pub input_path: PathBuf,
    /// 拆分结果输出目录
    pub output_path: PathBuf,
    /// 同时提取/解析的答卷数量
    pub max_concurrent_submissions: usize,
    /// 单个答卷失败时是否跳过而不是终止整次运行
    pub isolate_failures: bool,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("exam_submissions/"),
            output_path: PathBuf::from("split_exams/"),
            max_concurrent_submissions: 4,
            isolate_failures: false,
            verbose_logging: false,
        }
    }
}

impl Config {
    /// 解析命令行参数，再叠加环境变量
    pub fn load() -> Self {
        Self::from_cli(Cli::parse()).with_env()
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self {
            input_path: cli.input_path,
            output_path: cli.output_path,
            ..Self::default()
        }
    }

    /// 用环境变量覆盖可选项，无法解析的值保持原样
    pub fn with_env(self) -> Self {
        Self {
            max_concurrent_submissions: std::env::var("MAX_CONCURRENT_SUBMISSIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.max_concurrent_submissions),
            isolate_failures: std::env::var("ISOLATE_FAILURES").ok().and_then(|v| v.parse().ok()).unwrap_or(self.isolate_failures),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            ..self
        }
    }

    /// 实际使用的并发数（至少为 1）
    pub fn concurrency(&self) -> usize {
        self.max_concurrent_submissions.max(1)
    }
}
