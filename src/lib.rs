//! # Exam Splitter
//!
//! 把学生的 PDF 答卷按题拆分成独立文本文件的批处理工具
//!
//! ## 架构设计
//!
//! 本系统沿用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 只暴露"文档 → 纯文本"的能力
//! - `TextExtractor` - 可替换的提取能力，`PdfTextExtractor` 为默认实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单份答卷
//! - `SubmissionParser` - 按分隔行拆出姓名和每题答案
//! - `AnswerWriter` - 把答案写成 `q{i}_{stem}.txt`
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份答卷"的处理流程
//! - `SubmissionCtx` - 上下文封装（序号 + 文件名）
//! - `SubmissionFlow` - 流程编排（提取 → 解析）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量处理器：扫描、并发解析、统一写出
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Cli, Config};
pub use error::{AppError, AppResult};
pub use infrastructure::{PdfTextExtractor, TextExtractor};
pub use models::Submission;
pub use orchestrator::{App, RunStats};
pub use services::{AnswerWriter, ParseError, ParsedSubmission, SubmissionParser};
pub use workflow::{SubmissionCtx, SubmissionFlow};
