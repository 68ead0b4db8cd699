//! 批量答卷处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责一次运行的全部编排。
//!
//! ## 核心功能
//!
//! 1. **路径校验**：输入/输出目录必须存在，否则在任何处理之前失败
//! 2. **扫描**：收集输入目录下所有 `.pdf` 答卷
//! 3. **解析阶段**：按配置的并发数提取并解析答卷，结果保持输入顺序
//! 4. **写出阶段**：所有答卷解析完成后才开始写文件
//! 5. **全局统计**：汇总扫描、解析、跳过、写出的数量
//!
//! ## 失败处理
//!
//! 默认任意错误都终止整次运行且不写任何文件。
//! 开启隔离模式后，读取失败或卷头错误的答卷会被跳过，其余答卷照常写出。

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::infrastructure::{PdfTextExtractor, TextExtractor};
use crate::models::{scan_submissions, Submission};
use crate::services::AnswerWriter;
use crate::utils::logging::{log_startup, log_submissions_found, print_final_stats};
use crate::workflow::{SubmissionCtx, SubmissionFlow};
use futures::stream::{self, StreamExt};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    flow: SubmissionFlow,
    writer: AnswerWriter,
}

impl App {
    /// 使用 PDF 提取器初始化应用
    pub fn initialize(config: Config) -> AppResult<Self> {
        Self::with_extractor(config, Arc::new(PdfTextExtractor::new()))
    }

    /// 使用指定的文本提取器初始化应用
    pub fn with_extractor(config: Config, extractor: Arc<dyn TextExtractor>) -> AppResult<Self> {
        if !config.input_path.is_dir() {
            return Err(AppError::InputDirNotFound {
                path: config.input_path.clone(),
            });
        }
        if !config.output_path.is_dir() {
            return Err(AppError::OutputDirNotFound {
                path: config.output_path.clone(),
            });
        }

        log_startup(&config);

        let writer = AnswerWriter::new(config.output_path.clone());
        Ok(Self {
            config,
            flow: SubmissionFlow::new(extractor),
            writer,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> AppResult<RunStats> {
        info!("\n📁 正在扫描待处理的答卷...");
        let paths = scan_submissions(&self.config.input_path).await?;

        let mut stats = RunStats {
            scanned: paths.len(),
            ..Default::default()
        };

        if paths.is_empty() {
            warn!("⚠️ 没有找到待处理的PDF文件，程序结束");
            return Ok(stats);
        }
        log_submissions_found(paths.len());

        // 第一阶段：全部解析
        let submissions = self.parse_all(paths, &mut stats).await?;

        // 第二阶段：全部写出
        info!("\n📝 正在写出 {} 份答卷...", submissions.len());
        stats.files_written = self.writer.write_all(&submissions)?;

        print_final_stats(&stats, &self.config);

        Ok(stats)
    }

    /// 并发提取并解析所有答卷，结果保持扫描顺序
    async fn parse_all(
        &self,
        paths: Vec<PathBuf>,
        stats: &mut RunStats,
    ) -> AppResult<Vec<Submission>> {
        let contexts = paths
            .iter()
            .enumerate()
            .map(|(idx, path)| SubmissionCtx::new(idx + 1, path))
            .collect::<Vec<_>>();

        let results = stream::iter(contexts)
            .map(|ctx| async move {
                let result = self.flow.process(&ctx).await;
                (ctx, result)
            })
            .buffered(self.config.concurrency());
        futures::pin_mut!(results);

        let mut submissions = Vec::with_capacity(stats.scanned);

        while let Some((ctx, result)) = results.next().await {
            match result {
                Ok(submission) => {
                    stats.parsed += 1;
                    submissions.push(submission);
                }
                Err(e) if self.config.isolate_failures && e.is_per_submission() => {
                    warn!("{} ⚠️ 已跳过: {}", ctx, e);
                    stats.skipped += 1;
                }
                Err(e) => {
                    error!("{} ❌ 处理失败，终止运行: {}", ctx, e);
                    return Err(e);
                }
            }
        }

        Ok(submissions)
    }
}

/// 处理统计
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    /// 扫描到的答卷数量
    pub scanned: usize,
    /// 成功解析的答卷数量
    pub parsed: usize,
    /// 隔离模式下跳过的答卷数量
    pub skipped: usize,
    /// 写出的文件数量
    pub files_written: usize,
}
