//! 答卷解析服务 - 业务能力层
//!
//! 只负责"从全文中拆出姓名和每题答案"，不关心文件

use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, Level};

/// 卷头中姓名前的固定标记
pub const NAME_MARKER: &str = "Full name:";

lazy_static! {
    /// 分隔行：可选的 `=`，字面量 `Answer`，题号，可选的 `=`
    ///
    /// `\s` 为 Unicode 空白，提取结果中的不换行空格和换行也能匹配
    static ref ANSWER_DELIMITER: Regex =
        Regex::new(r"=*\s*Answer\s+([0-9]+)\s*=*").unwrap();
}

/// 解析错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("卷头缺少 \"{}\" 标记", NAME_MARKER)]
    MissingNameMarker,
}

/// 解析结果：姓名 + 按出现顺序排列的答案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSubmission {
    pub identifier: String,
    pub answers: Vec<String>,
}

/// 答卷解析服务
///
/// 职责：
/// - 按分隔行切分全文
/// - 第 0 段视为卷头，从中取出姓名
/// - 其余各段依次作为答案，题目位置只由出现顺序决定
#[derive(Debug, Default, Clone, Copy)]
pub struct SubmissionParser;

impl SubmissionParser {
    pub fn new() -> Self {
        Self
    }

    /// 解析一份答卷的全文
    ///
    /// # 返回
    /// 返回姓名和答案列表；没有任何分隔行时答案列表为空
    pub fn parse(&self, full_text: &str) -> Result<ParsedSubmission, ParseError> {
        self.log_numbering_mismatch(full_text);

        let mut fragments = ANSWER_DELIMITER.split(full_text).map(str::trim);

        // split 至少产生一个片段
        let header = fragments.next().unwrap_or_default();
        let identifier = parse_identifier(header)?;
        let answers = fragments.map(str::to_string).collect();

        Ok(ParsedSubmission {
            identifier,
            answers,
        })
    }

    /// 题号与出现位置不一致时记录调试日志，输出仍按位置编号
    fn log_numbering_mismatch(&self, full_text: &str) {
        if !tracing::enabled!(Level::DEBUG) {
            return;
        }

        for (index, caps) in ANSWER_DELIMITER.captures_iter(full_text).enumerate() {
            let printed = &caps[1];
            let position = index + 1;
            if printed.parse::<usize>().ok() != Some(position) {
                debug!("分隔行题号 {} 出现在第 {} 个位置，按位置编号", printed, position);
            }
        }
    }
}

/// 取第一个 `Full name:` 之后的全部内容
fn parse_identifier(header: &str) -> Result<String, ParseError> {
    header
        .split_once(NAME_MARKER)
        .map(|(_, name)| name.trim().to_string())
        .ok_or(ParseError::MissingNameMarker)
}
