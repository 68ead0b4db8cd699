use crate::models::loaders::PDF_SUFFIX;

/// 一份学生答卷的解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// 学生姓名（取自 `Full name:` 之后）
    pub identifier: String,
    /// 按文档顺序排列的每题答案
    pub answers: Vec<String>,
    /// 去掉 `.pdf` 后缀的原始文件名，用于输出命名
    pub source_file_stem: String,
}

impl Submission {
    pub fn new(identifier: String, answers: Vec<String>, source_file_name: &str) -> Self {
        Self {
            identifier,
            answers,
            source_file_stem: file_stem(source_file_name).to_string(),
        }
    }

    /// 第 `position` 题（从1开始）的输出文件名
    pub fn output_file_name(&self, position: usize) -> String {
        format!("q{}_{}.txt", position, self.source_file_stem)
    }

    /// 输出文件内容：姓名、分隔线、空行、答案
    pub fn render_answer(&self, answer: &str) -> String {
        format!("{}\n---\n\n{}", self.identifier, answer)
    }
}

fn file_stem(file_name: &str) -> &str {
    file_name.strip_suffix(PDF_SUFFIX).unwrap_or(file_name)
}
