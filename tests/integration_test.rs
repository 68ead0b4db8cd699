use exam_splitter::{App, AppError, AppResult, Config, TextExtractor};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

/// 按文件名返回预设文本的提取器
struct FakeExtractor {
    texts: HashMap<String, String>,
}

impl FakeExtractor {
    fn new(texts: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            texts: texts
                .iter()
                .map(|(name, text)| (name.to_string(), text.to_string()))
                .collect(),
        })
    }
}

impl TextExtractor for FakeExtractor {
    fn extract(&self, path: &Path) -> AppResult<String> {
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        self.texts
            .get(&name)
            .cloned()
            .ok_or_else(|| AppError::document_read(path, "not a PDF document"))
    }
}

struct Workspace {
    _tmp: TempDir,
    input: PathBuf,
    output: PathBuf,
}

impl Workspace {
    /// 创建输入/输出目录，并为每个文件名放一个空的占位文件
    fn new(files: &[&str]) -> Self {
        let tmp = TempDir::new().unwrap();
        let input = tmp.path().join("exam_submissions");
        let output = tmp.path().join("split_exams");
        fs::create_dir(&input).unwrap();
        fs::create_dir(&output).unwrap();
        for name in files {
            fs::write(input.join(name), b"").unwrap();
        }
        Self {
            _tmp: tmp,
            input,
            output,
        }
    }

    fn config(&self) -> Config {
        Config {
            input_path: self.input.clone(),
            output_path: self.output.clone(),
            ..Config::default()
        }
    }

    fn output_names(&self) -> Vec<String> {
        let mut names: Vec<_> = fs::read_dir(&self.output)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.output.join(name)).unwrap()
    }
}

const JANE: &str = "Full name: Jane Doe\n\n===== Answer 1 =====\nThe sky is blue.\n===== Answer 2 =====\n42\n";

#[tokio::test]
async fn test_split_single_submission() {
    let ws = Workspace::new(&["submission1.pdf", "readme.txt"]);
    let extractor = FakeExtractor::new(&[("submission1.pdf", JANE)]);

    let stats = App::with_extractor(ws.config(), extractor)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(stats.scanned, 1);
    assert_eq!(stats.files_written, 2);
    assert_eq!(ws.output_names(), vec!["q1_submission1.txt", "q2_submission1.txt"]);
    assert_eq!(
        ws.read_output("q1_submission1.txt"),
        "Jane Doe\n---\n\nThe sky is blue."
    );
    assert_eq!(ws.read_output("q2_submission1.txt"), "Jane Doe\n---\n\n42");
}

#[tokio::test]
async fn test_missing_directories_fail_before_processing() {
    let ws = Workspace::new(&[]);

    let mut config = ws.config();
    config.input_path = ws.input.join("missing");
    let err = App::with_extractor(config, FakeExtractor::new(&[])).err().unwrap();
    assert!(matches!(err, AppError::InputDirNotFound { .. }));

    let mut config = ws.config();
    config.output_path = ws.output.join("missing");
    let err = App::with_extractor(config, FakeExtractor::new(&[])).err().unwrap();
    assert!(matches!(err, AppError::OutputDirNotFound { .. }));
}

#[tokio::test]
async fn test_malformed_header_halts_run_without_output() {
    let ws = Workspace::new(&["a_good.pdf", "b_bad.pdf"]);
    let extractor = FakeExtractor::new(&[
        ("a_good.pdf", JANE),
        ("b_bad.pdf", "Student: Someone\n== Answer 1 ==\nx"),
    ]);

    let err = App::with_extractor(ws.config(), extractor)
        .unwrap()
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::MalformedHeader { .. }));
    assert!(ws.output_names().is_empty());
}

#[tokio::test]
async fn test_unreadable_document_halts_run() {
    let ws = Workspace::new(&["a_good.pdf", "z_corrupt.pdf"]);
    let extractor = FakeExtractor::new(&[("a_good.pdf", JANE)]);

    let err = App::with_extractor(ws.config(), extractor)
        .unwrap()
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DocumentRead { .. }));
    assert!(ws.output_names().is_empty());
}

#[tokio::test]
async fn test_isolation_mode_skips_failed_submissions() {
    let ws = Workspace::new(&["a_good.pdf", "b_bad.pdf", "c_corrupt.pdf"]);
    let extractor = FakeExtractor::new(&[
        ("a_good.pdf", JANE),
        ("b_bad.pdf", "no marker at all"),
    ]);
    let config = Config {
        isolate_failures: true,
        ..ws.config()
    };

    let stats = App::with_extractor(config, extractor)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(stats.scanned, 3);
    assert_eq!(stats.parsed, 1);
    assert_eq!(stats.skipped, 2);
    assert_eq!(ws.output_names(), vec!["q1_a_good.txt", "q2_a_good.txt"]);
}

#[tokio::test]
async fn test_submission_without_delimiters_writes_nothing() {
    let ws = Workspace::new(&["essay.pdf"]);
    let extractor = FakeExtractor::new(&[("essay.pdf", "Full name: Sam\nOne long essay.")]);

    let stats = App::with_extractor(ws.config(), extractor)
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(stats.parsed, 1);
    assert_eq!(stats.files_written, 0);
    assert!(ws.output_names().is_empty());
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let ws = Workspace::new(&["submission1.pdf"]);
    let extractor = FakeExtractor::new(&[("submission1.pdf", JANE)]);
    let app = App::with_extractor(ws.config(), extractor).unwrap();

    app.run().await.unwrap();
    let first = fs::read(ws.output.join("q1_submission1.txt")).unwrap();
    app.run().await.unwrap();
    let second = fs::read(ws.output.join("q1_submission1.txt")).unwrap();

    assert_eq!(first, second);
    assert_eq!(ws.output_names().len(), 2);
}

#[tokio::test]
async fn test_concurrent_parsing_keeps_naming() {
    let names: Vec<String> = (0..12).map(|i| format!("student{:02}.pdf", i)).collect();
    let texts: Vec<String> = (0..12)
        .map(|i| {
            format!(
                "Full name: Student {i}\n== Answer 1 ==\nfirst {i}\n== Answer 2 ==\nsecond {i}"
            )
        })
        .collect();
    let pairs: Vec<(&str, &str)> = names
        .iter()
        .zip(&texts)
        .map(|(n, t)| (n.as_str(), t.as_str()))
        .collect();

    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
    let ws = Workspace::new(&name_refs);
    let config = Config {
        max_concurrent_submissions: 4,
        ..ws.config()
    };

    let stats = App::with_extractor(config, FakeExtractor::new(&pairs))
        .unwrap()
        .run()
        .await
        .unwrap();

    assert_eq!(stats.files_written, 24);
    assert_eq!(
        ws.read_output("q2_student07.txt"),
        "Student 7\n---\n\nsecond 7"
    );
}

#[tokio::test]
async fn test_real_extractor_rejects_non_pdf() {
    let ws = Workspace::new(&[]);
    fs::write(ws.input.join("fake.pdf"), b"this is plain text").unwrap();

    let err = App::initialize(ws.config())
        .unwrap()
        .run()
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::DocumentRead { .. }));
}

#[tokio::test]
#[ignore] // 需要样例 PDF：cargo test -- --ignored
async fn test_split_sample_folder() {
    exam_splitter::logger::init(true);

    let config = Config::default();
    let stats = App::initialize(config)
        .expect("样例目录不存在")
        .run()
        .await
        .expect("拆分答卷失败");

    println!("写出 {} 个文件", stats.files_written);
}
