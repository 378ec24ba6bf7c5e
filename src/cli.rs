use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "heritage-recon")]
#[command(about = "문화재 대장 대조 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 설정 파일 (기본: ~/.config/heritage-recon/config.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 두 대장을 대조해 누락 항목 보고서를 만든다
    Compare {
        /// A 파일 (기준 대장, 단일 시트)
        #[arg(required = true)]
        file_a: PathBuf,

        /// B 파일 (시트별 대장)
        #[arg(required = true)]
        file_b: PathBuf,

        /// 출력 파일/디렉터리 (기본: 설정의 default_output)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 출력 형식 (text/json/excel/all)
        #[arg(short, long, default_value = "text")]
        format: ReportFormat,

        /// 숫자·한글 이외 문자 제거를 끈다 (두 대장 모두)
        #[arg(long)]
        no_strict_charset: bool,

        /// 보고서를 화면에 출력하지 않음
        #[arg(short, long)]
        quiet: bool,
    },

    /// 두 파일의 컬럼과 앞쪽 행을 미리 본다
    Inspect {
        /// A 파일
        #[arg(required = true)]
        file_a: PathBuf,

        /// B 파일
        #[arg(required = true)]
        file_b: PathBuf,

        /// 시트마다 보여줄 행 수
        #[arg(short = 'n', long, default_value = "5")]
        rows: usize,
    },

    /// 설정 표시/초기화
    Config {
        /// 현재 설정을 JSON으로 표시
        #[arg(long)]
        show: bool,

        /// 기본 설정 파일 생성
        #[arg(long)]
        init: bool,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Excel,
    All,
}

impl ReportFormat {
    /// 이 형식이 만드는 파일 확장자
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ReportFormat::Text => &["txt"],
            ReportFormat::Json => &["json"],
            ReportFormat::Excel => &["xlsx"],
            ReportFormat::All => &["txt", "json", "xlsx"],
        }
    }
}

impl std::str::FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            "excel" | "xlsx" => Ok(ReportFormat::Excel),
            "all" => Ok(ReportFormat::All),
            _ => Err(format!("Unknown format: {}. Use text, json, excel, or all", s)),
        }
    }
}
