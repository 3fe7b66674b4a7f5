// ==========================================
// TecDoc 零件目录 - 命令行入口
// ==========================================
// 输出: stdout (JSON / CSV), 日志: stderr
// ==========================================

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tecdoc_catalog::config::ConfigManager;
use tecdoc_catalog::db::{default_db_path, open_read_only_connection};
use tecdoc_catalog::{logging, CatalogApi};

#[derive(Parser)]
#[command(name = "tecdoc-catalog")]
#[command(version, about = "TecDoc 零件目录查询工具")]
struct Cli {
    /// 数据库文件路径
    #[arg(long, env = "TECDOC_DB_PATH")]
    db: Option<PathBuf>,

    /// 输出格式
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// 以 JSON 格式输出日志
    #[arg(long)]
    json_log: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 当前语言下的特征列表
    Criteria,
    /// 零件特征值
    PartCriteria { part_id: i64 },
    /// 零件图片与 PDF 文档
    PartFiles { part_id: i64 },
    /// 生效配置
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Json,
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json_log {
        logging::init_json();
    } else {
        logging::init();
    }

    let db_path = cli.db.unwrap_or_else(default_db_path);
    tracing::info!(version = tecdoc_catalog::VERSION, db = %db_path.display(), "{}", tecdoc_catalog::APP_NAME);

    let conn = open_read_only_connection(&db_path)
        .with_context(|| format!("无法打开数据库: {}", db_path.display()))?;
    let conn = Arc::new(Mutex::new(conn));

    let config = ConfigManager::from_connection(conn.clone())
        .load()
        .context("配置加载失败")?;
    let api = CatalogApi::new(conn, config)?;

    match cli.command {
        Commands::Criteria => emit(&api.list_criteria()?, cli.format),
        Commands::PartCriteria { part_id } => emit(&api.list_part_criteria(part_id)?, cli.format),
        Commands::PartFiles { part_id } => emit(&api.list_part_files(part_id)?, cli.format),
        Commands::Config => emit(std::slice::from_ref(api.config()), cli.format),
    }
}

fn emit<T: Serialize>(rows: &[T], format: OutputFormat) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}
