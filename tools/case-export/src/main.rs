//! # Case Export
//!
//! 演示导出工具 - 把内置演示定义展开成渲染变体，逐个写成 SVG 文件。
//!
//! ## 用法
//!
//! ```bash
//! # 在项目根目录使用 cargo 运行
//! cargo run -p case-export
//! cargo run -p case-export -- --out-dir demo-out
//! cargo run -p case-export -- list
//! cargo run -p case-export -- export --demo LinearGradient
//! cargo run -p case-export -- verify --out-dir demo-out
//!
//! # 或安装后直接使用
//! cargo install --path tools/case-export
//! exporter
//! exporter list
//! exporter export --demo LinearGradient
//! exporter verify
//! ```

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use svg_cases::demos::all_demos;
use svg_cases::{DemoDef, expand_def};

/// 导出的清单文件名
const MANIFEST_NAME: &str = "manifest.json";

#[derive(Parser)]
#[command(name = "exporter")]
#[command(about = "演示导出工具 - 把内置演示定义展开并写成 SVG 文件")]
#[command(version, author)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// 输出目录（默认：demo-out）
    #[arg(short, long, default_value = "demo-out", global = true)]
    out_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// 列出所有内置演示及其用例
    List,

    /// 导出渲染变体与清单
    Export {
        /// 只导出指定演示组（默认导出全部）
        #[arg(long)]
        demo: Option<String>,
    },

    /// 对比输出目录与当前演示定义
    Verify,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // 默认行为：导出全部演示
            if let Err(e) = export_demos(&cli.out_dir, None) {
                eprintln!("❌ 导出失败: {:#}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::List) => {
            if let Err(e) = list_demos() {
                eprintln!("❌ 列出失败: {:#}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Export { demo }) => {
            if let Err(e) = export_demos(&cli.out_dir, demo.as_deref()) {
                eprintln!("❌ 导出失败: {:#}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Verify) => {
            if let Err(e) = verify_output(&cli.out_dir) {
                eprintln!("❌ 验证失败: {:#}", e);
                std::process::exit(1);
            }
        }
    }
}

/// 装配演示定义，按需过滤
fn load_demos(filter: Option<&str>) -> anyhow::Result<Vec<DemoDef>> {
    let demos = all_demos().context("内置演示定义装配失败")?;
    match filter {
        None => Ok(demos),
        Some(name) => {
            let filtered: Vec<DemoDef> =
                demos.into_iter().filter(|d| d.def_name == name).collect();
            if filtered.is_empty() {
                bail!("没有名为 '{name}' 的演示组");
            }
            Ok(filtered)
        }
    }
}

/// 列出所有演示及其用例
fn list_demos() -> anyhow::Result<()> {
    let demos = load_demos(None)?;

    println!("📋 内置演示: {} 组", demos.len());
    println!();

    for def in &demos {
        let variants = expand_def(def);
        println!(
            "{} (<{}>, {} 个用例, {} 个变体)",
            def.def_name,
            def.component_tag,
            def.cases.len(),
            variants.len()
        );
        for case in def.cases.iter() {
            println!(
                "  - {} [{}] 阶段数: {} 键: {}",
                case.id,
                case.kind,
                case.stage_count(),
                case.key_set().join(", ")
            );
        }
    }

    Ok(())
}

/// 计算导出文件集合：相对路径 -> 文件内容
fn expected_files(demos: &[DemoDef]) -> anyhow::Result<BTreeMap<String, String>> {
    let mut files = BTreeMap::new();
    for def in demos {
        for variant in expand_def(def) {
            let mut markup = variant.root.to_markup();
            markup.push('\n');
            files.insert(format!("{}.svg", variant.slug()), markup);
        }
    }
    let manifest = serde_json::to_string_pretty(demos).context("清单序列化失败")?;
    files.insert(MANIFEST_NAME.to_string(), manifest + "\n");
    Ok(files)
}

/// 导出渲染变体与清单到输出目录
fn export_demos(out_dir: &Path, filter: Option<&str>) -> anyhow::Result<()> {
    let demos = load_demos(filter)?;
    println!("📦 导出演示: {} 组 -> {:?}", demos.len(), out_dir);

    fs::create_dir_all(out_dir).with_context(|| format!("创建输出目录失败: {out_dir:?}"))?;

    let files = expected_files(&demos)?;
    for (name, content) in &files {
        let path = out_dir.join(name);
        fs::write(&path, content).with_context(|| format!("写入失败: {path:?}"))?;
        println!("  + {} ({} bytes)", name, content.len());
    }

    println!();
    println!("✅ 导出完成！");
    println!("   文件数: {}", files.len());
    println!("   输出目录: {:?}", out_dir);

    Ok(())
}

/// 对比输出目录与当前演示定义
///
/// 报告三类不一致：缺失（应导出而不在磁盘）、过期（内容不同）、
/// 多余（磁盘上有而当前定义不再产出）。
fn verify_output(out_dir: &Path) -> anyhow::Result<()> {
    println!("🔍 验证输出目录: {:?}", out_dir);

    if !out_dir.exists() {
        bail!("输出目录不存在: {out_dir:?}");
    }

    let expected = expected_files(&load_demos(None)?)?;
    let mut errors = Vec::new();

    // 缺失 / 过期
    for (name, content) in &expected {
        let path = out_dir.join(name);
        match fs::read_to_string(&path) {
            Ok(on_disk) if &on_disk == content => {}
            Ok(_) => errors.push(format!("{name}: 内容过期")),
            Err(_) => errors.push(format!("{name}: 缺失")),
        }
    }

    // 多余
    for entry in WalkDir::new(out_dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if path.is_dir() {
            continue;
        }
        let name = path
            .strip_prefix(out_dir)?
            .to_string_lossy()
            .replace('\\', "/");
        let is_tracked = name.ends_with(".svg") || name == MANIFEST_NAME;
        if is_tracked && !expected.contains_key(&name) {
            errors.push(format!("{name}: 多余文件"));
        }
    }

    if errors.is_empty() {
        println!("✅ 验证通过: {} 个文件一致", expected.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  ✗ {error}");
        }
        bail!("{} 处不一致", errors.len());
    }
}
