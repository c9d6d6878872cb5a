//! # xtask - 开发辅助工具
//!
//! 提供本地质量门禁与开发辅助命令。
//!
//! ## 命令
//!
//! - `check-all`: 运行 fmt、clippy、test
//! - `cov-cases`: 运行 svg-cases 覆盖率
//! - `defs-check`: 检查所有内置演示定义（引用完整性、覆盖键、色标）

use std::process::ExitCode;

use xshell::{Shell, cmd};

use svg_cases::demos::all_demos;
use svg_cases::{DiagnosticResult, analyze_def, expand_def};

fn ensure_cargo_llvm_cov_available(sh: &Shell) -> anyhow::Result<()> {
    let status = cmd!(sh, "cargo llvm-cov --version").quiet().run();
    match status {
        Ok(_) => Ok(()),
        Err(_) => anyhow::bail!(
            "cargo llvm-cov 不可用。\n\
请先安装：\n\
  - cargo install cargo-llvm-cov\n\
  - rustup component add llvm-tools-preview\n\
然后重试。"
        ),
    }
}

fn main() -> ExitCode {
    if let Err(e) = real_main() {
        eprintln!("xtask error: {e:#}");
        return ExitCode::from(1);
    }
    ExitCode::from(0)
}

fn real_main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let sub = args.next().unwrap_or_else(|| "help".to_string());
    let sh = Shell::new()?;

    match sub.as_str() {
        "check-all" => {
            eprintln!("\n==> cargo fmt --all -- --check");
            cmd!(sh, "cargo fmt --all -- --check").run()?;

            eprintln!("\n==> cargo clippy --workspace --all-targets");
            cmd!(sh, "cargo clippy --workspace --all-targets").run()?;

            eprintln!("\n==> cargo test --workspace");
            cmd!(sh, "cargo test --workspace").run()?;
        }
        "cov-cases" => {
            ensure_cargo_llvm_cov_available(&sh)?;

            cmd!(sh, "cargo llvm-cov -p svg-cases --all-features --html").run()?;

            eprintln!("\nCoverage HTML: target/llvm-cov/html/index.html");
        }
        "defs-check" => {
            let json = args.next().as_deref() == Some("--json");
            defs_check(json)?;
        }
        "help" | "-h" | "--help" => {
            print_help();
        }
        other => anyhow::bail!("unknown xtask subcommand: {other}"),
    }

    Ok(())
}

fn print_help() {
    eprintln!(
        r#"xtask - 开发辅助工具

USAGE:
  cargo xtask <command>

COMMANDS:
  check-all    运行 fmt、clippy、test 门禁检查
  cov-cases    运行 svg-cases 覆盖率报告
  defs-check   检查所有内置演示定义

DEFS-CHECK:
  cargo xtask defs-check [--json]

  检查内容：
    - 效果元素的 url(#id) 引用是否都有定义
    - 用例覆盖键是否是定义元素的已知属性
    - 色标 offset 是否合法

  --json：以 JSON 输出检查摘要
"#
    );
}

//=============================================================================
// defs-check 命令实现
//=============================================================================

/// 执行演示定义检查
fn defs_check(json: bool) -> anyhow::Result<()> {
    let demos = all_demos()?;

    let mut total = DiagnosticResult::new();
    let mut summaries = Vec::new();

    for def in &demos {
        let result = analyze_def(def);
        let variant_count = expand_def(def).len();

        if json {
            summaries.push(serde_json::json!({
                "def_name": def.def_name,
                "cases": def.cases.len(),
                "variants": variant_count,
                "errors": result.error_count(),
                "warnings": result.warn_count(),
                "diagnostics": result
                    .diagnostics
                    .iter()
                    .map(|d| d.to_string())
                    .collect::<Vec<_>>(),
            }));
        } else {
            println!(
                "{}: {} 个用例, {} 个变体",
                def.def_name,
                def.cases.len(),
                variant_count
            );
            for diagnostic in &result.diagnostics {
                println!("  {diagnostic}");
            }
        }

        total.merge(result);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summaries)?);
    } else {
        println!();
        println!(
            "共 {} 组演示，{} 个错误，{} 个警告",
            demos.len(),
            total.error_count(),
            total.warn_count()
        );
    }

    if total.has_errors() {
        anyhow::bail!("演示定义检查未通过: {} 个错误", total.error_count());
    }
    Ok(())
}
