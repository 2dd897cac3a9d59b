mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{CliArgs, Command, Stage};
use fragnode_source::{fragment_shader, vertex_shader, HttpIncludeProvider, PassConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = CliArgs::parse();
    match args.command {
        Command::Assemble {
            config,
            stage,
            no_includes,
            define,
        } => {
            let mut pass = PassConfig::load(&config)
                .with_context(|| format!("loading pass {}", config.display()))?;
            tracing::info!(
                version = %pass.code.version,
                dialect = %pass.code.dialect,
                "pass loaded from {}",
                config.display()
            );

            if !no_includes {
                let mut provider = HttpIncludeProvider::new(&pass.includes);
                let report = pass.resolve(&mut provider);
                if !report.is_clean() {
                    tracing::warn!(
                        failed = report.failed.len(),
                        skipped = report.skipped.len(),
                        "some includes were omitted"
                    );
                }
            }
            pass.defines.extend(define);

            if matches!(stage, Stage::Vertex | Stage::Both) {
                print!("{}", vertex_shader(pass.code.version));
            }
            if stage == Stage::Both {
                println!("\n// ---- fragment ----");
            }
            if matches!(stage, Stage::Fragment | Stage::Both) {
                print!("{}", fragment_shader(&pass.code, &pass.defines));
            }
        }
    }
    Ok(())
}
