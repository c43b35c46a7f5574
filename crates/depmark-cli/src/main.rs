use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod config;
mod flows;
mod render;


use config::{ConfigOverrides, InstallerConfig};
use render::{current_output_style, render_section_header, render_status_line};

#[derive(Parser, Debug)]
#[command(name = "depmark")]
#[command(about = "Minimal dependency installer over directory markers", long_about = None)]
struct Cli {
    /// Config file path (defaults to depmark.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    catalog: Option<PathBuf>,
    #[arg(long)]
    requests: Option<PathBuf>,
    #[arg(long)]
    modules_root: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Install every requested package and its dependency closure
    Install,
    /// List installed modules
    List,
    /// Show the resolved configuration paths
    Doctor,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let overrides = ConfigOverrides {
        catalog: cli.catalog,
        requests: cli.requests,
        modules_root: cli.modules_root,
    };
    let config = InstallerConfig::load(cli.config.as_deref(), overrides)?;
    let style = current_output_style();

    match cli.command {
        Commands::Install => {
            if let Some(header) = render_section_header(style, "install") {
                println!("{header}");
            }
            flows::run_install_flow(&config, &mut |status, message| {
                println!("{}", render_status_line(style, status, &message));
            });
        }
        Commands::List => {
            for line in flows::run_list_flow(&config) {
                println!("{line}");
            }
        }
        Commands::Doctor => {
            for message in flows::run_doctor_flow(&config) {
                println!("{}", render_status_line(style, "step", &message));
            }
        }
    }

    Ok(())
}
