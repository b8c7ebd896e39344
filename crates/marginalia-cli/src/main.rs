//! marginalia - static site builder for plain-text journals

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use marginalia_config::Config;
use marginalia_engine::{SiteLayout, build_site};

#[derive(Parser, Debug)]
#[command(name = "marginalia")]
#[command(version, about = "Build a static site from plain-text pages", long_about = None)]
#[command(after_help = "EXAMPLES:
    marginalia                          Build using ./marginalia.toml or defaults
    marginalia --content notes -q       Build from ./notes, warnings only
    marginalia --config site.toml       Use another config file")]
struct Cli {
    /// Config file (defaults to ./marginalia.toml when present)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Source directory; each subdirectory is a section of pages
    #[arg(long, value_name = "DIR")]
    content: Option<PathBuf>,

    /// Output directory
    #[arg(long, value_name = "DIR")]
    public: Option<PathBuf>,

    /// Directory of files copied verbatim into the output
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,

    /// Only log warnings and errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let layout = layout_for(config, cli);
    log::info!(
        "Building {} into {}",
        layout.content_dir.display(),
        layout.public_dir.display()
    );

    let report = build_site(&layout).context("site build failed")?;
    log::info!(
        "Built {} pages in {} sections, copied {} assets",
        report.pages,
        report.sections,
        report.assets
    );
    log::info!(
        "Site built in {:.3} ms",
        report.elapsed.as_secs_f64() * 1000.0
    );
    Ok(())
}

/// An explicit `--config` must exist; the implicit `./marginalia.toml` may not.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let loaded = match &cli.config {
        Some(path) => Some(
            Config::load_from_path(path)?
                .with_context(|| format!("config file {} not found", path.display()))?,
        ),
        None => Config::load()?,
    };

    Ok(match loaded {
        Some(config) => {
            log::info!("Loaded config");
            config
        }
        None => {
            log::info!(
                "No {} found, using defaults",
                Config::config_path().display()
            );
            Config::default()
        }
    })
}

/// Command-line flags override config file values.
fn layout_for(config: Config, cli: &Cli) -> SiteLayout {
    SiteLayout {
        content_dir: cli.content.clone().unwrap_or(config.content_dir),
        public_dir: cli.public.clone().unwrap_or(config.public_dir),
        asset_dir: cli.assets.clone().unwrap_or(config.asset_dir),
        index_section: config.index_section,
        index_title: config.index_title,
        site_name: config.site_name,
        stylesheet: config.stylesheet,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::try_parse_from(["marginalia"]).unwrap();
        let layout = layout_for(Config::default(), &cli);

        assert_eq!(layout.content_dir, PathBuf::from("./content"));
        assert_eq!(layout.public_dir, PathBuf::from("./public"));
        assert_eq!(layout.asset_dir, PathBuf::from("./assets"));
        assert_eq!(layout.index_section, "posts");
        assert!(!cli.quiet);
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "marginalia",
            "--content",
            "notes",
            "--public",
            "out",
            "-q",
        ])
        .unwrap();
        let config = Config {
            content_dir: PathBuf::from("/from/config"),
            asset_dir: PathBuf::from("/config/assets"),
            site_name: Some("example.org".to_string()),
            ..Config::default()
        };

        let layout = layout_for(config, &cli);

        assert_eq!(layout.content_dir, PathBuf::from("notes"));
        assert_eq!(layout.public_dir, PathBuf::from("out"));
        assert_eq!(layout.asset_dir, PathBuf::from("/config/assets"));
        assert_eq!(layout.site_name.as_deref(), Some("example.org"));
        assert!(cli.quiet);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let cli =
            Cli::try_parse_from(["marginalia", "--config", "/no/such/marginalia.toml"]).unwrap();
        let err = load_config(&cli).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
