//! knowdex - Entry Point

use clap::{Parser, Subcommand};
use knowdex::model::{AppError, DocIndex};
use knowdex::persist::FileThemeStore;
use knowdex::state::{PageOptions, PageState, Theme, ThemeState};
use knowdex::surface::MemorySurface;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Searchable, collapsible index of knowledge pages
#[derive(Parser, Debug)]
#[command(name = "knowdex")]
#[command(version)]
#[command(about = "Search and browse an index of documentation sections")]
pub struct Args {
    /// What to do
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Initial color theme when none has been saved
    #[arg(long, global = true)]
    pub theme: Option<Theme>,

    /// Disable colors
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Subcommands.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Browse an index interactively
    View {
        /// Index document (.toml or .json)
        index: PathBuf,

        /// Sections to open, as printed on exit (e.g. "#setup,network")
        #[arg(long)]
        open: Option<String>,
    },

    /// Run one query and print the result
    Search {
        /// Index document (.toml or .json)
        index: PathBuf,

        /// Search text
        query: String,
    },

    /// Generate an index document from a directory of HTML pages
    Build {
        /// Page directory
        dir: PathBuf,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the first heading of every page as TSV
    Headings {
        /// Page directory
        dir: PathBuf,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = knowdex::config::load_config_with_precedence(args.config.clone())
            .map_err(AppError::from)?;
        let merged = knowdex::config::merge_config(config_file);
        let with_env = knowdex::config::apply_env_overrides(merged);
        knowdex::config::apply_cli_overrides(with_env, args.theme)
    };

    knowdex::logging::init(&config.log_file_path).map_err(AppError::from)?;

    info!(config = ?config, "Configuration loaded and resolved");

    let options = PageOptions {
        labels: config.labels.clone(),
        search_shortcut: config.search_shortcut,
    };

    match args.command {
        Command::View { index, open } => {
            let store = FileThemeStore::new(&config.theme_state_path);
            let theme = ThemeState::load(&store, config.theme);
            let mut page = PageState::new(DocIndex::load(&index)?, options).with_theme(theme);
            if let Some(fragment) = open {
                page.restore_fragment(&fragment);
            }

            let page = knowdex::view::run_viewer(page, Box::new(store)).map_err(AppError::from)?;
            if let Some(fragment) = page.fragment() {
                println!("{fragment}");
            }
        }
        Command::Search { index, query } => {
            let mut page = PageState::new(DocIndex::load(&index)?, options);
            let mut surface = MemorySurface::for_index(page.index());
            page.query_changed(&mut surface, &query);
            emit(None, &knowdex::view::format_plain(page.index(), &surface))?;
        }
        Command::Build { dir, output } => {
            let index = knowdex::builder::index_from_dir(&dir).map_err(AppError::from)?;
            emit(output.as_deref(), &index.to_toml_string()?)?;
        }
        Command::Headings { dir, output } => {
            let rows = knowdex::builder::heading_rows(&dir).map_err(AppError::from)?;
            emit(output.as_deref(), &knowdex::builder::headings_tsv(&rows))?;
        }
    }

    Ok(())
}

/// Write command output to `path`, or stdout when `None`.
fn emit(path: Option<&Path>, text: &str) -> Result<(), AppError> {
    match path {
        Some(path) => {
            std::fs::write(path, text)?;
            info!(path = %path.display(), "Output written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use serial_test::serial;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["knowdex", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["knowdex", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_subcommand_is_required() {
        let result = Args::try_parse_from(["knowdex"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_view_with_fragment() {
        let args = Args::parse_from(["knowdex", "view", "docs.toml", "--open", "#a,b"]);
        assert_eq!(
            args.command,
            Command::View {
                index: PathBuf::from("docs.toml"),
                open: Some("#a,b".to_string()),
            }
        );
        assert_eq!(args.theme, None);
        assert!(!args.no_color);
    }

    #[test]
    fn test_search_takes_index_and_query() {
        let args = Args::parse_from(["knowdex", "search", "docs.json", "net"]);
        assert_eq!(
            args.command,
            Command::Search {
                index: PathBuf::from("docs.json"),
                query: "net".to_string(),
            }
        );
    }

    #[test]
    fn test_build_output_short_flag() {
        let args = Args::parse_from(["knowdex", "build", "pages", "-o", "index.toml"]);
        assert_eq!(
            args.command,
            Command::Build {
                dir: PathBuf::from("pages"),
                output: Some(PathBuf::from("index.toml")),
            }
        );
    }

    #[test]
    fn test_headings_defaults_to_stdout() {
        let args = Args::parse_from(["knowdex", "headings", "pages"]);
        assert_eq!(
            args.command,
            Command::Headings {
                dir: PathBuf::from("pages"),
                output: None,
            }
        );
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::parse_from([
            "knowdex",
            "search",
            "docs.toml",
            "x",
            "--theme",
            "light",
            "--config",
            "/custom/config.toml",
            "--no-color",
        ]);
        assert_eq!(args.theme, Some(Theme::Light));
        assert_eq!(args.config, Some(PathBuf::from("/custom/config.toml")));
        assert!(args.no_color);
    }

    #[test]
    fn test_theme_invalid_rejects() {
        let result = Args::try_parse_from(["knowdex", "--theme", "monokai", "build", "pages"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    /// Clears an environment variable for the test and again on drop.
    struct EnvGuard(&'static str);

    impl EnvGuard {
        fn new(name: &'static str) -> Self {
            std::env::remove_var(name);
            EnvGuard(name)
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            std::env::remove_var(self.0);
        }
    }

    #[test]
    #[serial(knowdex_theme)]
    fn test_theme_flows_through_config_precedence_chain() {
        use knowdex::config::{apply_cli_overrides, apply_env_overrides, merge_config, ConfigFile};

        let _guard = EnvGuard::new("KNOWDEX_THEME");

        let config_file = ConfigFile {
            theme: Some(Theme::Dark),
            ..ConfigFile::default()
        };

        let merged = merge_config(Some(config_file));
        assert_eq!(merged.theme, Some(Theme::Dark));

        let with_env = apply_env_overrides(merged);
        assert_eq!(with_env.theme, Some(Theme::Dark));

        let with_cli = apply_cli_overrides(with_env, Some(Theme::Light));
        assert_eq!(
            with_cli.theme,
            Some(Theme::Light),
            "CLI theme should override all other sources"
        );
    }

    #[test]
    #[serial(knowdex_theme)]
    fn test_env_theme_sits_between_file_and_cli() {
        use knowdex::config::{apply_cli_overrides, apply_env_overrides, merge_config, ConfigFile};

        let _guard = EnvGuard::new("KNOWDEX_THEME");
        std::env::set_var("KNOWDEX_THEME", "light");

        let merged = merge_config(Some(ConfigFile {
            theme: Some(Theme::Dark),
            ..ConfigFile::default()
        }));
        let with_env = apply_env_overrides(merged);
        assert_eq!(with_env.theme, Some(Theme::Light));

        let with_cli = apply_cli_overrides(with_env, Some(Theme::Dark));
        assert_eq!(with_cli.theme, Some(Theme::Dark));
    }
}
