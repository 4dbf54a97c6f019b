use std::fmt::Write as _;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, builder::PossibleValuesParser};
use dropnav_registry::{MenuGraph, MenuSource};
use dropnav_tui::{RunOptions, THEME_NAMES};
use dropnav_types::PanelStyle;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Nav bar with a nested dropdown menu, in the terminal.
#[derive(Parser, Debug)]
#[command(name = "dropnav", version, about)]
struct Cli {
    /// Menu file (YAML, or JSON by extension); defaults to DROPNAV_MENU, then
    /// the user config dir, then the built-in menu
    #[arg(long, value_name = "PATH")]
    menu: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_parser = PossibleValuesParser::new(THEME_NAMES))]
    theme: Option<String>,

    /// Draw named icons with ASCII glyphs
    #[arg(long)]
    ascii: bool,

    /// Write logs to this file while the TUI is running
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Override the panel transition duration
    #[arg(long, value_name = "MS")]
    duration_ms: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Validate the menu and print a panel summary
    Check,
}

/// Where log output goes.
enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
    Discard,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_target = match (&cli.command, cli.log_file.as_deref()) {
        (Some(Command::Check), _) => LogTarget::Stderr,
        (None, Some(path)) => LogTarget::File(path),
        (None, None) => LogTarget::Discard,
    };
    init_tracing(log_target)?;

    let source = MenuSource::resolve(cli.menu.clone());
    let graph = load_graph(&source, cli.duration_ms)?;

    if cli.command == Some(Command::Check) {
        print!("{}", check_report(&graph, &source));
        return Ok(());
    }

    info!(source = %source, panels = graph.len(), "starting dropnav");
    let options = RunOptions {
        theme: cli.theme,
        ascii_icons: cli.ascii,
    };
    dropnav_tui::run(Arc::new(graph), options).await
}

fn init_tracing(target: LogTarget<'_>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    // The TUI owns stdout/stderr once it starts, so logs go to a file or nowhere.
    let installed = match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = File::create(path).with_context(|| format!("failed to create log file {}", path.display()))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };
    installed.map_err(anyhow::Error::msg).context("failed to install tracing subscriber")
}

fn load_graph(source: &MenuSource, duration_ms: Option<u64>) -> Result<MenuGraph> {
    let graph = source.load().with_context(|| format!("failed to load menu from {source}"))?;
    match duration_ms {
        Some(ms) => graph
            .with_transition_duration(Duration::from_millis(ms))
            .context("invalid --duration-ms"),
        None => Ok(graph),
    }
}

fn style_name(style: PanelStyle) -> &'static str {
    match style {
        PanelStyle::Primary => "primary",
        PanelStyle::Secondary => "secondary",
    }
}

/// Human-readable summary of a validated menu.
fn check_report(graph: &MenuGraph, source: &MenuSource) -> String {
    let mut report = String::new();
    let _ = writeln!(report, "menu: {source}");
    let _ = writeln!(report, "root: {}", graph.root());
    let _ = writeln!(
        report,
        "transition: {} ms ({} / {})",
        graph.transition_duration().as_millis(),
        graph.classes().primary,
        graph.classes().secondary
    );
    for panel in graph.panels() {
        let targets: Vec<&str> = panel
            .entries
            .iter()
            .filter_map(|entry| entry.go_to_menu.as_ref().map(|target| target.as_str()))
            .collect();
        let _ = write!(
            report,
            "  {:<16} {:<9} {:>2} entries",
            panel.id.as_str(),
            style_name(panel.style),
            panel.entries.len()
        );
        if targets.is_empty() {
            let _ = writeln!(report);
        } else {
            let _ = writeln!(report, " -> {}", targets.join(", "));
        }
    }

    let unreachable = graph.unreachable_panels();
    if unreachable.is_empty() {
        let _ = writeln!(report, "ok: {} panels, all reachable", graph.len());
    } else {
        for id in &unreachable {
            warn!(panel = %id, "panel is not reachable from the root");
        }
        let names: Vec<&str> = unreachable.iter().map(|id| id.as_str()).collect();
        let _ = writeln!(report, "warning: unreachable panels: {}", names.join(", "));
    }
    report
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags_and_check_subcommand() {
        let cli = Cli::try_parse_from(["dropnav", "--menu", "menu.json", "--ascii", "--duration-ms", "120", "check"])
            .expect("valid arguments");
        assert_eq!(cli.menu, Some(PathBuf::from("menu.json")));
        assert!(cli.ascii);
        assert_eq!(cli.duration_ms, Some(120));
        assert_eq!(cli.command, Some(Command::Check));
    }

    #[test]
    fn rejects_unknown_themes() {
        assert!(Cli::try_parse_from(["dropnav", "--theme", "solarized"]).is_err());
        assert!(Cli::try_parse_from(["dropnav", "--theme", "ansi256"]).is_ok());
    }

    #[test]
    fn zero_duration_override_is_an_error() {
        assert!(load_graph(&MenuSource::Embedded, Some(0)).is_err());
        let graph = load_graph(&MenuSource::Embedded, Some(120)).expect("valid override");
        assert_eq!(graph.transition_duration(), Duration::from_millis(120));
    }

    #[test]
    fn check_report_lists_every_panel() {
        let graph = MenuGraph::from_embedded().expect("embedded menu");
        let report = check_report(&graph, &MenuSource::Embedded);
        assert!(report.contains("root: main"), "{report}");
        assert!(report.contains("-> settings, listtest"), "{report}");
        assert!(report.contains("sublisttest"), "{report}");
        assert!(report.contains("ok: 4 panels, all reachable"), "{report}");
    }

    #[test]
    fn installing_a_second_subscriber_is_reported() {
        // The first call may lose to another test; the second can never win.
        let _ = init_tracing(LogTarget::Discard);
        let err = init_tracing(LogTarget::Discard).expect_err("global subscriber already set");
        assert!(err.to_string().contains("tracing subscriber"), "{err:#}");
    }
}
