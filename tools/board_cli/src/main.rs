use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;
use topics_board_core::board::{Board, BoardEvent};
use topics_board_core::config::{BoardConfig, OutputFormat};
use topics_board_core::view::render_text;

/// Drive a topics & suggestions board from a script of UI events.
///
/// Each input line is one JSON event, e.g.
/// `{"action":"vote","id":"s1","direction":"up"}`. The board view after the
/// last event is printed to stdout.
#[derive(Debug, Parser)]
#[command(name = "board_cli", version)]
struct Cli {
    /// Extra TOML config file layered over `board.toml`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// NDJSON event script; reads stdin when omitted.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Output format for the final view (defaults to config).
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Print each event outcome as JSON while applying.
    #[arg(long)]
    echo: bool,

    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() {
    if let Err(error) = run() {
        eprintln!("board_cli error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let config = BoardConfig::load(cli.config.as_deref()).context("failed to load config")?;
    let mut board = Board::from_config(&config).context("failed to build board")?;

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open script {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let applied = run_script(&mut board, input, cli.echo, &mut out)?;
    tracing::info!(applied, "script finished");

    let format = cli.format.map(OutputFormat::from).unwrap_or(config.output.format);
    write_view(&board, format, &mut out)?;
    Ok(())
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("BOARD_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

/// Applies every non-blank line of `input` as an event. Returns the number
/// of events applied; stops at the first malformed line.
fn run_script(
    board: &mut Board,
    input: impl BufRead,
    echo: bool,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut applied = 0;
    for (idx, line) in input.lines().enumerate() {
        let line = line.context("failed to read event input")?;
        if line.trim().is_empty() {
            continue;
        }
        let event = BoardEvent::from_json_line(&line)
            .with_context(|| format!("malformed event on line {}", idx + 1))?;
        let outcome = board.apply(event);
        if echo {
            writeln!(out, "{}", serde_json::to_string(&outcome)?)?;
        }
        applied += 1;
    }
    Ok(applied)
}

fn write_view(board: &Board, format: OutputFormat, out: &mut impl Write) -> anyhow::Result<()> {
    let view = board.view();
    match format {
        OutputFormat::Text => write!(out, "{}", render_text(&view))?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use topics_board_core::catalog::Catalog;
    use topics_board_core::query::SessionState;

    fn board() -> Board {
        Board::new(Catalog::sample(1_709_640_000_000), SessionState::default())
    }

    #[test]
    fn cli_flags_parse() {
        let cli = Cli::try_parse_from(["board_cli", "--format", "json", "--echo", "-v"]).unwrap();
        assert!(matches!(cli.format, Some(FormatArg::Json)));
        assert!(cli.echo && cli.verbose && !cli.quiet);
        assert!(Cli::try_parse_from(["board_cli", "-v", "-q"]).is_err());
    }

    #[test]
    fn script_skips_blank_lines_and_echoes_outcomes() {
        let script = "\n{\"action\":\"vote\",\"id\":\"s1\",\"direction\":\"up\"}\n\n{\"action\":\"submit\"}\n";
        let mut b = board();
        let mut out = Vec::new();
        let applied = run_script(&mut b, script.as_bytes(), true, &mut out).unwrap();

        assert_eq!(applied, 2);
        let echoed = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = echoed.lines().collect();
        assert!(lines[0].contains("\"outcome\":\"voted\""));
        assert!(lines[1].contains("\"outcome\":\"ignored\""));
    }

    #[test]
    fn malformed_line_reports_its_number() {
        let script = "{\"action\":\"set_query\",\"query\":\"x\"}\n{\"action\":\"explode\"}\n";
        let mut b = board();
        let err = run_script(&mut b, script.as_bytes(), false, &mut Vec::<u8>::new()).unwrap_err();
        assert!(format!("{err:#}").contains("malformed event on line 2"));
        assert_eq!(b.session().query, "x");
    }

    #[test]
    fn script_file_drives_board() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.ndjson");
        std::fs::write(
            &path,
            "{\"action\":\"set_topic_filter\",\"filter\":\"queued\"}\n",
        )
        .unwrap();
        let mut b = board();
        let file = BufReader::new(File::open(&path).unwrap());
        run_script(&mut b, file, false, &mut Vec::<u8>::new()).unwrap();

        let mut out = Vec::new();
        write_view(&b, OutputFormat::Json, &mut out).unwrap();
        let view: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(view["topic_count"], 1);
        assert_eq!(view["topics"][0]["id"], "t2");
    }
}
