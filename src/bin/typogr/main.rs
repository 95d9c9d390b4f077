//! Command-line interface for typogr
//!
//! Usage:
//!   typogr                         - Read HTML from stdin, write to stdout
//!   typogr `<input>`               - Process file(s), write to stdout
//!   typogr -i `<input>`            - Process file(s) in place
//!   typogr `<input>` `<output>`    - Write to a file, or a directory for several inputs
//!   typogr --list-pipelines        - List all available pipelines
//!
//! `<input>` may be a file, a directory (processed recursively) or a path
//! whose last component is a glob such as `site/*.html`.

mod files;

use anyhow::{bail, Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use files::{collect_inputs, InputFile};
use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::{Path, PathBuf};
use typogr::typogr::pipeline::{ExecutionError, ExecutionOutput, PipelineExecutor};
use typogr::typogr::settings::{Loader, TypogrConfig};
use typogr::typogr::transforms::Rule;

fn main() -> Result<()> {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_flag("verbose"));

    let settings = load_settings(&matches)?;
    let executor = PipelineExecutor::with_registry(settings.registry()?);

    if matches.get_flag("list-pipelines") {
        handle_list_pipelines_command(&executor);
        return Ok(());
    }

    let plan = match matches.get_one::<String>("rules") {
        Some(list) => Plan::Rules(Rule::parse_list(list)?),
        None => {
            let name = settings.cli.pipeline.clone();
            if !executor.registry().has(&name) {
                return Err(ExecutionError::PipelineNotFound(name).into());
            }
            Plan::Pipeline(name)
        }
    };

    let job = Job {
        executor,
        plan,
        force: settings.cli.force,
    };

    let inplace = matches.get_flag("inplace");
    match matches.get_one::<String>("input") {
        None if inplace => bail!("--inplace requires an input path"),
        None => job.handle_stdin(),
        Some(input) => {
            let output = matches.get_one::<String>("output").map(PathBuf::from);
            if inplace && output.is_some() {
                bail!("--inplace cannot be combined with an output path");
            }
            job.handle_files(input, output.as_deref(), inplace)
        }
    }
}

fn build_cli() -> Command {
    Command::new("typogr")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Typographic refinements for HTML: smart quotes, widow control, caps, ampersands and ordinals")
        .arg(
            Arg::new("input")
                .help("Input file, directory or glob (default: stdin)")
                .index(1),
        )
        .arg(
            Arg::new("output")
                .help("Output file, or directory when several files are processed")
                .index(2),
        )
        .arg(
            Arg::new("inplace")
                .long("inplace")
                .short('i')
                .help("Overwrite the input file(s) with the result")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .short('f')
                .help("Overwrite existing files without asking")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("pipeline")
                .long("pipeline")
                .short('p')
                .help("Pipeline name (e.g., 'typogrify', 'smartypants', 'tokens')")
                .conflicts_with("rules"),
        )
        .arg(
            Arg::new("rules")
                .long("rules")
                .short('r')
                .help("Comma separated rules to run in order (e.g., 'amp,caps,ord')"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Settings file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("list-pipelines")
                .long("list-pipelines")
                .help("List available pipelines")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline activity to stderr")
                .action(ArgAction::SetTrue),
        )
}

/// Log to stderr; `TYPOGR_LOG` takes precedence over `--verbose`
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("TYPOGR_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(io::stderr))
        .with(filter)
        .try_init();
}

fn load_settings(matches: &ArgMatches) -> Result<TypogrConfig> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("force") {
        loader = loader.set_override("cli.force", true)?;
    }
    if let Some(pipeline) = matches.get_one::<String>("pipeline") {
        loader = loader.set_override("cli.pipeline", pipeline.as_str())?;
    }
    loader.build().context("failed to load settings")
}

/// Handle the list-pipelines command
fn handle_list_pipelines_command(executor: &PipelineExecutor) {
    println!("Available pipelines:\n");

    for config in executor.list_configs() {
        println!("  {}", config.name);
        println!("    {}", config.description);
        println!();
    }
}

enum Plan {
    Pipeline(String),
    Rules(Vec<Rule>),
}

struct Job {
    executor: PipelineExecutor,
    plan: Plan,
    force: bool,
}

impl Job {
    fn render(&self, source: &str) -> Result<String> {
        match &self.plan {
            Plan::Rules(rules) => Ok(self.executor.execute_rules(rules, source)),
            Plan::Pipeline(name) => match self.executor.execute(name, source)? {
                ExecutionOutput::Html(html) => Ok(html),
                ExecutionOutput::Tokens(tokens) => Ok(serde_json::to_string_pretty(&tokens)?),
            },
        }
    }

    fn handle_stdin(&self) -> Result<()> {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .context("failed to read stdin")?;
        let rendered = self.render(&source)?;

        let mut stdout = io::stdout().lock();
        stdout.write_all(rendered.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn handle_files(&self, input: &str, output: Option<&Path>, inplace: bool) -> Result<()> {
        let inputs = collect_inputs(input)?;
        tracing::debug!(count = inputs.len(), input, "collected input files");

        let single_file = inputs.len() == 1 && Path::new(input).is_file();
        let stdin = io::stdin();
        let mut answers = stdin.lock();

        for file in &inputs {
            let source = fs::read_to_string(&file.path)
                .with_context(|| format!("failed to read {}", file.path.display()))?;
            let rendered = self.render(&source)?;

            let target = match (output, inplace) {
                (_, true) => file.path.clone(),
                (Some(output), false) => output_target(output, file, single_file),
                (None, false) => {
                    let mut stdout = io::stdout().lock();
                    stdout.write_all(rendered.as_bytes())?;
                    stdout.flush()?;
                    continue;
                }
            };

            if target.exists() && !self.force {
                let confirmed = confirm_overwrite(&mut answers, &mut io::stderr(), &target)?;
                if !confirmed {
                    eprintln!("  Cancelling action, file wasn't modified.");
                    continue;
                }
            }
            write_file(&target, &rendered)?;
        }

        Ok(())
    }
}

/// Where a processed file goes when an output path is given.
///
/// A single input file is written to `output` itself unless `output` is an
/// existing directory; otherwise the file keeps its path relative to the
/// input root under `output`.
fn output_target(output: &Path, file: &InputFile, single_file: bool) -> PathBuf {
    if single_file && !output.is_dir() {
        output.to_path_buf()
    } else {
        output.join(&file.relative)
    }
}

fn write_file(target: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(target, contents).with_context(|| format!("failed to write {}", target.display()))
}

/// Ask on `prompt` whether `path` may be overwritten. Only `y` or `yes`
/// (any case) confirms; end of input declines.
fn confirm_overwrite<R, W>(answers: &mut R, prompt: &mut W, path: &Path) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    write!(prompt, "Confirm: overwrite file ({})? ", path.display())?;
    prompt.flush()?;

    let mut answer = String::new();
    if answers.read_line(&mut answer)? == 0 {
        writeln!(prompt)?;
        return Ok(false);
    }
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ask(input: &str) -> (bool, String) {
        let mut answers = io::Cursor::new(input.as_bytes().to_vec());
        let mut prompt = Vec::new();
        let confirmed =
            confirm_overwrite(&mut answers, &mut prompt, Path::new("out/a.html")).unwrap();
        (confirmed, String::from_utf8(prompt).unwrap())
    }

    #[test]
    fn test_confirm_accepts_yes() {
        assert!(ask("y\n").0);
        assert!(ask("YES\n").0);
        assert!(ask("  yes  \n").0);
    }

    #[test]
    fn test_confirm_declines_everything_else() {
        assert!(!ask("n\n").0);
        assert!(!ask("\n").0);
        assert!(!ask("yep\n").0);
        assert!(!ask("").0);
    }

    #[test]
    fn test_confirm_prompt_text() {
        let (_, prompt) = ask("n\n");
        assert_eq!(prompt, "Confirm: overwrite file (out/a.html)? ");
    }

    #[test]
    fn test_output_target() {
        let file = InputFile {
            path: PathBuf::from("in/sub/a.html"),
            relative: PathBuf::from("sub/a.html"),
        };
        assert_eq!(
            output_target(Path::new("/nonexistent/out.html"), &file, true),
            PathBuf::from("/nonexistent/out.html")
        );
        assert_eq!(
            output_target(Path::new("/nonexistent/out"), &file, false),
            PathBuf::from("/nonexistent/out/sub/a.html")
        );
    }

    #[test]
    fn test_cli_definition() {
        build_cli().debug_assert();
    }
}
