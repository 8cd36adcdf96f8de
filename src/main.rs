use anyhow::Result;
use caseconv::cli::output::{self, Conversion, OutputFormat};
use caseconv::{convert, parse, Config, Style};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "caseconv")]
#[command(version, about = "Convert identifiers between naming conventions", long_about = None)]
#[command(after_help = "Identifiers named like a subcommand go after `--`:\n  caseconv -- parse")]
struct Cli {
    /// Identifiers to convert (put `--` before one named `parse` or `styles`)
    #[arg(value_name = "TEXT")]
    texts: Vec<String>,

    /// Target style (camel, pascal, snake, dash, const, ...); see `caseconv styles`
    #[arg(short, long)]
    style: Option<Style>,

    /// Known acronym, may be repeated (e.g. -a HTTP -a API)
    #[arg(short, long = "acronym", value_name = "ACRONYM", global = true)]
    acronyms: Vec<String>,

    /// File with one acronym per line
    #[arg(long, value_name = "FILE", global = true)]
    acronyms_file: Option<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Show the words, detected case and separator of each identifier
    Parse {
        #[arg(value_name = "TEXT")]
        texts: Vec<String>,
    },
    /// List supported styles
    Styles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "caseconv", &mut io::stdout());
        return Ok(());
    }

    let colored = !cli.no_color;
    if !colored {
        colored::control::set_override(false);
    }

    let config = Config::load(cli.acronyms, cli.acronyms_file, cli.style)?;

    let rendered = match cli.command {
        Some(Commands::Styles) => output::render_styles(cli.format, colored)?,
        Some(Commands::Parse { texts }) => {
            ensure_input(&texts)?;
            let acronyms = config.acronyms()?;
            let mut parsed = Vec::with_capacity(texts.len());
            for text in texts {
                let result = parse(&text, Some(&acronyms[..]), false)?;
                parsed.push((text, result));
            }
            output::render_parsed(&parsed, cli.format, colored)?
        }
        None => {
            ensure_input(&cli.texts)?;
            let acronyms = config.acronyms()?;
            let style = config.default_style;
            let mut conversions = Vec::with_capacity(cli.texts.len());
            for text in cli.texts {
                let converted = convert(style, &text, &acronyms[..])?;
                conversions.push(Conversion {
                    input: text,
                    output: converted,
                });
            }
            output::render_conversions(style, &conversions, cli.format)?
        }
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn ensure_input(texts: &[String]) -> Result<()> {
    if texts.is_empty() {
        anyhow::bail!("No input specified. Use --help for usage information.");
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("caseconv=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
