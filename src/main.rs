use clap::Parser;
use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use tree_diagram::data_gen::{self, Distribution, GenConfig};
use tree_diagram::report::{DEFAULT_MAX_DEPTH, ReportConfig, render_report};
use tree_diagram::{Result, Value, input};

const PROMPT: &str = "Enter integers (finish with a non-number): ";

/// Draws a binary search tree and a max-heap built from the same integers.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Opts {
    /// Deepest binary search tree that is still drawn.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Generate this many random values instead of reading stdin.
    #[arg(long, value_name = "COUNT")]
    random: Option<usize>,

    #[arg(long, value_enum, default_value_t = Distribution::Uniform)]
    distribution: Distribution,

    #[arg(long, default_value_t = -99, allow_negative_numbers = true)]
    min: Value,

    #[arg(long, default_value_t = 99, allow_negative_numbers = true)]
    max: Value,

    /// Seed for reproducible random values.
    #[arg(long)]
    seed: Option<u64>,

    /// Do not prompt even when stdin is a terminal.
    #[arg(long)]
    no_prompt: bool,
}

impl Opts {
    fn gen_config(&self) -> Option<GenConfig> {
        self.random.map(|count| GenConfig {
            count,
            distribution: self.distribution,
            min: self.min,
            max: self.max,
            seed: self.seed,
        })
    }

    fn report_config(&self) -> ReportConfig {
        ReportConfig {
            max_depth: self.max_depth,
        }
    }
}

fn read_stdin(prompt: bool) -> Result<Vec<Value>> {
    let stdin = io::stdin();
    if prompt && stdin.is_terminal() {
        let mut stderr = io::stderr();
        write!(stderr, "{PROMPT}")?;
        stderr.flush()?;
    }
    input::read_values(stdin.lock())
}

/// Parses command-line options. Usage errors, `--help` and `--version` are
/// printed here and yield `None`; the process still exits with status 0.
fn parse_opts<I, T>(args: I) -> Option<Opts>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Opts::try_parse_from(args) {
        Ok(opts) => Some(opts),
        Err(e) => {
            if let Err(io_err) = e.print() {
                log::error!("{io_err}");
            }
            None
        }
    }
}

fn run<W: Write>(opts: &Opts, out: &mut W) -> Result<()> {
    let values = match opts.gen_config() {
        Some(config) => data_gen::generate(&config)?,
        None => read_stdin(!opts.no_prompt)?,
    };
    log::info!("read {} values", values.len());

    out.write_all(render_report(&values, &opts.report_config()).as_bytes())?;
    out.flush()?;
    Ok(())
}

fn main() {
    pretty_env_logger::init();

    let Some(opts) = parse_opts(std::env::args_os()) else {
        return;
    };
    log::debug!("{opts:?}");

    if let Err(e) = run(&opts, &mut io::stdout().lock()) {
        log::error!("{e}");
    }
}
