use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::ops::Range;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use generic_sort::stable::{bubblesort, mergesort};
use generic_sort::{is_sorted_range, F32Total, F64Total, IdGenerator, SortError};
use sort_test_tools::patterns;

const PROGRAM_NAME: &str = "Generic Sorting Algorithm Demonstration";
const TEXT_INPUT_CURSOR: &str = ">";
const RESTART_COMMAND: &str = "restart";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ValueType {
    #[value(alias = "integer")]
    I32,
    #[value(alias = "long")]
    I64,
    #[value(alias = "float")]
    F32,
    #[value(alias = "double")]
    F64,
}

/// Times bubble sort and merge sort on copies of the same random sequence.
#[derive(Debug, Parser)]
#[command(name = "sort-demo", version)]
struct Cli {
    /// Number of random values per round. Prompted for when omitted.
    #[arg(short, long, value_parser = parse_len)]
    len: Option<usize>,

    /// Element type of the sequence. Prompted for when omitted.
    #[arg(short = 't', long, value_enum, ignore_case = true)]
    value_type: Option<ValueType>,

    /// Inclusive lower bound of the random values.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    lower_bound: i64,

    /// Exclusive upper bound of the random values.
    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    upper_bound: i64,

    /// Wrap every value with an id before sorting, ids show the original positions.
    #[arg(long)]
    keyed: bool,

    /// Print the sequence before and after each sort.
    #[arg(long)]
    print: bool,

    /// Run a single round instead of offering to restart.
    #[arg(long)]
    once: bool,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    #[error("lower bound {lower} must be less than upper bound {upper}")]
    EmptyBounds { lower: i64, upper: i64 },
    #[error("bounds [{lower}, {upper}) do not fit into {value_type:?}")]
    BoundsOverflow {
        lower: i64,
        upper: i64,
        value_type: ValueType,
    },
    #[error(transparent)]
    Sort(#[from] SortError),
}

fn parse_len(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(len) if len > 0 => Ok(len),
        _ => Err(format!("`{raw}` is not a positive integer")),
    }
}

/// Reads answers line by line, `None` once the input is exhausted.
struct Prompter<R> {
    input: R,
}

impl<R: BufRead> Prompter<R> {
    fn new(input: R) -> Self {
        Self { input }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        println!("\n{text}");
        print!("\n{TEXT_INPUT_CURSOR} ");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_owned()))
    }

    fn ask_len(&mut self) -> io::Result<Option<usize>> {
        loop {
            let Some(answer) = self.prompt(
                "Please enter a sequence length. The length should be a positive integer.",
            )?
            else {
                return Ok(None);
            };

            match parse_len(&answer) {
                Ok(len) => return Ok(Some(len)),
                Err(reason) => {
                    debug!(%reason, "rejected length");
                    print_invalid_input();
                }
            }
        }
    }

    fn ask_value_type(&mut self) -> io::Result<Option<ValueType>> {
        loop {
            let Some(answer) = self.prompt(
                "Please enter one of the following data types:\nInteger\nLong\nDouble\nFloat",
            )?
            else {
                return Ok(None);
            };

            match ValueType::from_str(&answer, true) {
                Ok(value_type) => return Ok(Some(value_type)),
                Err(reason) => {
                    debug!(%reason, "rejected data type");
                    print_invalid_input();
                }
            }
        }
    }

    fn ask_restart(&mut self) -> io::Result<bool> {
        let answer = self.prompt(&format!(
            "Would you like to use the program again?\nEnter \"{RESTART_COMMAND}\" to use the program again. Enter anything else to quit."
        ))?;

        Ok(answer.as_deref() == Some(RESTART_COMMAND))
    }
}

fn print_invalid_input() {
    println!("\nYour input was invalid. Please try again.");
}

fn seconds(elapsed: Duration) -> f64 {
    elapsed.as_millis() as f64 / 1000.0
}

fn timed<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let start = Instant::now();
    let res = f();
    (res, start.elapsed())
}

fn print_values<T: Display>(values: &[T]) {
    let line = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    println!("\n{line}");
}

fn report_sorted<T: Ord>(values: &[T]) -> Result<(), DemoError> {
    let sorted = match values.len() {
        0 => true,
        len => is_sorted_range(values, 0, len - 1)?,
    };
    println!("\nThe sequence is sorted: {sorted}");
    Ok(())
}

fn compare_sorts<T>(values: &[T], print: bool) -> Result<(), DemoError>
where
    T: Ord + Clone + Display,
{
    if print {
        print_values(values);
    }
    report_sorted(values)?;

    let sorts: [(&str, fn(&mut [T])); 2] = [
        ("bubble sort", bubblesort::sort),
        ("merge sort", mergesort::sort),
    ];

    for (sort_name, sort) in sorts {
        let mut copy = values.to_vec();
        let ((), elapsed) = timed(|| sort(copy.as_mut_slice()));
        debug!(sort_name, elapsed_us = elapsed.as_micros() as u64, "sorted copy");

        println!(
            "\nUsed {sort_name} to sort a copy of the sequence in {:.6} seconds.",
            seconds(elapsed)
        );
        if print {
            print_values(&copy);
        }
        report_sorted(&copy)?;
    }

    Ok(())
}

fn run_round_with<T>(
    cli: &Cli,
    ids: &mut IdGenerator,
    len: usize,
    make: impl FnOnce() -> Vec<T>,
) -> Result<(), DemoError>
where
    T: Ord + Clone + Display,
{
    let report_created = |elapsed: Duration| {
        println!(
            "\nCreated a sequence of length {len} and filled it with random numbers in {:.6} seconds.",
            seconds(elapsed)
        );
    };

    if cli.keyed {
        let (values, elapsed) = timed(|| ids.wrap_all(make()));
        report_created(elapsed);
        compare_sorts(&values, cli.print)
    } else {
        let (values, elapsed) = timed(make);
        report_created(elapsed);
        compare_sorts(&values, cli.print)
    }
}

fn int_range<T>(cli: &Cli, value_type: ValueType) -> Result<Range<T>, DemoError>
where
    T: TryFrom<i64>,
{
    let overflow = || DemoError::BoundsOverflow {
        lower: cli.lower_bound,
        upper: cli.upper_bound,
        value_type,
    };

    let lower = T::try_from(cli.lower_bound).map_err(|_| overflow())?;
    let upper = T::try_from(cli.upper_bound).map_err(|_| overflow())?;
    Ok(lower..upper)
}

fn run_round(
    cli: &Cli,
    ids: &mut IdGenerator,
    len: usize,
    value_type: ValueType,
) -> Result<(), DemoError> {
    info!(len, ?value_type, keyed = cli.keyed, "starting round");

    let (lower, upper) = (cli.lower_bound, cli.upper_bound);
    // Huge integer bounds can collapse into the same float.
    let float_bounds_empty = match value_type {
        ValueType::F32 => lower as f32 >= upper as f32,
        ValueType::F64 => lower as f64 >= upper as f64,
        ValueType::I32 | ValueType::I64 => false,
    };
    if float_bounds_empty {
        return Err(DemoError::EmptyBounds { lower, upper });
    }

    match value_type {
        ValueType::I32 => {
            let range = int_range::<i32>(cli, value_type)?;
            run_round_with(cli, ids, len, || patterns::random_uniform(len, range))
        }
        ValueType::I64 => {
            let range = int_range::<i64>(cli, value_type)?;
            run_round_with(cli, ids, len, || patterns::random_uniform(len, range))
        }
        ValueType::F32 => run_round_with(cli, ids, len, || {
            patterns::random_uniform(len, lower as f32..upper as f32)
                .into_iter()
                .map(F32Total)
                .collect()
        }),
        ValueType::F64 => run_round_with(cli, ids, len, || {
            patterns::random_uniform(len, lower as f64..upper as f64)
                .into_iter()
                .map(F64Total)
                .collect()
        }),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<(), DemoError> {
    init_tracing();
    let cli = Cli::parse();

    if cli.lower_bound >= cli.upper_bound {
        return Err(DemoError::EmptyBounds {
            lower: cli.lower_bound,
            upper: cli.upper_bound,
        });
    }

    println!("\nWelcome to the {PROGRAM_NAME} program!\nThis program compares sorting algorithms.");
    debug!(seed = patterns::random_init_seed(), "random values seeded");

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock());
    // Ids keep counting across rounds.
    let mut ids = IdGenerator::new();

    loop {
        let len = match cli.len {
            Some(len) => len,
            None => match prompter.ask_len()? {
                Some(len) => len,
                None => break,
            },
        };

        let value_type = match cli.value_type {
            Some(value_type) => value_type,
            None => match prompter.ask_value_type()? {
                Some(value_type) => value_type,
                None => break,
            },
        };

        run_round(&cli, &mut ids, len, value_type)?;

        if cli.once || !prompter.ask_restart()? {
            break;
        }
    }

    println!("\nThank you for using the {PROGRAM_NAME} program!\nGoodbye.");
    Ok(())
}
