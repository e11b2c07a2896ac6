use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use rust_gauss::{frac, Fraction, Matrix, MatrixError, NumberFormat};

type Value = i128;

/// Sample systems, one per line, rows separated by `;`.
const PREDEFINED: [&str; 10] = [
    "3 2 -3; -2 8 4",
    "1 1 2 9; 2 4 -3 1; 3 6 -5 0",
    "0 1 8 0 0 4; 0 0 0 1 0 3; 0 0 0 0 1 1",
    "1 2 3 4; 0 1 5 6; 0 0 1 7",
    "0 0 -2 0 7 12; 2 4 -10 6 12 28; 2 4 -5 6 -5 -1",
    "1 0 0 4 -1; 0 1 0 2 6; 0 0 1 3 2",
    "1 6 0 0 4 -2; 0 0 1 0 3 1; 0 0 0 1 5 2; 0 0 0 0 0 0",
    "1 0 0 0; 0 1 2 0; 0 0 0 1",
    "1 2 3 4 1; 0 0 1 -1 1; 0 0 0 1 4",
    "3 5 1 2 1; 2 -4 3 7 2; 4 14 -1 -3 0; 13 7 9 20 7",
];

#[derive(Parser)]
#[clap(name = "rust-gauss", version, about = "Exact Gaussian elimination on rational matrices")]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Thousands separator used when printing values
    #[clap(long, value_enum, default_value = "invariant", global = true)]
    grouping: Grouping,

    /// Only print the matrix before and after elimination
    #[clap(long, global = true)]
    no_steps: bool,

    /// Disable colored output
    #[clap(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Eliminate a set of predefined systems
    Predefined,
    /// Eliminate a randomly generated system
    Random {
        /// Smallest number of equations and variables
        #[clap(long, default_value_t = 1)]
        min_size: usize,
        /// Upper bound (exclusive) for the number of equations and variables
        #[clap(long, default_value_t = 10)]
        max_size: usize,
        /// Smallest coefficient
        #[clap(long, default_value_t = 1, allow_hyphen_values = true)]
        min_value: Value,
        /// Upper bound (exclusive) for the coefficients
        #[clap(long, default_value_t = 7, allow_hyphen_values = true)]
        max_value: Value,
        /// Seed for reproducible systems
        #[clap(long)]
        seed: Option<u64>,
    },
    /// Print the results of some fraction operations
    Fractions,
    /// Eliminate a system given as text, e.g. "1 1 2 9; 2 4 -3 1; 3 6 -5 0"
    Solve {
        matrix: String,
    },
}

#[derive(Copy, Clone, ValueEnum)]
enum Grouping {
    Invariant,
    None,
    German,
    Swiss,
}

impl From<Grouping> for NumberFormat {
    fn from(grouping: Grouping) -> Self {
        match grouping {
            Grouping::Invariant => NumberFormat::INVARIANT,
            Grouping::None => NumberFormat::NONE,
            Grouping::German => NumberFormat::GERMAN,
            Grouping::Swiss => NumberFormat::SWISS,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("Empty range {min}..{max} for the {what}")]
    EmptyRange { what: &'static str, min: String, max: String },
}

/// Settings shared by every printed elimination.
struct Printer {
    format: NumberFormat,
    steps: bool,
}

impl Printer {
    fn eliminate(&self, mut matrix: Matrix<Value>) {
        println!("\n\n\n{}", heading(&matrix, "BEFORE ELIMINATION").yellow());
        println!("{}", matrix.render(self.format));

        if self.steps {
            matrix.eliminate_observed(|column: usize, state: &Matrix<Value>| {
                let title = heading(state, &format!("AFTER COLUMN {}", column + 1));
                println!("\n{}", title.bright_black());
                println!("{}", state.render(self.format).bright_black());
            });
        } else {
            matrix.eliminate();
        }

        println!("\n{}", heading(&matrix, "AFTER ELIMINATION").green());
        println!("{}", matrix.render(self.format));
    }
}

fn heading(matrix: &Matrix<Value>, stage: &str) -> String {
    let plural = |count: usize| if count == 1 { "" } else { "S" };
    format!(
        "*** {} EQUATION{}, {} VARIABLE{}, {} ***",
        matrix.nr_equations(),
        plural(matrix.nr_equations()),
        matrix.nr_variables(),
        plural(matrix.nr_variables()),
        stage,
    )
}

fn predefined(printer: &Printer) -> Result<(), CliError> {
    println!("*** PREDEFINED ELIMINATION TEST ***");

    for text in PREDEFINED.iter() {
        printer.eliminate(text.parse()?);
    }

    Ok(())
}

fn random(
    printer: &Printer,
    sizes: (usize, usize),
    values: (Value, Value),
    seed: Option<u64>,
) -> Result<(), CliError> {
    if sizes.0 >= sizes.1 {
        return Err(CliError::EmptyRange { what: "size", min: sizes.0.to_string(), max: sizes.1.to_string() });
    }
    if values.0 >= values.1 {
        return Err(CliError::EmptyRange { what: "values", min: values.0.to_string(), max: values.1.to_string() });
    }

    println!("*** RANDOM ELIMINATION TEST ***");

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let equations = rng.gen_range(sizes.0..sizes.1);
    let variables = rng.gen_range(sizes.0..sizes.1);

    let mut matrix = Matrix::new(equations, variables);
    for row in 0..equations {
        for column in 0..=variables {
            matrix.set(row, column, Fraction::from(rng.gen_range(values.0..values.1)));
        }
    }

    printer.eliminate(matrix);

    Ok(())
}

fn fractions(format: NumberFormat) {
    println!("*** FRACTION TEST ***");

    let show = |f: Fraction<Value>| f.display(format).to_string();
    let f1: Fraction<Value> = frac!(5);
    let f2: Fraction<Value> = frac!(-5);
    let f3: Fraction<Value> = frac!(5, 1);
    let f4: Fraction<Value> = frac!(-5, 1);
    let f5: Fraction<Value> = frac!(5, -1);
    let f6: Fraction<Value> = frac!(5, 2);

    println!("{} == {}: {}", show(f1), show(f2), f1 == f2);
    println!("{} == -{}: {}", show(f1), show(f2), f1 == -f2);
    println!("{} == {}: {}", show(f1), show(f3), f1 == f3);
    println!("{} == {}: {}", show(f2), show(f4), f2 == f4);
    println!("{} == {}: {}", show(f2), show(f5), f2 == f5);

    for &(a, b) in &[(f1, f3), (f1, f2), (f1, f6)] {
        println!("{} + {}: {}", show(a), show(b), show(a + b));
        println!("{} - {}: {}", show(a), show(b), show(a - b));
    }
    println!("{} * {}: {}", show(f1), show(f6), show(f1 * f6));
    match f1.divide(f6) {
        Ok(quotient) => println!("{} / {}: {}", show(f1), show(f6), show(quotient)),
        Err(error) => println!("{} / {}: {}", show(f1), show(f6), error),
    }

    for &(numerator, denominator) in &[(17, 18), (225, 15), (-99, -18), (1_234_567, 1_000)] {
        match Fraction::<Value>::new(numerator, denominator) {
            Ok(f) => println!("{}/{} = {} ~ {}", numerator, denominator, show(f), f.to_f64()),
            Err(error) => println!("{}/{}: {}", numerator, denominator, error),
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let printer = Printer { format: cli.grouping.into(), steps: !cli.no_steps };

    match cli.command {
        Command::Predefined => predefined(&printer),
        Command::Random { min_size, max_size, min_value, max_value, seed } => {
            random(&printer, (min_size, max_size), (min_value, max_value), seed)
        }
        Command::Fractions => {
            fractions(printer.format);
            Ok(())
        }
        Command::Solve { matrix } => {
            printer.eliminate(matrix.parse()?);
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(error) = run(cli) {
        eprintln!("{} {}", "error:".red(), error);
        std::process::exit(1);
    }
}
