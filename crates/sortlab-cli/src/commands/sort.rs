use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use serde::Serialize;
use sortlab_core::dataset::read_dataset;
use sortlab_core::TextSink;
use sortlab_engines::{run_algorithm, Algorithm, RunOptions, RunOutcome};

#[derive(Args, Debug)]
pub struct SortArgs {
    /// Input file containing the data to sort, one integer per line.
    #[arg(long, short = 'f')]
    pub file: PathBuf,
    /// Sorting algorithm to use.
    #[arg(long, short = 'a', value_enum)]
    pub algorithm: AlgorithmArg,
    /// Enable instructional trace output for the sorting algorithms.
    #[arg(long, short = 'i')]
    pub instruct: bool,
    /// Optional path for a JSON report of the run(s).
    #[arg(long)]
    pub out: Option<PathBuf>,
}

/// CLI-level algorithm selector. Parsing is exhaustive: any other name is
/// rejected by clap before dispatch, so no unrecognized algorithm can reach
/// the engines.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmArg {
    /// Merge sort only.
    Merge,
    /// Quick sort only.
    Quick,
    /// Heap sort only.
    Heap,
    /// All three engines, in the fixed order merge, quick, heap.
    All,
}

impl AlgorithmArg {
    fn selection(self) -> Vec<Algorithm> {
        match self {
            AlgorithmArg::Merge => vec![Algorithm::Merge],
            AlgorithmArg::Quick => vec![Algorithm::Quick],
            AlgorithmArg::Heap => vec![Algorithm::Heap],
            AlgorithmArg::All => Algorithm::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SortReport {
    file: String,
    input_length: usize,
    runs: Vec<RunEntry>,
}

#[derive(Debug, Serialize)]
struct RunEntry {
    algorithm: Algorithm,
    output_length: usize,
    steps: Option<u64>,
    elapsed_seconds: f64,
}

pub fn run(args: &SortArgs) -> Result<(), Box<dyn Error>> {
    let data = read_dataset(&args.file)?;
    let selection = args.algorithm.selection();

    let mut runs = Vec::new();
    for algorithm in selection {
        println!(
            "Running {} sort on {} data points...",
            algorithm.as_str(),
            data.len()
        );
        let outcome = run_one(algorithm, &data, args.instruct);
        report_outcome(algorithm, &outcome, args.instruct);
        runs.push(RunEntry {
            algorithm,
            output_length: outcome.sorted.len(),
            steps: outcome.steps,
            elapsed_seconds: outcome.elapsed_seconds,
        });
    }

    if let Some(out) = &args.out {
        let report = SortReport {
            file: args.file.display().to_string(),
            input_length: data.len(),
            runs,
        };
        write_json(out, &report)?;
    }
    Ok(())
}

fn run_one(algorithm: Algorithm, data: &[i64], instruct: bool) -> RunOutcome {
    if instruct {
        let mut sink = TextSink::stdout();
        run_algorithm(
            algorithm,
            data,
            RunOptions {
                trace: Some(&mut sink),
                count_steps: true,
            },
        )
    } else {
        run_algorithm(
            algorithm,
            data,
            RunOptions {
                trace: None,
                count_steps: true,
            },
        )
    }
}

fn report_outcome(algorithm: Algorithm, outcome: &RunOutcome, instruct: bool) {
    let label = capitalize(algorithm.as_str());
    if instruct {
        println!("Sorted Array: {:?}", outcome.sorted);
        println!("{}", algorithm.engine().summary_note());
    }
    if let Some(steps) = outcome.steps {
        println!("{label} Sort Steps: {steps}");
    }
    println!(
        "{label} Sort Time: {:.5} seconds\n",
        outcome.elapsed_seconds
    );
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}
