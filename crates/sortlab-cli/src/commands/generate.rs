use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Args;
use sortlab_core::dataset::{generate_dataset, write_dataset};
use sortlab_core::{derive_substream_seed, RngHandle};

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of data points per generated file.
    #[arg(long, short = 'd')]
    pub data: usize,
    /// Output file name; with --count > 1, an index suffix is appended.
    #[arg(long, short = 'o', default_value = "dataset.txt")]
    pub output: PathBuf,
    /// Master seed for deterministic generation.
    #[arg(long, default_value_t = 2024)]
    pub seed: u64,
    /// Number of dataset files to generate.
    #[arg(long, default_value_t = 1)]
    pub count: usize,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    for index in 0..args.count {
        // A single file uses the master seed directly; multiple files get
        // one derived substream each so any file can be regenerated alone.
        let seed = if args.count == 1 {
            args.seed
        } else {
            derive_substream_seed(args.seed, index as u64)
        };
        let mut rng = RngHandle::from_seed(seed);
        let dataset = generate_dataset(args.data, &mut rng);
        let path = output_path(&args.output, args.count, index);
        write_dataset(&path, &dataset)?;
        println!(
            "Dataset with {} data points has been saved to {}",
            args.data,
            path.display()
        );
    }
    Ok(())
}

fn output_path(base: &Path, count: usize, index: usize) -> PathBuf {
    if count == 1 {
        return base.to_path_buf();
    }
    let stem = base
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("dataset");
    let name = match base.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{stem}-{index}.{ext}"),
        None => format!("{stem}-{index}"),
    };
    base.with_file_name(name)
}
