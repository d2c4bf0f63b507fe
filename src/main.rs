//! Command-line front end for the VRPD instance generator.

use clap::{Args, Parser, Subcommand};
use log::{error, info};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use vrpd_gen::manage::{count_txt_files, delete_txt_files, move_txt_files};
use vrpd_gen::utils::{format_config, save_instance};
use vrpd_gen::{BatchConfig, BatchGenerator, Config, InstanceSampler};

#[derive(Parser)]
#[command(name = "vrpd-gen")]
#[command(version)]
#[command(about = "Synthetic instance generator for vehicle routing with drones")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON configuration file; unset fields keep their defaults
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Random seed; a fresh one is drawn when omitted
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(flatten)]
    overrides: Overrides,
}

/// Per-parameter overrides applied on top of the configuration file.
#[derive(Args)]
struct Overrides {
    /// Number of customers
    #[arg(long, global = true)]
    customers: Option<usize>,

    /// Number of trucks
    #[arg(long, global = true)]
    trucks: Option<usize>,

    /// Number of drones
    #[arg(long, global = true)]
    drones: Option<usize>,

    /// Map side length in meters
    #[arg(long, global = true)]
    map_size: Option<f64>,

    /// Drone endurance in seconds
    #[arg(long, global = true)]
    endurance: Option<f64>,

    /// Probability of sampling a customer near the depot
    #[arg(long, global = true)]
    p_near: Option<f64>,

    /// Probability of light demand inside the drone radius
    #[arg(long, global = true)]
    p_light_near: Option<f64>,

    /// Probability of light demand outside the drone radius
    #[arg(long, global = true)]
    p_light_far: Option<f64>,
}

impl Overrides {
    fn apply(&self, mut config: Config) -> Config {
        if let Some(n) = self.customers {
            config.num_customers = n;
        }
        if let Some(n) = self.trucks {
            config.num_trucks = n;
        }
        if let Some(n) = self.drones {
            config.num_drones = n;
        }
        if let Some(size) = self.map_size {
            config.map_size = size;
        }
        if let Some(seconds) = self.endurance {
            config.drone_endurance = seconds;
        }
        if let Some(p) = self.p_near {
            config.p_near = p;
        }
        if let Some(p) = self.p_light_near {
            config.p_light_near = p;
        }
        if let Some(p) = self.p_light_far {
            config.p_light_far = p;
        }
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a single instance file
    Generate {
        /// Output file
        #[arg(short, long, default_value = "instance.txt")]
        output: PathBuf,
    },

    /// Generate numbered instance files `<prefix>.<index>.txt`
    Batch {
        /// Output directory
        #[arg(short, long, default_value = "data")]
        dir: PathBuf,

        /// File name prefix
        #[arg(short, long, default_value = "20.17")]
        prefix: String,

        /// Index of the first file
        #[arg(long, default_value = "1")]
        start: u64,

        /// Number of files
        #[arg(short = 'n', long, default_value = "20")]
        count: u64,
    },

    /// Delete every txt file in a data directory
    Clean {
        /// Data directory
        #[arg(short, long, default_value = "data")]
        dir: PathBuf,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Move every txt file from a data directory into another directory
    Archive {
        /// Data directory
        #[arg(short, long, default_value = "data")]
        dir: PathBuf,

        /// Destination directory
        #[arg(short, long)]
        target: PathBuf,

        /// Replace files that already exist in the destination
        #[arg(long)]
        overwrite: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Generate { ref output } => {
            let mut sampler = build_sampler(&cli)?;
            let instance = sampler.generate()?;
            save_instance(&instance, output)?;

            let config = sampler.config();
            info!("Instance saved to: {}", output.display());
            info!(
                "{}",
                instance
                    .statistics(config.drone_radius(), config.light_max_demand)
                    .format()
            );
        }
        Commands::Batch {
            ref dir,
            ref prefix,
            start,
            count,
        } => {
            let sampler = build_sampler(&cli)?;
            let batch = BatchConfig::new(dir, prefix, start, count);
            BatchGenerator::new(sampler, batch).run()?;
        }
        Commands::Clean { ref dir, yes } => {
            let count = count_txt_files(dir)?;
            if count == 0 {
                info!("No txt files to delete in {}", dir.display());
                return Ok(());
            }
            let question = format!("Delete {} txt files in {}?", count, dir.display());
            if yes || confirm(&question)? {
                delete_txt_files(dir)?;
            } else {
                info!("Delete cancelled");
            }
        }
        Commands::Archive {
            ref dir,
            ref target,
            overwrite,
            yes,
        } => {
            let count = count_txt_files(dir)?;
            if count == 0 {
                info!("No txt files to move in {}", dir.display());
                return Ok(());
            }
            let question = format!(
                "Move {} txt files from {} to {}?",
                count,
                dir.display(),
                target.display()
            );
            if yes || confirm(&question)? {
                let report = move_txt_files(dir, target, overwrite)?;
                if report.skipped > 0 {
                    info!("{} files skipped (already in target)", report.skipped);
                }
            } else {
                info!("Move cancelled");
            }
        }
    }

    Ok(())
}

fn build_sampler(cli: &Cli) -> Result<InstanceSampler, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::new(),
    };
    let config = cli.overrides.apply(config);

    let sampler = InstanceSampler::new(config, cli.seed)?;
    info!("{}", format_config(sampler.config()));
    info!("Seed: {}", sampler.seed());

    Ok(sampler)
}

fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    info!("Loading configuration from: {}", path.display());
    Ok(Config::from_json_file(path)?)
}

fn confirm(question: &str) -> io::Result<bool> {
    print!("{} (y/n): ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
