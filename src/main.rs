use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use idris::dataset::{generate, write_csv_file, GeneratorConfig};
use idris::scoring::{validate_engine_config, Engine, Overrides, ProjectInput};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a single investment project
    Score {
        /// Country name (unknown names resolve to the "Other / Unknown" profile)
        #[arg(long)]
        country: String,

        /// Sector name (unknown names resolve to the "Other" profile)
        #[arg(long)]
        sector: String,

        /// Asset class (e.g. "Green Bond", "Project Finance")
        #[arg(long)]
        asset_class: String,

        /// Investment amount in EUR (must be positive and finite)
        #[arg(long)]
        amount: f64,

        /// Analyst GHG intensity override (0-1)
        #[arg(long)]
        ghg: Option<f64>,

        /// Analyst gender equity override (0-1)
        #[arg(long)]
        gender: Option<f64>,

        /// Analyst governance score override (0-100)
        #[arg(long)]
        governance: Option<f64>,

        /// Emit the full result as JSON instead of the report
        #[arg(long)]
        json: bool,
    },
    /// Generate a synthetic scored-project dataset as CSV
    Generate {
        /// Number of records (default from config, 2000)
        #[arg(long)]
        count: Option<usize>,

        /// RNG seed for reproducible output (default from config, 42)
        #[arg(long)]
        seed: Option<u64>,

        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "idris")]
#[command(about = "Explainable impact scoring and EU regulatory classification", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/idris/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    let config_path = cli.config.map(PathBuf::from);
    let config = match idris::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate engine tuning at startup, reporting every violation.
    if let Err(errors) = validate_engine_config(&config.engine) {
        eprintln!("Engine config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let engine = Engine::with_builtin_tables(config.engine.clone());

    match cli.command {
        Commands::Score {
            country,
            sector,
            asset_class,
            amount,
            ghg,
            gender,
            governance,
            json,
        } => {
            let input = ProjectInput {
                country,
                sector,
                asset_class,
                investment_eur: amount,
                overrides: Overrides {
                    ghg,
                    gender,
                    governance,
                },
            };

            let result = match engine.score(&input) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("Invalid input: {}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if json {
                match serde_json::to_string_pretty(&result) {
                    Ok(s) => println!("{}", s),
                    Err(e) => {
                        eprintln!("Failed to serialize result: {}", e);
                        std::process::exit(EXIT_INPUT);
                    }
                }
            } else {
                let use_colors = idris::output::should_use_colors();
                println!(
                    "{}",
                    idris::output::format_report(
                        &input,
                        &result,
                        &engine.config().weights,
                        use_colors
                    )
                );
            }

            if cli.verbose {
                eprintln!("Scored in {:?}", start_time.elapsed());
            }
        }
        Commands::Generate {
            count,
            seed,
            output,
        } => {
            let generator_config = GeneratorConfig {
                count: count.unwrap_or(config.generate.count),
                seed: seed.unwrap_or(config.generate.seed),
            };

            if cli.verbose {
                eprintln!(
                    "Generating {} records (seed {})",
                    generator_config.count, generator_config.seed
                );
            }

            let records = generate(engine.tables(), engine.config(), &generator_config);

            if let Err(e) = write_csv_file(&records, &output) {
                eprintln!("Failed to write dataset: {}", e);
                std::process::exit(EXIT_INPUT);
            }

            println!("Wrote {} records to {}", records.len(), output.display());
            if cli.verbose {
                eprintln!("Done in {:?}", start_time.elapsed());
            }
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
