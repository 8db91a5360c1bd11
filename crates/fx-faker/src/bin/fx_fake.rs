//! CLI for printing fake values.
//!
//! # Usage
//!
//! ```bash
//! # Three full names from a fixed seed
//! cargo run -p fx-faker --features cli --bin fx-fake -- name.full -n 3 --seed 42
//!
//! # A raw dataset key
//! cargo run -p fx-faker --features cli --bin fx-fake -- --key address.city
//!
//! # A template, resolving bare placeholders against a subject
//! cargo run -p fx-faker --features cli --bin fx-fake -- --template "#{first_name} #{last_name}" --subject name
//!
//! # Every supported domain
//! cargo run -p fx-faker --features cli --bin fx-fake -- --list
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use fx_faker::{Dataset, Domain, Faker, FakerConfig, SeededRng};

#[derive(Parser)]
#[command(name = "fx-fake")]
#[command(about = "Print reproducible fake values from a template dataset")]
#[command(long_about = None)]
struct Cli {
    /// Domain to fake, e.g. `name.full` or `internet.password:4:12`
    #[arg(conflicts_with_all = ["key", "template"])]
    domain: Option<Domain>,

    /// Dataset key to resolve, e.g. `address.city`
    #[arg(long, conflicts_with = "template")]
    key: Option<String>,

    /// Template to expand
    #[arg(long)]
    template: Option<String>,

    /// Subject for bare placeholders in `--template`
    #[arg(long, default_value = "")]
    subject: String,

    /// Number of values to print
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Generator seed (default: FX_SEED, or random)
    #[arg(long)]
    seed: Option<u64>,

    /// Dataset file (default: FX_FAKER_DATA, or the bundled data)
    #[arg(long, value_name = "PATH")]
    data: Option<PathBuf>,

    /// List every domain and exit
    #[arg(long)]
    list: bool,

    /// Do not log fallbacks
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list {
        for domain in Domain::catalog() {
            println!("{}", domain);
        }
        return ExitCode::SUCCESS;
    }

    let loaded;
    let dataset: &Dataset = match cli.data {
        Some(ref path) => match Dataset::from_path(path) {
            Ok(dataset) => {
                loaded = dataset;
                &loaded
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        },
        None => Dataset::global(),
    };

    let config = if cli.quiet {
        FakerConfig::quiet()
    } else {
        FakerConfig::from_env()
    };
    let faker = Faker::new(dataset).with_config(config);

    let seed = cli.seed.unwrap_or_else(fx_rng::get_or_generate_seed);
    let mut rng = SeededRng::new(seed);

    for _ in 0..cli.count {
        let value = if let Some(ref domain) = cli.domain {
            faker.fake(domain, &mut rng)
        } else if let Some(ref key) = cli.key {
            faker.generate(key, &mut rng)
        } else if let Some(ref template) = cli.template {
            match faker.resolver().expand(template, &cli.subject, &mut rng) {
                Ok(value) => value,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        } else {
            eprintln!("Error: a domain, --key, or --template is required");
            eprintln!("Run with --help for usage information");
            return ExitCode::FAILURE;
        };
        println!("{}", value);
    }

    ExitCode::SUCCESS
}
