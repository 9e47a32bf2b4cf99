use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use splitgen_core::*;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "splitgen")]
#[command(about = "Randomized strength workout generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding Arms.csv, Push_Pull.csv, Legs.csv, Compound.csv and Core.csv
    #[arg(long, global = true)]
    catalog_dir: Option<PathBuf>,

    /// Use this config file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a workout and deliver it (clipboard by default)
    Generate {
        /// Split type (upper, lower)
        split: String,

        /// Shuffle the main exercises (yes, no)
        shuffle: Option<String>,

        /// Include instructions for the main exercises (yes, no)
        main_instructions: Option<String>,

        /// Include instructions for the core exercises (yes, no)
        core_instructions: Option<String>,

        /// Seed the random draws for a reproducible workout
        #[arg(long)]
        seed: Option<u64>,

        /// Print the workout instead of copying it
        #[arg(long, conflicts_with = "output")]
        print: bool,

        /// Write the workout to a file instead of copying it
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate the exercise catalogs
    Check,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        splitgen_core::logging::init_with_level("debug");
    } else {
        splitgen_core::logging::init();
    }

    match run_cli(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Invocation failed: {:?}", e);
            eprintln!("{}", e);
            if e.is_user_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Generate {
            split,
            shuffle,
            main_instructions,
            core_instructions,
            seed,
            print,
            output,
        }) => {
            // Reject bad input before touching config or data
            let flags = Flags {
                split: split.parse()?,
                shuffle: parse_optional_toggle("shuffle", shuffle)?,
                main_instructions: parse_optional_toggle("main instructions", main_instructions)?,
                core_instructions: parse_optional_toggle("core instructions", core_instructions)?,
            };

            let config = load_config(cli.config.as_deref())?;
            let catalog_dir = cli
                .catalog_dir
                .unwrap_or_else(|| config.catalogs.dir.clone());
            cmd_generate(&config, &catalog_dir, flags, seed, print, output)
        }
        Some(Commands::Check) => {
            let config = load_config(cli.config.as_deref())?;
            let catalog_dir = cli
                .catalog_dir
                .unwrap_or_else(|| config.catalogs.dir.clone());
            cmd_check(&catalog_dir)
        }
        None => Err(Error::InvalidInput(
            "Please provide a split type, e.g. `splitgen generate upper`.".into(),
        )),
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

fn parse_optional_toggle(flag: &str, value: Option<String>) -> Result<Option<bool>> {
    value.map(|v| parse_toggle(flag, &v)).transpose()
}

/// Validated command-line values; `None` means "use the config default"
struct Flags {
    split: SplitType,
    shuffle: Option<bool>,
    main_instructions: Option<bool>,
    core_instructions: Option<bool>,
}

impl Flags {
    fn into_options(self, config: &Config) -> WorkoutOptions {
        let mut options = config.workout_options(self.split);

        if let Some(shuffle) = self.shuffle {
            options.shuffle = shuffle;
        }
        if let Some(include) = self.main_instructions {
            options.main_instructions = include;
        }
        if let Some(include) = self.core_instructions {
            options.core_instructions = include;
        }

        options
    }
}

fn cmd_generate(
    config: &Config,
    catalog_dir: &Path,
    flags: Flags,
    seed: Option<u64>,
    print: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let options = flags.into_options(config);

    let catalogs = load_catalog_set(Some(catalog_dir))?;

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let (mut sink, report_on_stdout): (Box<dyn ReportSink>, bool) = match output {
        Some(path) => (Box::new(FileSink::new(path)), false),
        None if print || config.output.destination == Destination::Stdout => {
            (Box::new(StdoutSink), true)
        }
        None => (Box::new(ClipboardSink), false),
    };

    let summary = run(&catalogs, &options, &mut rng, sink.as_mut())?;

    // Keep stdout clean when it carries the report itself
    if report_on_stdout {
        eprintln!("{}", summary);
    } else {
        println!("{}", summary);
    }

    Ok(())
}

fn cmd_check(catalog_dir: &Path) -> Result<()> {
    let catalogs = load_catalog_set(Some(catalog_dir))?;

    let errors = catalogs.validate();
    if !errors.is_empty() {
        eprintln!("Catalog validation errors:");
        for error in &errors {
            eprintln!("  - {}", error);
        }
        return Err(Error::CatalogValidation(format!(
            "{} problem(s) found",
            errors.len()
        )));
    }

    for kind in CatalogKind::ALL {
        let catalog = catalogs.get(kind);
        println!(
            "✓ {}: {} exercises in {} areas",
            kind,
            catalog.exercises.len(),
            catalog.areas().len()
        );
    }

    Ok(())
}
