use std::{path::PathBuf, process::ExitCode};

use anyhow::{Context, Result};
use clap::{Parser, builder::PossibleValuesParser};
use fixture_forge::{
    Error, GenerationConfig, SemanticModel, generate, load_test_code_format, setup_logging,
};

/// Exit code for generator logic faults (EX_SOFTWARE)
const EXIT_INTERNAL_ERROR: u8 = 70;

#[derive(Parser, Debug)]
#[command(name = "fixture-forge")]
#[command(
    about = "Generates a hierarchy of singleLevel semantic model files along with associated batch files for testing purposes",
    long_about = None
)]
struct Args {
    /// The singleLevel semantic model for which to generate the test data set
    #[arg(long, value_parser = PossibleValuesParser::new(SemanticModel::names()), required_unless_present = "list_models")]
    model: Option<String>,

    /// How many relationships each item should have. Once the depth given by --depth is reached,
    /// the items have no relationships and the recursion comes to a halt.
    #[arg(
        long,
        value_parser = clap::value_parser!(u64).range(1..),
        required_unless_present = "list_models"
    )]
    relationships: Option<u64>,

    /// Recursion depth that the test data should satisfy
    #[arg(
        long,
        value_parser = clap::value_parser!(u64).range(1..),
        required_unless_present = "list_models"
    )]
    depth: Option<u64>,

    /// Directory in which to place the generated files (default: the model's name + "-test-data")
    #[arg(long)]
    target: Option<PathBuf>,

    /// If the target directory is present and not empty, delete it and recreate it.
    /// Otherwise a random suffix is appended to the directory name.
    #[arg(long)]
    replace: bool,

    /// Seed for reproducible identifiers
    #[arg(long)]
    seed: Option<u64>,

    /// Prefix of the resource paths in the generated test code
    #[arg(long)]
    resource_prefix: Option<String>,

    /// JSON file overriding the naming conventions of the generated test code
    #[arg(long)]
    test_code_format: Option<PathBuf>,

    /// Print the available semantic models and exit
    #[arg(long)]
    list_models: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    setup_logging()?;

    Ok(match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => handle_error(err),
    })
}

fn run(args: Args) -> Result<()> {
    if args.list_models {
        for name in SemanticModel::names() {
            println!("{name}");
        }
        return Ok(());
    }

    let config = build_config(args)?;
    let report = generate(&config)?;

    tracing::info!(
        root_id = %report.root_id,
        files = report.files.len(),
        test_code = %report.test_code_file.display(),
        "done"
    );
    Ok(())
}

fn build_config(args: Args) -> Result<GenerationConfig> {
    // presence is enforced by clap unless --list-models is given
    let (Some(model), Some(relationships), Some(depth)) = (args.model, args.relationships, args.depth)
    else {
        anyhow::bail!("--model, --relationships and --depth are required");
    };

    let mut format = match &args.test_code_format {
        Some(path) => load_test_code_format(path).context("loading test code format")?,
        None => Default::default(),
    };
    if let Some(prefix) = args.resource_prefix {
        format.resource_prefix = prefix;
    }

    let mut config = GenerationConfig::new(&model, relationships, depth)?
        .with_replace(args.replace)
        .with_seed(args.seed)
        .with_test_code_format(format);
    if let Some(target) = args.target {
        config = config.with_target(target);
    }
    Ok(config)
}

fn handle_error(err: anyhow::Error) -> ExitCode {
    match err.downcast_ref::<Error>() {
        Some(e) if e.is_internal() => {
            tracing::error!("{e}");
            ExitCode::from(EXIT_INTERNAL_ERROR)
        }
        _ => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
