use clap::Parser;
use shape_area::app::{run_builtin_shapes, run_shape_list};
use shape_area::utils::{logger, validation::Validate};
use shape_area::{CliConfig, LineReporter, ShapeCalculator, ShapeError, ShapeFileConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting shape-area");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(&config) {
        tracing::error!(
            "Shape calculation failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("Suggestion: {}", e.recovery_suggestion());

        eprintln!("{}", e.user_friendly_message());
        eprintln!("Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    tracing::info!("Shape calculation completed");
    Ok(())
}

fn run(config: &CliConfig) -> Result<(), ShapeError> {
    match &config.config {
        Some(path) => {
            tracing::info!("Loading shapes from: {}", path.display());
            let file_config = ShapeFileConfig::from_file(path)?;
            file_config.validate()?;

            let format = config.resolve_format(file_config.output_format());
            let mut calculator = ShapeCalculator::new(LineReporter::stdout(format));
            run_shape_list(&mut calculator, file_config.shapes())
        }
        None => {
            let format = config.resolve_format(None);
            let mut calculator = ShapeCalculator::new(LineReporter::stdout(format));
            run_builtin_shapes(&mut calculator)
        }
    }
}
