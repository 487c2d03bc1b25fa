use ipv4_subnet_calc::calculate;
use ipv4_subnet_calc::cli::{resolve_inputs, CliArgs};
use ipv4_subnet_calc::config::{ColorMode, Config, DisplayConfig, OutputFormat};
use ipv4_subnet_calc::logging::init_logging;
use ipv4_subnet_calc::output::{banner, print_calculation, print_csv, print_error, print_json};
use std::error::Error;
use std::io;
use std::process::ExitCode;

// Do as little as possible in main.rs as it can't contain any tests
fn main() -> ExitCode {
    dotenv::dotenv().ok();
    if let Err(e) = init_logging() {
        eprintln!("Error initializing logging: {e}");
    }
    log::info!("#Start main()");

    let args = CliArgs::parse_args();
    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            print_error(&*e, &DisplayConfig::default());
            return ExitCode::from(1);
        }
    };
    args.apply(&mut config);
    match config.color {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => {}
    }

    match run(&args, &config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            print_error(&*e, &config.display);
            ExitCode::from(1)
        }
    }
}

fn run(args: &CliArgs, config: &Config) -> Result<(), Box<dyn Error>> {
    if config.format == OutputFormat::Table {
        println!("\n{}\n", banner("IP SUBNET CALCULATOR", config.display.banner_width));
    }
    let (address, target) = resolve_inputs(args, &mut io::stdin().lock(), &mut io::stdout())?;
    let calc = calculate(&address, &target, config)?;

    match config.format {
        OutputFormat::Table => print_calculation(&calc, &config.display),
        OutputFormat::Csv => print_csv(&calc),
        OutputFormat::Json => print_json(&calc),
    }
}
