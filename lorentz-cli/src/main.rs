use clap::{ArgAction, Args, Parser, Subcommand};
use lorentz_core::{format_config_error, run_simulation, SimulationConfig, TimeStepping, Vector3};
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

mod output;

#[derive(Parser)]
#[command(name = "lorentz")]
#[command(about = "Charged particle motion in uniform electric and magnetic fields", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Integrate the trajectory and print one line per sample
    Run(RunArgs),
}

/// Every flag defaults to the reference scenario
#[derive(Args, Debug)]
struct RunArgs {
    /// Particle charge [10^-19 C]
    #[arg(long, default_value_t = 1.6, allow_negative_numbers = true)]
    charge: f64,

    /// Particle mass [10^-31 kg]
    #[arg(long, default_value_t = 9.1, allow_negative_numbers = true)]
    mass: f64,

    /// Initial position x,y,z [mm]
    #[arg(long, value_parser = parse_vector, default_value = "0,0,0", allow_hyphen_values = true)]
    position: Vector3,

    /// Initial velocity x,y,z [mm/ns]
    #[arg(long, value_parser = parse_vector, default_value = "0,0,0", allow_hyphen_values = true)]
    velocity: Vector3,

    /// Electric field x,y,z [N/C]
    #[arg(long, value_parser = parse_vector, default_value = "10,10,5", allow_hyphen_values = true)]
    electric: Vector3,

    /// Magnetic field x,y,z [T]
    #[arg(long, value_parser = parse_vector, default_value = "0,0,10", allow_hyphen_values = true)]
    magnetic: Vector3,

    /// Total flight time [ns]
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    total_time: f64,

    /// Number of steps the flight time is divided into
    #[arg(long, default_value_t = 100)]
    steps: u32,

    /// Derive sample times from the step index instead of summing dt
    #[arg(long)]
    indexed_time: bool,
}

impl RunArgs {
    fn to_config(&self) -> SimulationConfig {
        SimulationConfig {
            charge: self.charge,
            mass: self.mass,
            initial_position: self.position,
            initial_velocity: self.velocity,
            electric_field: self.electric,
            magnetic_field: self.magnetic,
            total_time: self.total_time,
            step_count: self.steps,
            time_stepping: if self.indexed_time {
                TimeStepping::Indexed
            } else {
                TimeStepping::Accumulated
            },
        }
    }
}

/// Parse `x,y,z` into a vector
fn parse_vector(s: &str) -> Result<Vector3, String> {
    let parts = s
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<f64>()
                .map_err(|e| format!("invalid component '{}': {}", part.trim(), e))
        })
        .collect::<Result<Vec<f64>, String>>()?;

    match parts.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(format!("expected 3 comma-separated components, got {}", parts.len())),
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so stdout carries only the trace
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Run(args) => {
            if let Err(e) = run(&args) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn run(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.to_config();
    tracing::debug!(?config, "parsed run configuration");
    let result = run_simulation(&config).map_err(|e| format_config_error(&e))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    output::write_trace(&mut out, &result.samples)?;
    out.flush()?;

    Ok(())
}
