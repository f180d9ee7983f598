//! memlink CLI Client
//!
//! Command-line interface for talking to a serial memory device.

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use memlink::payload::resolve_data_argument;
use memlink::protocol::Command;
use memlink::{Config, Result, Session};

/// memlink CLI
#[derive(Parser, Debug)]
#[command(name = "memlink-cli")]
#[command(about = "Client for serial memory-mapped devices")]
#[command(version)]
struct Args {
    /// Serial device path
    device: String,

    /// Serial baud rate
    #[arg(short, long, default_value = "9600")]
    baud: u32,

    /// Per-line read timeout in milliseconds
    #[arg(short, long, default_value = "1000")]
    timeout_ms: u64,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Query the memory pointer, or set it to a hex value
    Addr {
        /// New pointer value (hex); omit to query
        value: Option<String>,
    },

    /// Read memory from the pointer
    Rmem {
        /// Byte count (hex)
        size: String,
    },

    /// Write memory at the pointer
    Wmem {
        /// Hex data, or the path of a file containing hex data
        data: String,
    },

    /// Read the ROM identifier
    Rrom,

    /// Query the device's maximum line length
    Llen,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,memlink=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::builder()
        .baud_rate(args.baud)
        .read_timeout_ms(args.timeout_ms)
        .build();

    let command = build_command(&args.command)?;

    let mut session = Session::open(&args.device, &config)?;
    let reply = session.execute(command)?;

    for line in reply {
        println!("{}", line);
    }

    Ok(())
}

/// Map a CLI subcommand onto a protocol command
fn build_command(cmd: &Commands) -> Result<Command> {
    match cmd {
        Commands::Addr { value } => {
            let args: Vec<String> = value.iter().cloned().collect();
            Command::parse("addr", &args)
        }
        Commands::Rmem { size } => Command::parse("rmem", std::slice::from_ref(size)),
        Commands::Wmem { data } => {
            let payload = resolve_data_argument(data)?;
            Command::parse("wmem", &[payload])
        }
        Commands::Rrom => Command::parse("rrom", &[]),
        Commands::Llen => Command::parse("llen", &[]),
    }
}
