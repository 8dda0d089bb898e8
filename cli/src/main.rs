mod error_formatter;
mod formatter;
mod interactive;
mod server;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use formatter::Formatter;
use langcalc::{parse_inputs, Engine, Operation, ResourceLimits};

#[derive(Parser)]
#[command(name = "langcalc")]
#[command(about = "A calculator for finite sets, words and formal languages.")]
#[command(
    long_about = "LangCalc computes set algebra, word operations and language operations, including bounded Kleene and positive closures.\nThe CLI evaluates one operation per call, prompts for inputs interactively, or serves the calculator over HTTP."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate an operation and display the result (try: union A=a,b B=b,c)
    ///
    /// Inputs are given as name=value pairs. Any input that is left out uses the
    /// operation's default value. Run 'langcalc show OPERATION' to see its inputs.
    Run {
        /// Operation to evaluate
        ///
        /// Examples:
        ///   union                - A ∪ B
        ///   language-concat      - L₁ · L₂
        ///   kleene               - L* up to k iterations
        #[arg(value_name = "OPERATION")]
        operation: Option<String>,
        /// Inputs (format: name=value)
        ///
        /// Examples: A=a,b,c  L1={a, ab}  w=abba  n=3  k=4  w=  (empty word)
        inputs: Vec<String>,
        /// Output the result value only (for piping to other tools)
        #[arg(short = 'r', long)]
        raw: bool,
        /// Enable interactive mode for operation and input selection
        #[arg(short = 'i', long)]
        interactive: bool,
        #[command(flatten)]
        limits: LimitArgs,
    },
    /// List all operations, grouped by category, with notation help
    List,
    /// Show an operation's inputs and their defaults
    Show {
        /// Name of the operation to show
        operation: String,
    },
    /// Start HTTP REST API server (default: localhost:3000)
    ///
    /// Runs a server that evaluates operations via HTTP.
    /// API: POST /evaluate with {operation, inputs}, GET /evaluate/OPERATION?name=value
    Server {
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[command(flatten)]
        limits: LimitArgs,
    },
}

/// Overrides for the engine's resource limits
#[derive(Args, Debug, Clone, Default)]
struct LimitArgs {
    /// Largest exponent accepted for word powers [default: 10]
    #[arg(long, value_name = "N")]
    max_word_power: Option<i64>,
    /// Largest exponent accepted for language powers [default: 5]
    #[arg(long, value_name = "N")]
    max_language_power: Option<i64>,
    /// Largest iteration bound accepted for closures [default: 8]
    #[arg(long, value_name = "K")]
    max_closure_iterations: Option<i64>,
    /// Maximum size of a single input in bytes [default: 1024]
    #[arg(long, value_name = "BYTES")]
    max_input_bytes: Option<usize>,
}

impl LimitArgs {
    fn resolve(&self) -> ResourceLimits {
        let defaults = ResourceLimits::default();
        ResourceLimits {
            max_word_power: self.max_word_power.unwrap_or(defaults.max_word_power),
            max_language_power: self
                .max_language_power
                .unwrap_or(defaults.max_language_power),
            max_closure_iterations: self
                .max_closure_iterations
                .unwrap_or(defaults.max_closure_iterations),
            max_input_bytes: self.max_input_bytes.unwrap_or(defaults.max_input_bytes),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Run {
            operation,
            inputs,
            raw,
            interactive,
            limits,
        } => run_command(operation.as_ref(), inputs, *raw, *interactive, limits),
        Commands::List => list_command(),
        Commands::Show { operation } => show_command(operation),
        Commands::Server { host, port, limits } => server_command(host, *port, limits),
    };

    if let Err(e) = result {
        // Check if it's a LangCalcError and format it nicely, otherwise use default
        if let Some(calc_err) = e.downcast_ref::<langcalc::LangCalcError>() {
            eprintln!("{}", error_formatter::format_error(calc_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn run_command(
    operation: Option<&String>,
    inputs: &[String],
    raw: bool,
    interactive: bool,
    limits: &LimitArgs,
) -> Result<()> {
    let engine = Engine::with_limits(limits.resolve());

    let refs: Vec<&str> = inputs.iter().map(|s| s.as_str()).collect();
    let given = parse_inputs(&refs)?;

    let (operation, inputs) = if interactive || operation.is_none() {
        if operation.is_none() && !interactive {
            eprintln!("Error: No operation specified\n");
            eprintln!("Usage: langcalc run [OPERATION] [INPUTS...] [OPTIONS]\n");
            eprintln!("Examples:");
            eprintln!("  langcalc run union A=a,b,c B=b,c,d   - Union of two sets");
            eprintln!("  langcalc run word-power w=ab n=3     - Power of a word");
            eprintln!("  langcalc run kleene L=a,b k=4        - Kleene closure up to 4 iterations");
            eprintln!("  langcalc run language-concat         - Use the default inputs");
            eprintln!("  langcalc run --interactive           - Interactive mode for selection\n");
            eprintln!("To see available operations:");
            eprintln!("  langcalc list\n");
            eprintln!("For more information:");
            eprintln!("  langcalc run --help");
            std::process::exit(1);
        }

        let parsed = operation.map(|name| name.parse::<Operation>()).transpose()?;
        interactive::run_interactive(parsed, given)?
    } else if let Some(name) = operation {
        (name.parse::<Operation>()?, given)
    } else {
        unreachable!()
    };

    let response = engine.evaluate(operation, &inputs)?;
    let formatter = Formatter::default();
    print!("{}", formatter.format_response(&response, raw));

    Ok(())
}

fn list_command() -> Result<()> {
    let formatter = Formatter::default();
    print!("{}", formatter.format_operation_list());
    Ok(())
}

fn show_command(name: &str) -> Result<()> {
    let operation: Operation = name.parse()?;
    let formatter = Formatter::default();
    print!("{}", formatter.format_operation_details(operation));
    Ok(())
}

fn server_command(host: &str, port: u16, limits: &LimitArgs) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(async {
            let engine = Engine::with_limits(limits.resolve());
            println!(
                "Starting HTTP server with {} operation(s) available",
                Operation::ALL.len()
            );
            server::http::start_server(engine, host, port).await
        })?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (host, port, limits);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}
