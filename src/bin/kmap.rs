//! Karnaugh map minimizer - Command Line Interface
//!
//! Reads minterms and don't-care terms from the arguments or interactively,
//! prints the minimal sum of products and the matching Verilog module.

use clap::Parser;
use kmap::{parse_minterm_list, Function, KmapError, RenderConfig};
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use std::io::{self, BufRead, Write};
use std::process;

#[derive(Parser, Debug)]
#[command(name = "kmap")]
#[command(about = "Four-variable Karnaugh map minimizer with Verilog output", long_about = None)]
#[command(version)]
struct Args {
    /// Minterms as comma-separated integers (0-15). Prompted interactively if missing
    #[arg(short = 'm', long = "minterms", value_name = "LIST")]
    minterms: Option<String>,

    /// Don't-care terms as comma-separated integers (0-15)
    #[arg(short = 'd', long = "dont-cares", value_name = "LIST")]
    dont_cares: Option<String>,

    /// Name of the generated Verilog module
    #[arg(short = 'n', long = "module", default_value = "kmap_simplified")]
    module_name: String,

    /// Name of the output of the generated module
    #[arg(short = 'o', long = "output", default_value = "F")]
    output: String,

    /// Print the Karnaugh map
    #[arg(long = "show-map")]
    show_map: bool,

    /// Do not print the Verilog code
    #[arg(long = "no-verilog")]
    no_verilog: bool,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn prompt(message: &str, label: &str) -> io::Result<String> {
    println!("{}", message);
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

/// Collect the two lists, prompting for the missing ones
fn read_inputs(args: &Args) -> io::Result<(String, String)> {
    match &args.minterms {
        Some(minterms) => Ok((minterms.clone(), args.dont_cares.clone().unwrap_or_default())),
        None => {
            let minterms = prompt(
                "Enter minterms as comma-separated integers (0-15, e.g., 0,1,2,3)",
                "Enter Minterms: ",
            )?;
            let dont_cares = match &args.dont_cares {
                Some(dc) => dc.clone(),
                None => prompt(
                    "Enter don't-care terms as comma-separated integers (0-15, optional)",
                    "Enter Don't Cares (optional): ",
                )?,
            };
            Ok((minterms, dont_cares))
        }
    }
}

fn run(args: &Args, minterms: &str, dont_cares: &str) -> Result<(), KmapError> {
    let cfg = RenderConfig::new(&args.module_name, &args.output)?;

    let minterms = parse_minterm_list(minterms)?;
    if minterms.is_empty() {
        return Err(KmapError::EmptyMintermSet);
    }
    let dont_cares = parse_minterm_list(dont_cares)?;
    let function = Function::new(minterms, dont_cares)?;
    debug!(
        "minterms: {}, don't-cares: {}",
        function.minterms(),
        function.dont_cares()
    );

    if args.show_map {
        println!("\nKarnaugh map:\n{}", function.grid());
    }

    let result = function.minimize();
    println!("\nSimplified SOP:\n{}\n", result);
    if !args.no_verilog {
        println!("Verilog Code:\n{}", result.verilog(&cfg));
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    if let Err(e) = TermLogger::init(
        log_level(args.verbose),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("Could not set up logging: {}", e);
    }

    let (minterms, dont_cares) = match read_inputs(&args) {
        Ok(inputs) => inputs,
        Err(e) => {
            eprintln!("Error reading input: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&args, &minterms, &dont_cares) {
        eprintln!("Input error: {}", e);
        process::exit(1);
    }
}
