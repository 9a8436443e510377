use clap::Parser;
use pasc::errors::PascResult;
use pasc::interpreter::Environment;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Tree-walking interpreter for a small Pascal subset",
    long_about = "Tree-walking interpreter for a small Pascal subset.\n\
                 The interpreter tokenizes, parses, binds and evaluates a source\n\
                 program, then prints the final variable store.\n\
                 \n\
                 Example usage:\n\
                 pasc input.pas                    # Run a program\n\
                 pasc input.pas --show-symbols     # Also print the symbol table\n\
                 pasc input.pas --show-ast         # Display abstract syntax tree\n\
                 pasc                              # Start the interactive loop"
)]
struct Cli {
    // The path to the program to run; omit to start the interactive loop
    path: Option<PathBuf>,

    // Show the symbol table after semantic analysis
    #[arg(short = 's', long)]
    show_symbols: bool,

    // Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    // Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

fn print_environment(env: &Environment) {
    let mut names: Vec<_> = env.iter().collect();
    names.sort_by_key(|(name, _)| name.as_str());
    for (name, value) in names {
        println!("{} = {}", name, value);
    }
}

fn run_source(source: &str, args: &Cli) -> PascResult<()> {
    let program = pasc::parse(source)?;
    if args.verbose {
        println!("Parsed program '{}'", program.name);
    }
    if args.show_ast {
        print!("{}", program);
    }

    let table = pasc::bind(&program)?;
    if args.show_symbols {
        table.print_symbols();
    }

    let env = pasc::evaluate(&program)?;
    print_environment(&env);
    Ok(())
}

fn run_file(path: &PathBuf, args: &Cli) {
    let source = match pasc::read(path) {
        Ok(source) => source,
        Err(e) => fatal(&format!("Failed to read '{}': {}", path.display(), e)),
    };
    if args.verbose {
        println!("Read {} bytes from input file", source.len());
    }
    if let Err(e) = run_source(&source, args) {
        fatal(&e.to_string());
    }
}

// One program per line; errors abort the run, not the loop.
fn interactive_loop(args: &Cli) {
    let stdin = io::stdin();
    loop {
        print!("pasc> ");
        let _ = io::stdout().flush();
        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => fatal(&format!("Failed to read input: {}", e)),
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "exit" {
            break;
        }
        if let Err(e) = run_source(line, args) {
            eprintln!("Error: {}", e);
        }
    }
}

fn main() {
    let args = Cli::parse();

    match &args.path {
        Some(path) => run_file(path, &args),
        None => interactive_loop(&args),
    }
}
