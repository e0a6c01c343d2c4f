use clap::Parser;
use cminus::ast::{NodeCounter, Program, TreePrinter};
use cminus::frontend::lexer::scan;
use cminus::utils::config::MAX_NESTING;
use cminus::{read, CminusError, CminusResult, Lexeme, ParseOptions};
use std::{path::PathBuf, time::Instant};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Front end for the C-minus language",
    long_about = "Front end for the C-minus language.\n\
                 Runs lexical analysis and parsing on one source file and reports\n\
                 every lexical error and the first syntax error.\n\
                 \n\
                 Example usage:\n\
                 cminus input.cminus                  # Check the file\n\
                 cminus input.cminus --tokens         # Print the token stream\n\
                 cminus input.cminus --show-ast       # Display abstract syntax tree\n\
                 cminus input.cminus --print-source   # Print the canonical source\n\
                 cminus input.cminus --verbose        # Verbose output\n\
                 cminus input.cminus --timing         # Show phase timing"
)]
struct Cli {
    /// The path to the file to parse
    path: PathBuf,

    /// Print the token stream produced by the lexer
    #[arg(short = 'k', long)]
    tokens: bool,

    /// Show AST after parsing
    #[arg(long)]
    show_ast: bool,

    /// Print the AST back as canonical source
    #[arg(short, long)]
    print_source: bool,

    /// Report block comments that are never closed
    #[arg(long)]
    strict_comments: bool,

    /// Reject input nested deeper than this many levels
    #[arg(long, default_value_t = MAX_NESTING)]
    max_nesting: usize,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show phase timing
    #[arg(short, long)]
    timing: bool,
}

#[derive(Debug, Default)]
struct CompilationStats {
    lexer_time: f64,
    parser_time: f64,
    total_time: f64,
    token_count: usize,
    ast_size: usize,
}

// Print error message and exit with error code
fn fatal(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}

// Lexical analysis on its own, for the token listing and statistics.
// Its diagnostics are reported by the parse, which scans the source again.
fn lexical_analysis(
    source: &str,
    options: ParseOptions,
    stats: &mut CompilationStats,
    verbose: bool,
) -> Vec<Lexeme> {
    let lexer_start = Instant::now();
    let (tokens, diagnostics) = scan(source, options);
    stats.lexer_time = lexer_start.elapsed().as_secs_f64();
    stats.token_count = tokens.len();

    if verbose {
        println!("Lexical analysis completed in {:.3}s", stats.lexer_time);
        println!("  Generated {} tokens, {} lexical error(s)", stats.token_count, diagnostics.len());
    }

    tokens
}

fn parsing_phase(
    source: &str,
    options: ParseOptions,
    stats: &mut CompilationStats,
    verbose: bool,
) -> CminusResult<Program> {
    let parser_start = Instant::now();
    let result = cminus::parse_with_options(source, options);
    stats.parser_time = parser_start.elapsed().as_secs_f64();
    let program = result?;
    stats.ast_size = NodeCounter::count(&program);

    if verbose {
        println!("Parsing completed in {:.3}s", stats.parser_time);
        println!("  Built {} AST nodes", stats.ast_size);
    }

    Ok(program)
}

fn print_tokens(tokens: &[Lexeme]) {
    println!("\nLexical output:");
    for lexeme in tokens {
        println!("{}", lexeme);
    }
}

fn print_stats(stats: &CompilationStats) {
    println!("\nPhase timing:");
    println!("  Lexical analysis   {:>8.3}s", stats.lexer_time);
    println!("  Parsing            {:>8.3}s", stats.parser_time);
    println!("  Total              {:>8.3}s", stats.total_time);
    println!("\nMetrics:");
    println!("  Tokens:     {}", stats.token_count);
    println!("  AST nodes:  {}", stats.ast_size);
}

fn run(args: &Cli) -> CminusResult<()> {
    let start_time = Instant::now();
    let mut stats = CompilationStats::default();
    let options = ParseOptions {
        strict_comments: args.strict_comments,
        max_nesting: args.max_nesting,
    };

    if args.verbose {
        println!("Parsing {}", args.path.display());
    }
    let source = read(&args.path)?;
    if args.verbose {
        println!("Read {} bytes from input file", source.len());
    }

    if args.tokens || args.timing || args.verbose {
        let tokens = lexical_analysis(&source, options, &mut stats, args.verbose);
        if args.tokens {
            print_tokens(&tokens);
        }
    }

    let program = parsing_phase(&source, options, &mut stats, args.verbose)?;

    if args.show_ast {
        println!("\nAbstract Syntax Tree:");
        print!("{}", TreePrinter::render(&program));
    }
    if args.print_source {
        println!("\nCanonical source:");
        print!("{}", program);
    }

    stats.total_time = start_time.elapsed().as_secs_f64();
    if args.timing {
        print_stats(&stats);
    }
    Ok(())
}

fn main() {
    let args = Cli::parse();

    match run(&args) {
        Ok(()) => {
            if args.verbose {
                println!("No errors found.");
            }
        }
        Err(CminusError::Rejected(diagnostics)) => {
            for diagnostic in &diagnostics {
                eprintln!("{}", diagnostic);
            }
            fatal(&format!("parsing failed with {} error(s)", diagnostics.len()));
        }
        Err(e) => fatal(&e.to_string()),
    }
}
