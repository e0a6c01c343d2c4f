use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod frontend;
pub mod utils;

pub use ast::Program;
pub use frontend::{Lexeme, Lexer, Parser, Token};
pub use utils::config::ParseOptions;
pub use utils::diagnostics::{Category, Diagnostic};
pub use utils::errors::{CminusError, CminusResult};

pub const VERSION: &str = "0.1.0";

pub const SOURCE_EXTENSION: &str = "cminus";

/// Parses one compilation unit with the default options.
pub fn parse(source: &str) -> Result<Program, Vec<Diagnostic>> {
    Parser::new(source).parse()
}

pub fn parse_with_options(source: &str, options: ParseOptions) -> Result<Program, Vec<Diagnostic>> {
    Parser::with_options(source, options).parse()
}

/// The raw token stream and lexical diagnostics, independent of whether the
/// source parses.
pub fn tokenize(source: &str) -> (Vec<Lexeme>, Vec<Diagnostic>) {
    frontend::lexer::scan(source, ParseOptions::default())
}

pub fn read(filename: &Path) -> CminusResult<String> {
    match filename.extension() {
        Some(ext) if ext == SOURCE_EXTENSION => {}
        _ => {
            return Err(CminusError::FileReadError(format!(
                "{}: file must have a .{} extension",
                filename.display(),
                SOURCE_EXTENSION
            )));
        }
    }
    let mut file = File::open(filename)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}

pub fn parse_file(filename: &Path, options: ParseOptions) -> CminusResult<Program> {
    let source = read(filename)?;
    Ok(parse_with_options(&source, options)?)
}
