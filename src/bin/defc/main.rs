use std::{fs, path::PathBuf, process::ExitCode};

use anyhow::Context;
use clap::Parser;

use defc::{
    codegen, driver, lexer, parser,
    util::fmt::{print_tokens_string, tree::print_node_string},
};

use crate::target::{Emit, Target};

mod target;

/// Compiles a single function definition into JavaScript or Python.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// The source file.
    file: PathBuf,

    /// The target language. Inferred from the output file extension when
    /// omitted, and defaults to javascript.
    #[arg(short, long, value_enum, env = "DEFC_TARGET")]
    target: Option<Target>,

    /// Writes to this file instead of the standard output.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Emit::Program)]
    emit: Emit,

    /// The expression whose value the linked program prints.
    #[arg(long, default_value = driver::DEFAULT_INVOCATION)]
    invoke: String,
}

impl Args {
    fn resolve_target(&self) -> codegen::Target {
        if let Some(target) = self.target {
            return target.into();
        }
        self.output
            .as_deref()
            .and_then(|path| path.extension()?.to_str())
            .and_then(codegen::Target::from_extension)
            .unwrap_or_default()
    }
}

fn main() -> ExitCode {
    env_logger::init();
    if let Err(error) = run(&Args::parse()) {
        eprintln!("error: {error:#}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run(args: &Args) -> anyhow::Result<()> {
    let path = args.file.display();
    let src = fs::read_to_string(&args.file).with_context(|| format!("failed to read {path}"))?;
    let target = args.resolve_target();
    log::info!("compiling {path} to {target}");

    let out = match args.emit {
        Emit::Tokens => {
            let tokens = lexer::tokenize(&src).with_context(|| format!("failed to lex {path}"))?;
            print_tokens_string(&tokens)
        }
        Emit::Ast => {
            let tokens = lexer::tokenize(&src).with_context(|| format!("failed to lex {path}"))?;
            let root = parser::parse(&tokens).with_context(|| format!("failed to parse {path}"))?;
            print_node_string(&root)
        }
        Emit::Code => {
            let code = compile(&src, target, args)?;
            format!("{code}\n")
        }
        Emit::Program => {
            let code = compile(&src, target, args)?;
            driver::link(&code, target, &args.invoke)
        }
    };

    match &args.output {
        Some(output) => fs::write(output, out)
            .with_context(|| format!("failed to write {}", output.display()))?,
        None => print!("{out}"),
    }
    Ok(())
}

fn compile(src: &str, target: codegen::Target, args: &Args) -> anyhow::Result<String> {
    driver::compile(src, target)
        .with_context(|| format!("failed to compile {}", args.file.display()))
}
