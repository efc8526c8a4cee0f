use std::io::BufRead;

use clap::Parser;
use otter_cnf::{
    context::Context,
    procedures::Encoding,
    structures::clause::Clause,
    types::err::ErrorKind,
};

mod config;

use config::config_from_args;

/// Translate propositional formulas to conjunctive normal form.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    /// Formulas to translate, or one formula per line of stdin if none are given
    formulas: Vec<String>,

    /// Translate by distribution, rather than by the Tseitin transformation
    #[arg(long)]
    naive: bool,

    /// The order of indicies given to original atoms: first or lexicographic
    #[arg(long)]
    order: Option<String>,

    /// The maximum nesting depth of a formula
    #[arg(long)]
    depth_limit: Option<usize>,
}

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let args = Args::parse();

    let config = match config_from_args(&args) {
        Ok(config) => config,
        Err(e) => {
            println!("c Error: {e}");
            std::process::exit(1);
        }
    };

    let context = Context::from_config(config);

    let formulas = match args.formulas.is_empty() {
        false => args.formulas.clone(),
        true => {
            println!("c Reading formulas from stdin");
            let mut lines = Vec::default();
            for line in std::io::stdin().lock().lines() {
                match line {
                    Ok(line) if line.trim().is_empty() => {}
                    Ok(line) => lines.push(line),
                    Err(e) => {
                        println!("c Error: {e}");
                        std::process::exit(1);
                    }
                }
            }
            lines
        }
    };

    match args.naive {
        true => {
            for text in &formulas {
                println!("c Formula: {text}");
                match context.naive_clauses(text) {
                    Ok(clauses) => {
                        println!("c {} clauses by distribution", clauses.len());
                        for clause in clauses {
                            println!("{}", clause.as_string());
                        }
                    }
                    Err(e) => exit_with(e),
                }
            }
        }

        false => {
            let texts = formulas.iter().map(String::as_str).collect::<Vec<_>>();
            for (text, result) in texts.iter().zip(context.encode_batch(&texts)) {
                println!("c Formula: {text}");
                match result {
                    Ok(encoding) => write_encoding(&encoding),
                    Err(e) => exit_with(e),
                }
            }
        }
    }
}

fn write_encoding(encoding: &Encoding) {
    println!("c Variable map:");
    for (index, name) in encoding.atom_map.original_names().iter().enumerate() {
        println!("c {name} {index}");
    }
    print!("{}", encoding.as_dimacs());
}

fn exit_with(e: ErrorKind) -> ! {
    println!("c Error: {e}");
    std::process::exit(1);
}
