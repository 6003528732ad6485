use std::{io::BufReader, path::PathBuf, str::FromStr};

use stoat_sat::{config::Config, context::Context, types::err::ErrorKind};

use parse_args::parse_args;

mod parse_args;

fn main() {
    let mut config = Config::default();

    let mut args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        println!("c Path to CNF required");
        std::process::exit(1);
    }

    parse_args(&mut args, &mut config);

    let path = match args.last().map(|arg| PathBuf::from_str(arg)) {
        Some(Ok(path)) => path,
        _ => {
            println!("c Path to CNF required");
            std::process::exit(1);
        }
    };

    println!("c Reading DIMACS file from {path:?}");

    let file = match std::fs::File::open(&path) {
        Ok(file) => file,
        Err(_) => {
            println!("c Failed to open CNF file");
            std::process::exit(1);
        }
    };

    let mut ctx: Context = Context::from_config(config);

    match ctx.read_dimacs(BufReader::new(&file)) {
        Ok(()) => {}
        Err(ErrorKind::Parse(e)) => {
            println!("c Failed to parse CNF file: {e:?}");
            std::process::exit(1);
        }
        Err(e) => {
            println!("c Failed to build the formula: {e}");
            std::process::exit(1);
        }
    }

    let result = ctx.solve();

    println!("{result}");
    println!("{}", ctx.statistics());
}
