//! rjs - render raw statements from stdin as one page update
//!
//! Each non-empty input line is recorded as a statement.

use rjs::{NAME, NullContext, PageGenerator, RenderConfig, ScriptTagOptions, VERSION};
use std::env;
use std::io::{self, BufRead};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|a| a == "--version") {
        println!("{} v{}", NAME, VERSION);
        return;
    }

    let mut config = RenderConfig::from_env();
    if args.iter().any(|a| a == "--debug") {
        config = config.with_debug(true);
    }
    let tag = args.iter().any(|a| a == "--tag");

    if let Err(e) = run(config, tag) {
        eprintln!("{}: {}", NAME, e);
        std::process::exit(1);
    }
}

fn run(config: RenderConfig, tag: bool) -> io::Result<()> {
    let context = NullContext;
    let mut page = PageGenerator::new(&context, config);

    for line in io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            page.record(line);
        }
    }

    let script = page.to_script();
    if tag {
        println!("{}", rjs::javascript_tag(&script, &ScriptTagOptions::new()));
    } else {
        println!("{}", script);
    }
    Ok(())
}
