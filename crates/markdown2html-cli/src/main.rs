use anyhow::Result;
use markdown2html_config::Config;
use markdown2html_engine::{IoError, io, parse};
use std::{
    env,
    io::{Write, stdout},
    path::Path,
    process,
};

/// Destination argument that sends the HTML to stdout instead of a file.
const STDOUT_DEST: &str = "-";

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: markdown2html README.md README.html");
        process::exit(1);
    }
    let (source, destination) = (&args[1], &args[2]);

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    env_logger::Builder::from_default_env()
        .filter_level(config.level_filter())
        .init();

    log::info!("converting {source} to {destination}");

    if let Err(e) = run(Path::new(source), destination, &config) {
        match e.downcast_ref::<IoError>() {
            Some(IoError::NotFound(_)) => eprintln!("Missing {source}"),
            _ => eprintln!("Error: {e:#}"),
        }
        process::exit(1);
    }
}

fn run(source: &Path, destination: &str, config: &Config) -> Result<()> {
    let lines = io::read_lines(source)?;
    let html = parse(&lines);

    if destination == STDOUT_DEST {
        let mut out = stdout().lock();
        out.write_all(html.as_bytes())?;
        out.flush()?;
    } else {
        io::write_html(Path::new(destination), &html, config.create_parent_dirs)?;
    }

    log::info!("wrote {} bytes of HTML", html.len());
    Ok(())
}
