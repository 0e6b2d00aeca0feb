use anyhow::{Context, Result};
use runo_config::Config;
use runo_engine::{CompileOptions, Compiler, InlineOptions, PageTemplate, io::open_input};
use std::{
    env,
    io::{Write, stdout},
    path::{Path, PathBuf},
    process,
};

fn main() {
    // Logs go to stderr; stdout carries only the rendered page
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("runo");

    if !(2..=3).contains(&args.len()) {
        usage(program);
    }

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let (template_path, input_path) = if args.len() == 3 {
        (PathBuf::from(&args[1]), PathBuf::from(&args[2]))
    } else if let Some(template) = config.default_template.clone() {
        log::info!("Using default template {}", template.display());
        (template, PathBuf::from(&args[1]))
    } else {
        eprintln!(
            "Error: No template given and no default_template set in {}",
            Config::config_path().display()
        );
        usage(program);
    };

    if let Err(e) = run(&template_path, &input_path, &config) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <template> <input>");
    eprintln!("       {program} <input>    (with default_template in the config file)");
    process::exit(1);
}

fn run(template_path: &Path, input_path: &Path, config: &Config) -> Result<()> {
    let template = PageTemplate::load(template_path)?;
    log::debug!("Loaded template {}", template.name());

    let options = CompileOptions {
        inline: InlineOptions {
            open_lookahead: config.open_lookahead,
        },
    };

    // The input handle is dropped as soon as compilation returns
    let doc = {
        let input = open_input(input_path)?;
        Compiler::new(options)
            .compile(input)
            .with_context(|| format!("Failed to compile {}", input_path.display()))?
    };

    let page = template.render(&doc)?;

    let mut out = stdout().lock();
    out.write_all(page.as_bytes())
        .context("Failed to write rendered page")?;
    out.flush().context("Failed to write rendered page")?;
    Ok(())
}
