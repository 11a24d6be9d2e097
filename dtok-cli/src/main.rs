//! Command-line interface for dtok
//! This binary turns a designer-exported token document into the generated
//! CSS custom-property stylesheet.
//!
//! Usage:
//!   dtok [path] [--config <file>] [--out <file>]   - Run the token build
//!   dtok --list-transforms                         - List registered transforms

use clap::{Arg, ArgAction, Command};
use dtok_build::pipeline::{build_stylesheet, BuildOptions};
use dtok_build::{CollisionPolicy, EmitOptions};
use dtok_config::{CollisionMode, DtokConfig, Loader};
use dtok_core::loader::DocumentLoader;
use dtok_transform::standard::DEFAULT_REGISTRY;
use std::io::Write;
use std::path::Path;

fn main() {
    let matches = Command::new("dtok")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Builds CSS custom properties from a design token document")
        .arg(
            Arg::new("path")
                .help("Path to the token document (overrides input.tokens)")
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file (default: an optional ./dtok.toml)"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .help("Output stylesheet path (overrides output.stylesheet)"),
        )
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available token transforms")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let config = load_config(matches.get_one::<String>("config"));
    let tokens_path = matches
        .get_one::<String>("path")
        .cloned()
        .unwrap_or_else(|| config.input.tokens.clone());
    let out_path = matches
        .get_one::<String>("out")
        .cloned()
        .unwrap_or_else(|| config.output.stylesheet.clone());

    handle_build_command(&config, &tokens_path, &out_path);
}

/// Run the token build end to end and write the stylesheet.
fn handle_build_command(config: &DtokConfig, tokens_path: &str, out_path: &str) {
    let document = DocumentLoader::from_path(tokens_path)
        .and_then(|loader| loader.document())
        .unwrap_or_else(|e| {
            eprintln!("Error loading \"{}\": {}", tokens_path, e);
            std::process::exit(1);
        });

    let options = build_options(config);
    let sheet = build_stylesheet(&document, &DEFAULT_REGISTRY, &options).unwrap_or_else(|e| {
        eprintln!("Build error: {}", e);
        std::process::exit(1);
    });

    for warning in &sheet.warnings {
        eprintln!("Warning: {}", warning);
    }

    write_atomic(out_path, &sheet.css).unwrap_or_else(|e| {
        eprintln!("Error writing \"{}\": {}", out_path, e);
        std::process::exit(1);
    });
}

fn load_config(path: Option<&String>) -> DtokConfig {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file("dtok.toml"),
    };
    loader.build().unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    })
}

fn build_options(config: &DtokConfig) -> BuildOptions {
    BuildOptions {
        mobile_set: config.build.mobile_set.clone(),
        desktop_set: config.build.desktop_set.clone(),
        emit: EmitOptions {
            desktop_min_width: config.build.desktop_min_width,
            collisions: match config.build.collisions {
                CollisionMode::Warn => CollisionPolicy::Warn,
                CollisionMode::Error => CollisionPolicy::Error,
            },
        },
        ..BuildOptions::default()
    }
}

/// Write via a temp file in the destination directory renamed into place, so
/// a failed run never leaves a partial stylesheet behind.
fn write_atomic(path: &str, contents: &str) -> std::io::Result<()> {
    let path = Path::new(path);
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut file = tempfile::NamedTempFile::new_in(dir)?;
    file.write_all(contents.as_bytes())?;
    file.persist(path)?;
    Ok(())
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available token transforms:\n");

    for name in DEFAULT_REGISTRY.list_transforms() {
        let transform = DEFAULT_REGISTRY
            .get(&name)
            .expect("listed transforms are registered");
        println!("  {}", name);
        println!("    {}", transform.description());
        println!();
    }
}
