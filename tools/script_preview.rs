/// Preview — turn a prompt into a Blender script from the command line.
///
/// Build with `--features cli`.
///
/// Usage: script_preview [--config <file.ron>] [--out <file.py> | --download] [--spec] <prompt...>
///
/// Options:
///   --config <file>  load generator config from RON
///   --out <file>     write the script to a file instead of stdout
///   --download       write the script to blender_building.py
///   --spec           print the parsed building spec instead of the script
///   --examples       list sample prompts and their styles

use building_script::core::pipeline::ScriptEngine;
use building_script::styles::EXAMPLE_PROMPTS;
use std::process;
use tracing_subscriber::EnvFilter;

const DOWNLOAD_NAME: &str = "blender_building.py";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return;
    }

    let mut config_path = None;
    let mut out_path = None;
    let mut show_spec = false;
    let mut show_examples = false;
    let mut words = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--config" if i + 1 < args.len() => {
                i += 1;
                config_path = Some(args[i].clone());
            }
            "--out" if i + 1 < args.len() => {
                i += 1;
                out_path = Some(args[i].clone());
            }
            "--download" => out_path = Some(DOWNLOAD_NAME.to_string()),
            "--spec" => show_spec = true,
            "--examples" => show_examples = true,
            arg if arg.starts_with("--") => {
                eprintln!("Unknown argument: {}", arg);
                print_usage();
                process::exit(1);
            }
            word => words.push(word.to_string()),
        }
        i += 1;
    }

    let mut builder = ScriptEngine::builder();
    if let Some(ref path) = config_path {
        builder = builder.config_path(path);
    }
    let engine = match builder.build() {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("ERROR: Failed to build engine: {}", e);
            process::exit(1);
        }
    };

    if show_examples {
        for prompt in EXAMPLE_PROMPTS {
            match engine.parse(prompt) {
                Ok(spec) => println!("{:<10} {}", spec.style.name(), prompt),
                Err(e) => println!("{:<10} {}", e.user_message(), prompt),
            }
        }
        return;
    }

    let prompt = words.join(" ");

    if show_spec {
        match engine.parse(&prompt) {
            Ok(spec) => {
                println!("Style:        {}", spec.style);
                println!("Floors:       {}", spec.floors);
                println!("Width:        {}", spec.width);
                println!("Depth:        {}", spec.depth);
                println!("Floor height: {}", spec.floor_height);
                println!("Total height: {}", spec.total_height());
            }
            Err(e) => {
                eprintln!("ERROR: {}", e.user_message());
                process::exit(1);
            }
        }
        return;
    }

    let script = match engine.generate_script(&prompt) {
        Ok(script) => script,
        Err(e) => {
            eprintln!("ERROR: {}", e.user_message());
            process::exit(1);
        }
    };

    match out_path {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, script.text()) {
                eprintln!("ERROR: Failed to write {}: {}", path, e);
                process::exit(1);
            }
            println!(
                "Wrote {} ({} objects, {} bytes)",
                path,
                script.objects().len(),
                script.text().len()
            );
        }
        None => print!("{}", script.text()),
    }
}

fn print_usage() {
    println!("Usage: script_preview [options] <prompt...>");
    println!();
    println!("Options:");
    println!("  --config <file>  load generator config from RON");
    println!("  --out <file>     write the script to a file instead of stdout");
    println!("  --download       write the script to {}", DOWNLOAD_NAME);
    println!("  --spec           print the parsed building spec instead of the script");
    println!("  --examples       list sample prompts and their styles");
}
