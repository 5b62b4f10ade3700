//! Polyomino enumerator CLI.

#[cfg(feature = "dhat-heap")]
#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use polyomino_enum::{
    compute::{Enumerator, validate_count},
    output::{ProgressTracker, export, validation_message, write_summary},
    schema::{EnumerationConfig, MAX_SIZE, OutputTarget},
};

enum Command {
    Run(EnumerationConfig),
    Example,
    Help,
}

fn main() {
    #[cfg(feature = "dhat-heap")]
    let _profiler = dhat::Profiler::new_heap();

    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("polyomino");

    let config = match parse_args(args.get(1..).unwrap_or_default()) {
        Ok(Command::Run(config)) => config,
        Ok(Command::Example) => {
            print_example_config();
            return;
        }
        Ok(Command::Help) => {
            print_usage(program);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            print_usage(program);
            std::process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Error: {}", e);
        print_usage(program);
        std::process::exit(1);
    }

    println!("Polyomino Enumerator v{}", env!("CARGO_PKG_VERSION"));
    println!("========================");
    println!();
    println!("Configuration:");
    println!("  Size (N): {}", config.size);
    println!("  Type: {}", config.mode);
    println!("  Output: {:?}", config.output.target);
    println!();
    println!("Starting enumeration...");

    let mut tracker = ProgressTracker::new(&config.progress);
    let result = Enumerator::from_config(&config).run_with_callback(|progress| {
        if let Err(e) = tracker.update(progress) {
            log::warn!("Progress display failed: {}", e);
        }
    });
    if let Err(e) = tracker.finish(result.len()) {
        log::warn!("Progress display failed: {}", e);
    }

    let mut failed = false;

    let mut stdout = io::stdout().lock();
    if let Err(e) = write_summary(&mut stdout, &result, &config.output) {
        eprintln!("Error writing results: {}", e);
        failed = true;
    }
    drop(stdout);

    if config.output.target.writes_file() {
        match export(&result, &config.output.path, config.output.format) {
            Ok(()) => println!("Results saved to {}", config.output.path.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                failed = true;
            }
        }
    }

    let validation = validate_count(config.mode, config.size, result.len() as u64);
    println!(
        "{}",
        validation_message(validation, config.size, config.mode)
    );

    if failed {
        std::process::exit(1);
    }
}

/// Parse `[N] [type] [show|file|both]`, `--config <file>`, `--example` or
/// `--help`.
fn parse_args(args: &[String]) -> Result<Command, String> {
    match args.first().map(String::as_str) {
        Some("-h" | "--help") => return Ok(Command::Help),
        Some("--example") => return Ok(Command::Example),
        Some("--config") => {
            let path = args
                .get(1)
                .map(PathBuf::from)
                .ok_or("--config requires a file path")?;
            return load_config(&path).map(Command::Run);
        }
        _ => {}
    }

    let mut config = EnumerationConfig::default();

    if let Some(n) = args.first() {
        config.size = n
            .parse()
            .map_err(|_| format!("Invalid size '{}'", n))?;
    }

    if let Some(mode) = args.get(1) {
        config.mode = mode.parse().map_err(|e| format!("{}", e))?;
    }

    if let Some(option) = args.get(2) {
        match option.as_str() {
            "show" => config.output.show_shapes = true,
            "file" => config.output.target = OutputTarget::File,
            "both" => config.output.target = OutputTarget::Both,
            other => return Err(format!("Unknown option '{}'", other)),
        }
    }

    if args.len() > 3 {
        return Err(format!("Unexpected argument '{}'", args[3]));
    }

    Ok(Command::Run(config))
}

fn load_config(path: &Path) -> Result<EnumerationConfig, String> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| format!("Error reading config file {}: {}", path.display(), e))?;
    serde_json::from_str(&config_str).map_err(|e| format!("Error parsing config: {}", e))
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [N] [type] [options]", program);
    eprintln!("       {} --config <config.json>", program);
    eprintln!("       {} --example", program);
    eprintln!();
    eprintln!("Enumerate all polyominoes of N cells.");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  N        Polyomino size (1-{}, default: 5)", MAX_SIZE);
    eprintln!("  type     free|one-sided|fixed (default: free)");
    eprintln!("  options  show|file|both (default: console only)");
    eprintln!();
    eprintln!("Set RUST_LOG=info for per-level log output.");
}

fn print_example_config() {
    let config = EnumerationConfig::default();

    println!("Example configuration (config.json):");
    match serde_json::to_string_pretty(&config) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing config: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polyomino_enum::schema::EquivalenceMode;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn run_config(list: &[&str]) -> EnumerationConfig {
        match parse_args(&args(list)) {
            Ok(Command::Run(config)) => config,
            _ => panic!("expected a run command for {:?}", list),
        }
    }

    #[test]
    fn test_defaults() {
        let config = run_config(&[]);
        assert_eq!(config.size, 5);
        assert_eq!(config.mode, EquivalenceMode::Free);
        assert_eq!(config.output.target, OutputTarget::Console);
    }

    #[test]
    fn test_positional_arguments() {
        let config = run_config(&["7", "one-sided", "both"]);
        assert_eq!(config.size, 7);
        assert_eq!(config.mode, EquivalenceMode::OneSided);
        assert_eq!(config.output.target, OutputTarget::Both);

        assert!(run_config(&["4", "fixed", "show"]).output.show_shapes);
    }

    #[test]
    fn test_invalid_arguments() {
        assert!(parse_args(&args(&["five"])).is_err());
        assert!(parse_args(&args(&["5", "mirror"])).is_err());
        assert!(parse_args(&args(&["5", "free", "print"])).is_err());
        assert!(parse_args(&args(&["5", "free", "show", "extra"])).is_err());
        assert!(parse_args(&args(&["--config"])).is_err());
    }

    #[test]
    fn test_flags() {
        assert!(matches!(parse_args(&args(&["--example"])), Ok(Command::Example)));
        assert!(matches!(parse_args(&args(&["-h"])), Ok(Command::Help)));
    }

    #[test]
    fn test_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "size": 6, "mode": "fixed" }"#).unwrap();

        let config = run_config(&["--config", path.to_str().unwrap()]);
        assert_eq!(config.size, 6);
        assert_eq!(config.mode, EquivalenceMode::Fixed);
    }
}
