use md2nb_config::Config;
use md2nb_engine::io;
use md2nb_engine::notebook::NotebookMetadata;
use std::{env, path::PathBuf, process};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <input.md> <output.ipynb>", args[0]);
        process::exit(1);
    }

    let input_path = PathBuf::from(&args[1]);
    let output_path = PathBuf::from(&args[2]);

    // Kernel metadata comes from the config file when one exists
    let metadata = match Config::load() {
        Ok(Some(config)) => {
            log::info!(
                "Using kernel metadata from {}",
                Config::config_path().display()
            );
            config.into_metadata()
        }
        Ok(None) => NotebookMetadata::default(),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match io::convert_with_metadata(&input_path, &output_path, metadata) {
        Ok(cell_count) => {
            println!(
                "Converted {} -> {} ({} cells)",
                input_path.display(),
                output_path.display(),
                cell_count
            );
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
