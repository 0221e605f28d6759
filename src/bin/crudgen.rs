use clap::Parser;
use crudgen::interface::cli::{Cli, Commands};
use crudgen::interface::output::print_generation_summary;
use crudgen::GenerateConfig;

fn main() {
    let args = Cli::parse();

    match &args.command {
        Commands::Generate { config_file, .. } => {
            let mut config = match config_file {
                Some(path) => match GenerateConfig::from_file(path) {
                    Ok(config) => config,
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                },
                None => GenerateConfig::default(),
            };
            // Explicit command-line flags win over the config file.
            config.merge(&GenerateConfig::from(&args.command));

            match crudgen::generate_from_config(&config) {
                Ok(documents) => print_generation_summary(&documents),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}
