//! # Etiqueta CLI
//!
//! Command-line interface for compiling label projects to printer languages
//! and importing legacy PPLA programs.
//!
//! ## Usage
//!
//! ```bash
//! # List available printer languages
//! etiqueta languages
//!
//! # Compile a project to ZPL on stdout
//! etiqueta compile label-project.json
//!
//! # Compile to PPLA and write next to the project
//! etiqueta compile --language PPLA --output etiqueta.ppla label-project.json
//!
//! # Import a legacy PPLA program into a project file
//! etiqueta import legacy.ppla --output label-project.json
//!
//! # Render a compiled ZPL preview via the Labelary service
//! etiqueta preview label-project.json
//! ```

use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

use etiqueta::{
    EtiquetaError, Project, Registry,
    import::{self, ppla},
    label::LabelConfig,
};

/// Etiqueta - label printer language compiler
#[derive(Parser, Debug)]
#[command(name = "etiqueta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the printer languages in the registry
    Languages,

    /// Compile a project file to printer language text
    Compile {
        /// Project file (JSON element list + label config)
        project: PathBuf,

        /// Target language id (see `languages`)
        #[arg(long, short, default_value = "ZPL")]
        language: String,

        /// Write the program here instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Decode a legacy PPLA program into a project file
    Import {
        /// Raw PPLA text file
        file: PathBuf,

        /// Write the project here instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report every skipped line
        #[arg(long)]
        verbose: bool,
    },

    /// Compile a project and open a rendering preview
    Preview {
        /// Project file (JSON element list + label config)
        project: PathBuf,

        /// Target language id (see `languages`)
        #[arg(long, short, default_value = "ZPL")]
        language: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), EtiquetaError> {
    let registry = Registry::standard();

    match cli.command {
        Commands::Languages => {
            for info in registry.languages() {
                println!(
                    "{:5} {} — {} ({}, .{})",
                    info.id, info.name, info.description, info.manufacturer, info.file_extension
                );
            }
            Ok(())
        }

        Commands::Compile {
            project,
            language,
            output,
        } => {
            let project = load_project(&project)?;
            let code = registry.compile(&language, &project.elements)?;
            match output {
                Some(path) => fs::write(path, code)?,
                None => println!("{code}"),
            }
            Ok(())
        }

        Commands::Import {
            file,
            output,
            verbose,
        } => {
            let text = fs::read_to_string(file)?;
            let decode = ppla::decode(&text);
            let elements = decode.elements();
            let dims = import::estimate(&elements);

            if verbose {
                for skip in &decode.skipped {
                    eprintln!("line {}: skipped ({})", skip.line + 1, skip.reason);
                }
            }
            eprintln!(
                "Imported {} element(s), {} line(s) skipped; canvas {}x{}mm",
                elements.len(),
                decode.skipped.len(),
                dims.width_mm,
                dims.height_mm
            );

            let project = Project {
                config: LabelConfig {
                    width_mm: dims.width_mm,
                    height_mm: dims.height_mm,
                    ..LabelConfig::default()
                },
                elements,
            };
            let json = serde_json::to_string_pretty(&project)?;
            match output {
                Some(path) => fs::write(path, json)?,
                None => println!("{json}"),
            }
            Ok(())
        }

        Commands::Preview { project, language } => {
            let project = load_project(&project)?;
            let code = registry.compile(&language, &project.elements)?;
            registry.preview(&language, &code)?;
            eprintln!("Preview request sent.");
            Ok(())
        }
    }
}

fn load_project(path: &PathBuf) -> Result<Project, EtiquetaError> {
    let json = fs::read_to_string(path)?;
    let project = serde_json::from_str(&json)?;
    Ok(project)
}
