use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use extension_icons::{
    Backend, DEFAULT_PREFIX, DEFAULT_SIZES, DEFAULT_SOURCE, DirectBackend, GenerateOptions,
    IconError, Progress, ResampleBackend, backend, generate_with,
};

#[derive(Parser)]
#[command(name = "extension-icons")]
#[command(about = "Render an SVG icon into PNG sizes for a browser extension")]
struct Cli {
    /// SVG source file
    #[arg(short, long, default_value = DEFAULT_SOURCE)]
    input: PathBuf,

    /// Directory to write the PNG files to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Comma separated icon sizes in pixels
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_values_t = DEFAULT_SIZES,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    sizes: Vec<u32>,

    /// Output file name prefix
    #[arg(short, long, default_value = DEFAULT_PREFIX)]
    prefix: String,

    /// Rendering backend
    #[arg(short, long, value_enum, default_value_t = BackendChoice::Auto)]
    backend: BackendChoice,

    /// Do not load system fonts (text elements may not render)
    #[arg(long)]
    no_system_fonts: bool,

    /// Print debug logs
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum BackendChoice {
    Auto,
    Direct,
    Resample,
}

impl BackendChoice {
    fn candidates(self) -> Vec<Box<dyn Backend>> {
        match self {
            BackendChoice::Auto => backend::candidates(),
            BackendChoice::Direct => vec![Box::new(DirectBackend)],
            BackendChoice::Resample => vec![Box::new(ResampleBackend)],
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let options = GenerateOptions {
        source: cli.input,
        sizes: cli.sizes,
        output_dir: cli.out_dir,
        prefix: cli.prefix,
        load_system_fonts: !cli.no_system_fonts,
    };

    let result = generate_with(&options, &cli.backend.candidates(), |event| match event {
        Progress::Started { backend } => {
            println!("Generating icons using {}...\n", backend);
        }
        Progress::Generated(icon) => {
            let name = icon
                .path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| icon.path.display().to_string());
            println!("Generated: {} ({}x{})", name, icon.size, icon.size);
        }
    });

    match result {
        Ok(report) => {
            let dir = fs::canonicalize(&report.output_dir).unwrap_or(report.output_dir);
            println!("\nAll icons generated successfully!");
            println!("Files are ready in: {}", dir.display());
        }
        Err(IconError::MissingInput { path }) => {
            eprintln!("Error: {} not found", path.display());
            process::exit(1);
        }
        Err(e @ IconError::MissingBackend { .. }) => {
            eprintln!("Error: {}", e);
            print_install_help();
            process::exit(1);
        }
        Err(IconError::Generation(e)) => {
            eprintln!("Error generating icons: {}", e);
            process::exit(1);
        }
    }
}

fn print_install_help() {
    eprintln!("\nInstall a build with a rendering backend:");
    eprintln!("   cargo install extension-icons --features direct");
    eprintln!("   or");
    eprintln!("   cargo install extension-icons --features resample");
    eprintln!("\nOr use an online converter: https://cloudconvert.com/svg-to-png");
}
