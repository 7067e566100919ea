//! # Sello CLI
//!
//! Command-line shell around the rendering pipeline.
//!
//! ## Usage
//!
//! ```bash
//! # Hello-world placeholder symbol, timestamped file name
//! sello generate
//!
//! # Encode a URL with rounded modules at high error correction
//! sello generate "https://example.com" --shape rounded --level H
//!
//! # Custom colors, persisted for future runs
//! sello generate "hello" --fg "#1A1A2E" --bg "#F0F0F0" --save-colors
//!
//! # Center a logo on the symbol (pick a high level for scannability)
//! sello generate "https://example.com" --level H --logo logo.png -o code.png
//!
//! # Flip the stored theme preference
//! sello theme
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use sello::{
    EcLevel, ModuleShape, SelloError, Session, StyleConfig,
    export,
    settings::{SETTINGS_FILE, Settings},
};

/// Sello - styled QR code generator
#[derive(Parser, Debug)]
#[command(name = "sello")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a styled QR code image
    Generate {
        /// Text or URL to encode (blank encodes a placeholder)
        content: Option<String>,

        /// Output file, .png/.jpg/.jpeg (defaults to qr-<timestamp>.png)
        #[arg(long, short, value_name = "FILE")]
        out: Option<PathBuf>,

        /// Module shape: square, rounded or circle
        #[arg(long, default_value = "square")]
        shape: String,

        /// Error correction level: L, M, Q or H
        #[arg(long, default_value = "M")]
        level: String,

        /// Foreground color as #RRGGBB (defaults to the saved setting)
        #[arg(long, value_name = "COLOR")]
        fg: Option<String>,

        /// Background color as #RRGGBB (defaults to the saved setting)
        #[arg(long, value_name = "COLOR")]
        bg: Option<String>,

        /// Logo image composited at the center of the symbol
        #[arg(long, value_name = "FILE")]
        logo: Option<PathBuf>,

        /// Persist the chosen colors for future runs
        #[arg(long)]
        save_colors: bool,
    },

    /// Toggle or set the stored theme preference
    Theme {
        /// Switch to the dark theme
        #[arg(long, conflicts_with = "light")]
        dark: bool,

        /// Switch to the light theme
        #[arg(long)]
        light: bool,
    },
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SelloError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            content,
            out,
            shape,
            level,
            fg,
            bg,
            logo,
            save_colors,
        } => {
            let mut settings = Settings::load(SETTINGS_FILE);

            let shape: ModuleShape = shape.parse()?;
            let level: EcLevel = level.parse()?;
            let foreground = match &fg {
                Some(hex) => hex.parse()?,
                None => settings.foreground(),
            };
            let background = match &bg {
                Some(hex) => hex.parse()?,
                None => settings.background(),
            };

            let style = StyleConfig::new()
                .error_correction(level)
                .shape(shape)
                .foreground(foreground)
                .background(background);

            let mut session = Session::new(content.unwrap_or_default(), style, Instant::now());
            if let Some(path) = logo {
                session.set_logo(path, Instant::now())?;
                if level == EcLevel::L {
                    log::warn!(
                        "A logo overwrites modules; level L may not scan reliably, consider --level H"
                    );
                }
            }

            let out = out.unwrap_or_else(|| PathBuf::from(export::default_file_name()));
            session.export(&out)?;
            println!("Saved to {}", out.display());

            if save_colors {
                settings.set_colors(foreground, background);
                settings.save(SETTINGS_FILE)?;
                println!("Colors saved as defaults");
            }
        }

        Commands::Theme { dark, light } => {
            let mut settings = Settings::load(SETTINGS_FILE);
            match (dark, light) {
                (true, _) => settings.dark_theme = true,
                (_, true) => settings.dark_theme = false,
                _ => settings.toggle_theme(),
            }
            settings.save(SETTINGS_FILE)?;
            println!(
                "Theme preference: {}",
                if settings.dark_theme { "dark" } else { "light" }
            );
        }
    }

    Ok(())
}
