// SPDX-License-Identifier: GPL-3.0-only

//! Softkeys command line tool
//!
//! Resolves a keyboard layout for the given context and prints it as JSON.
//! Useful for inspecting what a host would render for a configuration.

use clap::{Parser, ValueEnum};
use softkeys::app_settings;
use softkeys::config::load_config_file;
use softkeys::input::ShiftState;
use softkeys::layout::sizing::resolve_context_widths;
use softkeys::layout::{
    DeviceClass, KeyboardContext, KeyboardType, LayoutRegistry, Orientation, ReturnKeyType,
};
use std::path::PathBuf;
use std::process::ExitCode;

/// Screen widths (portrait, landscape) used for the printed layout.
const PHONE_WIDTH: (f32, f32) = (390.0, 844.0);
const TABLET_WIDTH: (f32, f32) = (820.0, 1180.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Device {
    Phone,
    Tablet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    Alphabetic,
    Numeric,
    Symbolic,
    Email,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Shift {
    Lower,
    Upper,
    Locked,
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReturnKey {
    Default,
    Done,
    Go,
    Search,
}

impl From<Shift> for ShiftState {
    fn from(shift: Shift) -> Self {
        match shift {
            Shift::Lower => ShiftState::Lowercased,
            Shift::Upper => ShiftState::Uppercased,
            Shift::Locked => ShiftState::CapsLocked,
            Shift::Auto => ShiftState::Auto,
        }
    }
}

impl From<ReturnKey> for ReturnKeyType {
    fn from(key: ReturnKey) -> Self {
        match key {
            ReturnKey::Default => ReturnKeyType::Default,
            ReturnKey::Done => ReturnKeyType::Done,
            ReturnKey::Go => ReturnKeyType::Go,
            ReturnKey::Search => ReturnKeyType::Search,
        }
    }
}

/// Print the keyboard layout for a context as JSON
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Engine configuration with extra locales and geometry overrides
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Device::Phone)]
    device: Device,

    #[arg(long, value_enum, default_value_t = Mode::Alphabetic)]
    mode: Mode,

    /// Shift state for alphabetic keyboards
    #[arg(long, value_enum, default_value_t = Shift::Auto)]
    shift: Shift,

    #[arg(long)]
    landscape: bool,

    /// Return key intent of the text field
    #[arg(long = "return", value_enum, default_value_t = ReturnKey::Default)]
    return_key: ReturnKey,

    /// Locale identifier, e.g. "sv" or "en-GB"
    #[arg(long, value_name = "ID")]
    locale: Option<String>,

    /// Print resolved key widths in points instead of the layout
    #[arg(long)]
    widths: bool,
}

impl Cli {
    fn keyboard_type(&self) -> KeyboardType {
        match self.mode {
            Mode::Alphabetic => KeyboardType::Alphabetic(self.shift.into()),
            Mode::Numeric => KeyboardType::Numeric,
            Mode::Symbolic => KeyboardType::Symbolic,
            Mode::Email => KeyboardType::Email,
        }
    }

    fn context(&self, registry: &LayoutRegistry) -> KeyboardContext {
        let (device, (portrait, landscape)) = match self.device {
            Device::Phone => (DeviceClass::Phone, PHONE_WIDTH),
            Device::Tablet => (DeviceClass::Tablet, TABLET_WIDTH),
        };
        let (orientation, width) = if self.landscape {
            (Orientation::Landscape, landscape)
        } else {
            (Orientation::Portrait, portrait)
        };

        let mut context = KeyboardContext::new(self.keyboard_type())
            .with_device(device)
            .with_orientation(orientation, width)
            .with_return_key_type(self.return_key.into())
            .with_multiple_locales(registry.locales().len() > 1);
        if let Some(locale) = &self.locale {
            context = context.with_locale(locale.clone());
        }
        context
    }

    fn registry(&self) -> Result<LayoutRegistry, String> {
        let Some(path) = &self.config else {
            return Ok(LayoutRegistry::new());
        };

        let path = path.to_string_lossy();
        let loaded = load_config_file(&path).map_err(|e| e.to_string())?;
        if loaded.has_warnings() {
            tracing::info!("Loaded '{}' with {} warning(s)", path, loaded.warnings.len());
        }
        Ok(loaded.into_registry())
    }
}

fn run(cli: &Cli) -> Result<String, String> {
    let registry = cli.registry()?;
    let context = cli.context(&registry);
    let layout = registry.keyboard_layout(&context);
    tracing::info!(
        "Resolved {} layout: {} rows, {} keys",
        context.keyboard_type,
        layout.row_count(),
        layout.actions().count()
    );

    let json = if cli.widths {
        serde_json::to_string_pretty(&resolve_context_widths(&layout, &context))
    } else {
        serde_json::to_string_pretty(&layout)
    };
    json.map_err(|e| e.to_string())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the layout
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = format!("{}=info", app_settings::APP_ID).parse() {
        filter = filter.add_directive(directive);
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(message) => {
            tracing::error!("{}", message);
            ExitCode::FAILURE
        }
    }
}
