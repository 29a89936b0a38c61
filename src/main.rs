mod clipboard;
mod config;
mod errors;
mod generators;
mod password;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::config::Config;
use crate::generators::GenerationOptions;
use crate::password::PasswordRequest;

/// Generate a random password and copy it to the clipboard.
///
/// Passwords are drawn from a non-cryptographic random source.
#[derive(Parser, Debug)]
#[command(name = "passgen", version)]
struct Args {
    /// Password length (1-100)
    #[arg(short = 'L', long, allow_hyphen_values = true)]
    length: Option<String>,

    /// Leave out lowercase letters (a-z)
    #[arg(short = 'l', long, overrides_with = "lowercase")]
    no_lowercase: bool,

    /// Leave out uppercase letters (A-Z)
    #[arg(short = 'u', long, overrides_with = "uppercase")]
    no_uppercase: bool,

    /// Leave out digits (0-9)
    #[arg(short = 'n', long, overrides_with = "digits")]
    no_digits: bool,

    /// Leave out symbols
    #[arg(short = 's', long, overrides_with = "symbols")]
    no_symbols: bool,

    /// Include lowercase letters even if the config turns them off
    #[arg(long, overrides_with = "no_lowercase")]
    lowercase: bool,

    /// Include uppercase letters even if the config turns them off
    #[arg(long, overrides_with = "no_uppercase")]
    uppercase: bool,

    /// Include digits even if the config turns them off
    #[arg(long, overrides_with = "no_digits")]
    digits: bool,

    /// Include symbols even if the config turns them off
    #[arg(long, overrides_with = "no_symbols")]
    symbols: bool,

    /// Only print the password, don't copy it
    #[arg(long)]
    no_copy: bool,

    /// Read defaults from this file instead of the user config directory
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(1);
        }
    };

    let request = build_request(&args, &config);
    log::debug!("length {:?}, options {:?}", request.length, request.options);

    if !request.options.any_enabled() {
        eprintln!("Select at least one character type: lowercase, uppercase, digits or symbols.");
        return ExitCode::from(2);
    }

    let password = match request.generate() {
        Ok(password) => password,
        Err(e) => {
            eprintln!("Password generation failed: {}", e);
            return ExitCode::from(2);
        }
    };

    println!("{}", password);

    if config.copy_to_clipboard && !args.no_copy {
        match clipboard::copy_password(&password) {
            Ok(()) => eprintln!("Copied to clipboard."),
            Err(e) => log::warn!("Failed to copy password: {}", e),
        }
    }

    ExitCode::SUCCESS
}

fn build_request(args: &Args, config: &Config) -> PasswordRequest {
    let defaults = config.options();

    PasswordRequest {
        length: args.length.clone().unwrap_or_else(|| config.length.to_string()),
        options: GenerationOptions {
            lowercase: flag(defaults.lowercase, args.lowercase, args.no_lowercase),
            uppercase: flag(defaults.uppercase, args.uppercase, args.no_uppercase),
            digits: flag(defaults.digits, args.digits, args.no_digits),
            symbols: flag(defaults.symbols, args.symbols, args.no_symbols),
        },
    }
}

fn flag(default: bool, enable: bool, disable: bool) -> bool {
    if enable {
        true
    } else if disable {
        false
    } else {
        default
    }
}
