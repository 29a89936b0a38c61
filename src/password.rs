use std::fmt;

use crate::errors::GeneratorError;
use crate::generators::{ GenerationOptions, UniformSource, build_alphabet, pick_index };

pub const MIN_LENGTH: usize = 1;
pub const MAX_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Password(String);

impl Password {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters, not bytes ('£' takes two bytes).
    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parses user-entered text as a password length. Anything that is not an
/// integer within `MIN_LENGTH..=MAX_LENGTH` is rejected, never clamped.
pub fn parse_length(input: &str) -> Result<usize, GeneratorError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| GeneratorError::invalid_length(input))?;

    usize::try_from(value)
        .ok()
        .filter(|length| (MIN_LENGTH..=MAX_LENGTH).contains(length))
        .ok_or_else(|| GeneratorError::invalid_length(input))
}

/// Generates a password of `length` characters, each drawn independently
/// from the alphabet of the enabled classes.
///
/// Options are checked before the length, so an empty selection is reported
/// as `InvalidOptions` whatever the length.
pub fn generate<S: UniformSource + ?Sized>(
    length: usize,
    options: &GenerationOptions,
    source: &mut S,
) -> Result<Password, GeneratorError> {
    let alphabet = build_alphabet(options);

    if alphabet.is_empty() {
        return Err(GeneratorError::InvalidOptions);
    }

    if !(MIN_LENGTH..=MAX_LENGTH).contains(&length) {
        return Err(GeneratorError::invalid_length(length.to_string()));
    }

    log::debug!("sampling {} characters from an alphabet of {}", length, alphabet.len());

    let password = (0..length)
        .map(|_| alphabet[pick_index(&mut *source, alphabet.len())])
        .collect();

    Ok(Password(password))
}

/// `generate` with the thread-local, system-seeded rng.
pub fn generate_with_thread_rng(
    length: usize,
    options: &GenerationOptions,
) -> Result<Password, GeneratorError> {
    let mut rng = rand::rng();

    generate(length, options, &mut rng)
}

/// A length still in its raw, user-entered form together with the classes to
/// draw from.
#[derive(Debug, Clone)]
pub struct PasswordRequest {
    pub length: String,
    pub options: GenerationOptions,
}

impl PasswordRequest {
    pub fn generate(&self) -> Result<Password, GeneratorError> {
        if !self.options.any_enabled() {
            return Err(GeneratorError::InvalidOptions);
        }

        let length = parse_length(&self.length)?;

        generate_with_thread_rng(length, &self.options)
    }
}
