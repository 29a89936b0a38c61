use rand::Rng;

const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
// '.' and ':' are listed twice, so they come up twice as often.
const SYMBOLS: &str = "!\"£$%&/()=?^'*+-_.:,;.:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Every class, in the order their characters appear in an alphabet.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn charset(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digits => DIGITS,
            CharacterClass::Symbols => SYMBOLS,
        }
    }
}

/// Which character classes a password may draw from. All four flags must be
/// given explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationOptions {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl GenerationOptions {
    pub fn is_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.lowercase,
            CharacterClass::Uppercase => self.uppercase,
            CharacterClass::Digits => self.digits,
            CharacterClass::Symbols => self.symbols,
        }
    }

    pub fn any_enabled(&self) -> bool {
        CharacterClass::ALL.iter().any(|class| self.is_enabled(*class))
    }
}

/// Concatenates the charsets of the enabled classes in `CharacterClass::ALL`
/// order. Duplicates are kept. Empty when nothing is enabled.
pub fn build_alphabet(options: &GenerationOptions) -> Vec<char> {
    CharacterClass::ALL
        .iter()
        .filter(|class| options.is_enabled(**class))
        .flat_map(|class| class.charset().chars())
        .collect()
}

/// A source of uniformly distributed values in `[0, 1)`.
///
/// Not required to be cryptographically secure.
pub trait UniformSource {
    fn next_unit(&mut self) -> f64;
}

impl<R: Rng> UniformSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Maps one draw from `source` onto an index in `0..len`. `len` must be non-zero.
pub fn pick_index<S: UniformSource + ?Sized>(source: &mut S, len: usize) -> usize {
    let index = (source.next_unit() * len as f64).floor() as usize;

    // a source returning 1.0 or more would land past the end
    index.min(len - 1)
}
