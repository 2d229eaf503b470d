// src/core/types.rs
use std::fmt;

/// One atomic unit of the phonemic working representation.
/// Multi-character IPA symbols (dental stops, affricates, prenasalized stops,
/// long vowels) are a single variant and are never split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phoneme {
    // Consonants
    K,
    G,
    Ng,
    NgG,
    C,
    Dz,
    Ny,
    NyDz,
    Tt,
    Dd,
    NDd,
    N,
    T,
    D,
    ND,
    P,
    B,
    M,
    MB,
    J,
    R,
    L,
    V,
    F,
    Sh,
    Ss,
    S,
    H,
    Ll,
    // Vowels
    A,
    Aa,
    Ae,
    Aee,
    I,
    Ii,
    U,
    Uu,
    E,
    Ee,
    O,
    Oo,
    Ai,
    Au,
    Ri,
    Ru,
    Ruu,
    Schwa,
}

impl Phoneme {
    pub fn symbol(self) -> &'static str {
        use Phoneme::*;
        match self {
            K => "k",
            G => "g",
            Ng => "ŋ",
            NgG => "ŋɡ",
            C => "c",
            Dz => "dʒ",
            Ny => "ɲ",
            NyDz => "ɲdʒ",
            Tt => "ʈ",
            Dd => "ɖ",
            NDd => "nɖ",
            N => "n",
            T => "t̪",
            D => "d̪",
            ND => "nd̪",
            P => "p",
            B => "b",
            M => "m",
            MB => "mb",
            J => "j",
            R => "r",
            L => "l",
            V => "v",
            F => "f",
            Sh => "ʃ",
            Ss => "ʂ",
            S => "s",
            H => "h",
            Ll => "ɭ",
            A => "a",
            Aa => "aː",
            Ae => "æ",
            Aee => "æː",
            I => "i",
            Ii => "iː",
            U => "u",
            Uu => "uː",
            E => "e",
            Ee => "eː",
            O => "o",
            Oo => "oː",
            Ai => "ai",
            Au => "au",
            Ri => "ri",
            Ru => "ru",
            Ruu => "ruː",
            Schwa => "ə",
        }
    }

    #[inline]
    pub fn is_vowel(self) -> bool {
        use Phoneme::*;
        matches!(
            self,
            A | Aa | Ae | Aee | I | Ii | U | Uu | E | Ee | O | Oo | Ai | Au | Ri | Ru | Ruu | Schwa
        )
    }

    #[inline]
    pub fn is_consonant(self) -> bool {
        !self.is_vowel()
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A token of one word: either a phonetic symbol or an input character the
/// script tables do not cover. Literals are opaque to the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Phoneme(Phoneme),
    Literal(char),
}

impl Token {
    pub fn phoneme(self) -> Option<Phoneme> {
        match self {
            Token::Phoneme(p) => Some(p),
            Token::Literal(_) => None,
        }
    }

    pub fn is_consonant(self) -> bool {
        self.phoneme().is_some_and(Phoneme::is_consonant)
    }

    pub fn is_vowel(self) -> bool {
        self.phoneme().is_some_and(Phoneme::is_vowel)
    }
}

impl From<Phoneme> for Token {
    fn from(p: Phoneme) -> Self {
        Token::Phoneme(p)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Phoneme(p) => f.write_str(p.symbol()),
            Token::Literal(c) => write!(f, "{c}"),
        }
    }
}

/// Concatenates tokens without separators.
pub fn flatten(tokens: &[Token]) -> String {
    let mut out = String::with_capacity(tokens.len() * 2);
    for tok in tokens {
        match tok {
            Token::Phoneme(p) => out.push_str(p.symbol()),
            Token::Literal(c) => out.push(*c),
        }
    }
    out
}
