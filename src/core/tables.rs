// src/core/tables.rs
// Sinhala script lookups. Aspirated and unaspirated letters of one phoneme map to
// the same token on purpose: output is phonemic, not phonetic.

use crate::core::types::Phoneme;

pub const ZWJ: char = '\u{200d}';
/// Hal kirima.
pub const VIRAMA: char = '\u{0dca}';
pub const RAYANNA: char = '\u{0dbb}';
pub const YAYANNA: char = '\u{0dba}';

/// Where a dependent vowel sign sits relative to its consonant in text order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignPlacement {
    PreBase,
    PostBase,
}

pub fn independent_vowel(c: char) -> Option<Phoneme> {
    use Phoneme::*;
    match c {
        'අ' => Some(A),
        'ආ' => Some(Aa),
        'ඇ' => Some(Ae),
        'ඈ' => Some(Aee),
        'ඉ' => Some(I),
        'ඊ' => Some(Ii),
        'උ' => Some(U),
        'ඌ' => Some(Uu),
        'ඍ' => Some(Ri),
        'ඎ' => Some(Ruu),
        'එ' => Some(E),
        'ඒ' => Some(Ee),
        'ඓ' => Some(Ai),
        'ඔ' => Some(O),
        'ඕ' => Some(Oo),
        'ඖ' => Some(Au),
        _ => None,
    }
}

pub fn consonant(c: char) -> Option<Phoneme> {
    use Phoneme::*;
    match c {
        'ක' | 'ඛ' => Some(K),
        'ග' | 'ඝ' => Some(G),
        'ඞ' => Some(Ng),
        'ඟ' => Some(NgG),
        'ච' | 'ඡ' => Some(C),
        'ජ' | 'ඣ' => Some(Dz),
        'ඤ' | 'ඥ' => Some(Ny),
        'ඦ' => Some(NyDz),
        'ට' | 'ඨ' => Some(Tt),
        'ඩ' | 'ඪ' => Some(Dd),
        'ඬ' => Some(NDd),
        'ණ' | 'න' => Some(N),
        'ත' | 'ථ' => Some(T),
        'ද' | 'ධ' => Some(D),
        'ඳ' => Some(ND),
        'ප' | 'ඵ' => Some(P),
        'බ' | 'භ' => Some(B),
        'ම' => Some(M),
        'ඹ' => Some(MB),
        'ය' => Some(J),
        'ර' => Some(R),
        'ල' => Some(L),
        'ව' => Some(V),
        'ෆ' => Some(F),
        'ශ' => Some(Sh),
        'ෂ' => Some(Ss),
        'ස' => Some(S),
        'හ' => Some(H),
        'ළ' => Some(Ll),
        _ => None,
    }
}

/// Dependent vowel signs (pili) with their vowel and orthographic placement.
/// The kombuva-based signs are the pre-base ones.
pub fn vowel_sign(c: char) -> Option<(Phoneme, SignPlacement)> {
    use Phoneme::*;
    use SignPlacement::*;
    match c {
        'ා' => Some((Aa, PostBase)),
        'ැ' => Some((Ae, PostBase)),
        'ෑ' => Some((Aee, PostBase)),
        'ි' => Some((I, PostBase)),
        'ී' => Some((Ii, PostBase)),
        'ු' => Some((U, PostBase)),
        'ූ' => Some((Uu, PostBase)),
        'ෘ' => Some((Ru, PostBase)),
        'ෲ' => Some((Ruu, PostBase)),
        'ෙ' => Some((E, PreBase)),
        'ේ' => Some((Ee, PreBase)),
        'ෛ' => Some((Ai, PreBase)),
        'ො' => Some((O, PreBase)),
        'ෝ' => Some((Oo, PreBase)),
        'ෞ' => Some((Au, PreBase)),
        _ => None,
    }
}

/// Anusvara and visarga.
pub fn special_sign(c: char) -> Option<Phoneme> {
    match c {
        'ං' => Some(Phoneme::Ng),
        'ඃ' => Some(Phoneme::H),
        _ => None,
    }
}
