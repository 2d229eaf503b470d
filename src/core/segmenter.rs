// File: src/core/segmenter.rs
use crate::config::VowelSignMode;
use crate::core::tables::{
    consonant, independent_vowel, special_sign, vowel_sign, SignPlacement, RAYANNA, VIRAMA,
    YAYANNA, ZWJ,
};
use crate::core::types::{Phoneme, Token};

/// The vowel position opened after the most recent consonant.
#[derive(Debug, Clone, Copy)]
struct Slot {
    index: usize,
    modified: bool,
}

#[derive(Default)]
struct Scan {
    out: Vec<Token>,
    slot: Option<Slot>,
    pending: Option<Phoneme>,
}

impl Scan {
    /// The slot, but only while nothing has been appended after it.
    fn live_slot(&self) -> Option<Slot> {
        self.slot.filter(|s| s.index + 1 == self.out.len())
    }

    fn open_syllable(&mut self, base: Phoneme) {
        self.out.push(base.into());
        self.open_slot(Phoneme::Schwa, false);
    }

    fn open_slot(&mut self, vowel: Phoneme, modified: bool) {
        self.out.push(vowel.into());
        self.slot = Some(Slot {
            index: self.out.len() - 1,
            modified,
        });
    }

    fn fill_slot(&mut self, vowel: Phoneme) {
        match self.live_slot() {
            Some(slot) => {
                self.out[slot.index] = vowel.into();
                self.slot = Some(Slot {
                    modified: true,
                    ..slot
                });
            }
            None => self.push(vowel.into()),
        }
    }

    /// Virama: the inherent vowel goes away if it is still the untouched tail.
    fn kill_slot(&mut self) {
        if let Some(slot) = self.live_slot() {
            if !slot.modified {
                self.out.pop();
            }
        }
        self.slot = None;
    }

    fn push(&mut self, tok: Token) {
        self.out.push(tok);
        self.slot = None;
    }

    /// A buffered pre-base sign that found no consonant after it.
    fn flush_pending(&mut self) {
        if let Some(vowel) = self.pending.take() {
            self.fill_slot(vowel);
        }
    }
}

/// Turns one orthographic word into the initial phoneme sequence: each bare
/// consonant gets an inherent schwa, signs and virama then rewrite that slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct Segmenter {
    mode: VowelSignMode,
}

impl Segmenter {
    pub fn new(mode: VowelSignMode) -> Self {
        Self { mode }
    }

    fn placement(&self, placement: SignPlacement) -> SignPlacement {
        match self.mode {
            VowelSignMode::PreBase => placement,
            VowelSignMode::PostBase => SignPlacement::PostBase,
        }
    }

    fn post_base_sign(&self, c: char) -> Option<Phoneme> {
        vowel_sign(c)
            .filter(|&(_, placement)| self.placement(placement) == SignPlacement::PostBase)
            .map(|(vowel, _)| vowel)
    }

    /// Never fails: characters outside the script tables come back as literals.
    pub fn segment(&self, word: &str) -> Vec<Token> {
        let chars: Vec<char> = word.chars().collect();
        let mut scan = Scan::default();
        let mut i = 0;

        while i < chars.len() {
            let ch = chars[i];

            if ch == ZWJ {
                i += 1;
                continue;
            }

            if consonant(ch).is_some() {
                // Repaya: ර් written over the next consonant.
                let repaya = ch == RAYANNA
                    && chars.get(i + 1) == Some(&VIRAMA)
                    && chars.get(i + 2).copied().and_then(consonant).is_some();
                if repaya {
                    scan.push(Phoneme::R.into());
                    i += 2;
                }
                i = self.consonant_cluster(&chars, i, &mut scan);
                continue;
            }

            if let Some(vowel) = independent_vowel(ch) {
                scan.flush_pending();
                scan.push(vowel.into());
            } else if let Some((vowel, placement)) = vowel_sign(ch) {
                scan.flush_pending();
                match self.placement(placement) {
                    SignPlacement::PreBase => scan.pending = Some(vowel),
                    // No host consonant left to attach to.
                    SignPlacement::PostBase => scan.push(vowel.into()),
                }
            } else if let Some(sign) = special_sign(ch) {
                scan.flush_pending();
                scan.push(sign.into());
            } else if ch == VIRAMA {
                scan.flush_pending();
                scan.kill_slot();
            } else {
                scan.flush_pending();
                scan.push(Token::Literal(ch));
            }
            i += 1;
        }

        scan.flush_pending();
        scan.out
    }

    /// Handles the consonant at `i` with everything that hangs off it and
    /// returns the index of the first character not consumed.
    fn consonant_cluster(&self, chars: &[char], i: usize, scan: &mut Scan) -> usize {
        let Some(base) = consonant(chars[i]) else {
            return i + 1;
        };
        scan.open_syllable(base);
        if let Some(vowel) = scan.pending.take() {
            scan.fill_slot(vowel);
        }

        let mut j = i + 1;
        if chars.get(j) == Some(&ZWJ) {
            j += 1;
        }

        // Rakaransaya / yansaya: virama + ZWJ + ර|ය.
        if chars.get(j) == Some(&VIRAMA) && chars.get(j + 1) == Some(&ZWJ) {
            let glide = match chars.get(j + 2) {
                Some(&RAYANNA) => Some(Phoneme::R),
                Some(&YAYANNA) => Some(Phoneme::J),
                _ => None,
            };
            if let Some(glide) = glide {
                // The glide follows the host directly; only an explicit sign
                // gives the cluster a vowel.
                scan.kill_slot();
                scan.push(glide.into());
                j += 3;
                if let Some(vowel) = chars.get(j).and_then(|&c| self.post_base_sign(c)) {
                    scan.open_slot(vowel, true);
                    j += 1;
                }
                return j;
            }
        }

        // Malformed input may stack several signs; the last one wins.
        while let Some(vowel) = chars.get(j).and_then(|&c| self.post_base_sign(c)) {
            scan.fill_slot(vowel);
            j += 1;
        }

        if chars.get(j) == Some(&VIRAMA) {
            scan.kill_slot();
            j += 1;
        }
        j
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::flatten;
    use crate::core::types::Phoneme::*;

    fn ph(tokens: &[Token]) -> Vec<Phoneme> {
        tokens.iter().filter_map(|t| t.phoneme()).collect()
    }

    fn pre() -> Segmenter {
        Segmenter::new(VowelSignMode::PreBase)
    }

    fn post() -> Segmenter {
        Segmenter::new(VowelSignMode::PostBase)
    }

    #[test]
    fn bare_consonant_gets_schwa() {
        assert_eq!(ph(&pre().segment("ද")), vec![D, Schwa]);
        assert_eq!(ph(&pre().segment("කම")), vec![K, Schwa, M, Schwa]);
    }

    #[test]
    fn repaya_keeps_default_schwa() {
        assert_eq!(ph(&pre().segment("ර්ක")), vec![R, K, Schwa]);
    }

    #[test]
    fn repaya_takes_following_signs_and_virama() {
        // කාර්යය
        assert_eq!(
            ph(&post().segment("කාර්යය")),
            vec![K, Aa, R, J, Schwa, J, Schwa]
        );
        // ර්ක්
        assert_eq!(ph(&pre().segment("ර්ක්")), vec![R, K]);
    }

    #[test]
    fn post_base_sign_overwrites_slot() {
        assert_eq!(ph(&pre().segment("කා")), vec![K, Aa]);
        assert_eq!(ph(&pre().segment("කි")), vec![K, I]);
    }

    #[test]
    fn virama_cancels_inherent_vowel() {
        assert_eq!(ph(&pre().segment("අම්මා")), vec![A, M, M, Aa]);
    }

    #[test]
    fn virama_does_not_remove_explicit_vowel() {
        assert_eq!(ph(&pre().segment("කා්")), vec![K, Aa]);
    }

    #[test]
    fn rakaransaya_and_yansaya() {
        // ශ්‍රී
        assert_eq!(
            ph(&pre().segment("ශ\u{0dca}\u{200d}රී")),
            vec![Sh, R, Ii]
        );
        // ප්‍ර with no sign: no vowel between the glide and the next consonant
        assert_eq!(
            ph(&pre().segment("ප\u{0dca}\u{200d}රම")),
            vec![P, R, M, Schwa]
        );
        // ව්‍යා
        assert_eq!(
            ph(&pre().segment("ව\u{0dca}\u{200d}යා")),
            vec![V, J, Aa]
        );
    }

    #[test]
    fn joiner_before_virama_is_skipped() {
        // ත‍්‍රී as found in older text
        assert_eq!(
            ph(&pre().segment("ත\u{200d}\u{0dca}\u{200d}රී")),
            vec![T, R, Ii]
        );
    }

    #[test]
    fn pre_base_sign_attaches_to_following_consonant() {
        assert_eq!(ph(&pre().segment("ෙකම")), vec![K, E, M, Schwa]);
        assert_eq!(ph(&pre().segment("කෙම")), vec![K, Schwa, M, E]);
    }

    #[test]
    fn post_base_mode_attaches_every_sign_backwards() {
        assert_eq!(ph(&post().segment("කෙම")), vec![K, E, M, Schwa]);
        assert_eq!(ph(&post().segment("ගෝ")), vec![G, Oo]);
    }

    #[test]
    fn dangling_pre_base_sign_falls_back_to_previous_slot() {
        assert_eq!(ph(&pre().segment("කෙ")), vec![K, E]);
        assert_eq!(ph(&pre().segment("ෙ")), vec![E]);
    }

    #[test]
    fn pre_base_sign_stays_on_rakaransaya_host() {
        assert_eq!(
            ph(&pre().segment("ෙප\u{0dca}\u{200d}ර")),
            vec![P, E, R]
        );
    }

    #[test]
    fn rakaransaya_takes_one_following_sign() {
        // ක්‍රා
        assert_eq!(
            ph(&post().segment("ක\u{0dca}\u{200d}රා")),
            vec![K, R, Aa]
        );
        // ග්‍රෙ in post-base mode
        assert_eq!(
            ph(&post().segment("ග\u{0dca}\u{200d}රෙ")),
            vec![G, R, E]
        );
    }

    #[test]
    fn bare_sign_is_emitted_directly() {
        assert_eq!(ph(&pre().segment("ා")), vec![Aa]);
        assert_eq!(ph(&pre().segment("අි")), vec![A, I]);
    }

    #[test]
    fn stray_virama_is_a_noop() {
        assert_eq!(ph(&pre().segment("්")), Vec::<Phoneme>::new());
        assert_eq!(ph(&pre().segment("අ්")), vec![A]);
    }

    #[test]
    fn late_virama_does_not_reach_back() {
        // The literal sits between the consonant and the virama.
        let tokens = pre().segment("ක-්");
        assert_eq!(
            tokens,
            vec![K.into(), Schwa.into(), Token::Literal('-')]
        );
    }

    #[test]
    fn special_signs() {
        assert_eq!(ph(&pre().segment("කං")), vec![K, Schwa, Ng]);
        assert_eq!(ph(&pre().segment("දුඃ")), vec![D, U, H]);
    }

    #[test]
    fn literals_pass_through_in_place() {
        let tokens = pre().segment("(ක1)");
        assert_eq!(
            tokens,
            vec![
                Token::Literal('('),
                K.into(),
                Schwa.into(),
                Token::Literal('1'),
                Token::Literal(')'),
            ]
        );
        assert_eq!(flatten(&tokens), "(kə1)");
    }

    #[test]
    fn empty_word() {
        assert!(pre().segment("").is_empty());
    }

    #[test]
    fn every_consonant_is_followed_by_a_vowel() {
        for word in ["කමල", "ගෙදර", "පාසල", "මුදලක", "හතර", "ළමයි", "බලනවා"] {
            for mode in [VowelSignMode::PreBase, VowelSignMode::PostBase] {
                let tokens = Segmenter::new(mode).segment(word);
                for (k, tok) in tokens.iter().enumerate() {
                    if tok.is_consonant() {
                        assert!(
                            tokens.get(k + 1).is_some_and(|t| t.is_vowel()),
                            "{word}: consonant at {k} not followed by a vowel in {tokens:?}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn cluster_productions_are_the_only_consonant_pairs() {
        // ප්‍රවර්තන: rakaransaya, then repaya over ත
        let word = "ප\u{0dca}\u{200d}රවර\u{0dca}තන";
        for mode in [VowelSignMode::PreBase, VowelSignMode::PostBase] {
            let tokens = ph(&Segmenter::new(mode).segment(word));
            assert_eq!(tokens, vec![P, R, V, Schwa, R, T, Schwa, N, Schwa]);
            let pairs: Vec<(Phoneme, Phoneme)> = tokens
                .windows(2)
                .filter(|w| w[0].is_consonant() && w[1].is_consonant())
                .map(|w| (w[0], w[1]))
                .collect();
            assert_eq!(pairs, vec![(P, R), (R, V), (R, T)]);
        }
    }
}
