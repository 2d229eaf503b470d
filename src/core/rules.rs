// File: src/core/rules.rs
use crate::config::KalScope;
use crate::core::types::Phoneme::*;
use crate::core::types::{flatten, Phoneme, Token};
use crate::error::{G2pError, Result};

/// One word under rewrite. Literals stay in place and match no pattern, so
/// a window spanning one never fires. `settled` marks positions the iterated
/// group has already rewritten; the group never touches them again, which
/// bounds the group at `len + 1` passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    pub tokens: Vec<Token>,
    settled: Vec<bool>,
}

impl Word {
    pub fn new(tokens: Vec<Token>) -> Self {
        let settled = vec![false; tokens.len()];
        Self { tokens, settled }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// `None` past either end and on literals.
    fn at(&self, i: usize) -> Option<Phoneme> {
        self.tokens.get(i).and_then(|t| t.phoneme())
    }

    fn is(&self, i: usize, p: Phoneme) -> bool {
        self.at(i) == Some(p)
    }

    fn is_c(&self, i: usize) -> bool {
        self.at(i).is_some_and(Phoneme::is_consonant)
    }

    fn set(&mut self, i: usize, to: Phoneme) {
        self.tokens[i] = to.into();
    }

    /// Group rewrite: refused once a position has settled.
    fn settle(&mut self, i: usize, to: Phoneme) -> bool {
        if self.settled[i] {
            return false;
        }
        self.set(i, to);
        self.settled[i] = true;
        true
    }

    fn symbols(&self) -> String {
        flatten(&self.tokens)
    }
}

/// Rule 1: the first syllable's schwa becomes `a`.
pub fn initial_schwa(w: &mut Word) -> bool {
    let Some(first) = w.tokens.iter().position(|t| t.is_vowel()) else {
        return false;
    };
    if !w.is(first, Schwa) {
        return false;
    }
    let single_cv = w.len() == 2 && w.is_c(0);
    let sv_onset = w.is(0, S) && w.is(1, V);
    let kar_onset = w.is(0, K) && w.is(1, Schwa) && w.is(2, R);
    if single_cv || sv_onset || kar_onset {
        return false;
    }
    w.set(first, A);
    true
}

/// Rule 2: schwa/`a` alternation after a consonant + r cluster.
pub fn r_context(w: &mut Word) -> bool {
    let mut changed = false;
    let mut i = 0;
    while i + 3 < w.len() {
        if w.is_c(i) && w.is(i + 1, R) && w.is_c(i + 3) {
            let to = match (w.at(i + 2), w.at(i + 3)) {
                // 2a: C r ə h
                (Some(Schwa), Some(H)) => Some(A),
                // 2b: C r ə C
                (Some(Schwa), _) => Some(A),
                // 2c: C r a C
                (Some(A), _) => Some(Schwa),
                _ => None,
            };
            if let Some(to) = to {
                if w.settle(i + 2, to) {
                    changed = true;
                    i += 4;
                    continue;
                }
            }
        }
        i += 1;
    }
    changed
}

/// Rule 3: V ə h, V in {a, e, æ, o, ə}.
pub fn schwa_before_h(w: &mut Word) -> bool {
    let mut changed = false;
    let mut i = 0;
    while i + 2 < w.len() {
        if matches!(w.at(i), Some(A | E | Ae | O | Schwa))
            && w.is(i + 1, Schwa)
            && w.is(i + 2, H)
            && w.settle(i + 1, A)
        {
            changed = true;
            i += 3;
            continue;
        }
        i += 1;
    }
    changed
}

/// Rule 4: ə C C.
pub fn schwa_before_cluster(w: &mut Word) -> bool {
    let mut changed = false;
    let mut i = 0;
    while i + 2 < w.len() {
        if w.is(i, Schwa) && w.is_c(i + 1) && w.is_c(i + 2) && w.settle(i, A) {
            changed = true;
            i += 3;
            continue;
        }
        i += 1;
    }
    changed
}

/// Rule 7: k ə {r,l} u.
pub fn k_liquid_u(w: &mut Word) -> bool {
    let mut changed = false;
    let mut i = 0;
    while i + 3 < w.len() {
        if w.is(i, K)
            && w.is(i + 1, Schwa)
            && matches!(w.at(i + 2), Some(R | L))
            && w.is(i + 3, U)
            && w.settle(i + 1, A)
        {
            changed = true;
            i += 4;
            continue;
        }
        i += 1;
    }
    changed
}

/// Rule 5: word-final ə C, unless C is r, b, ɖ or ʈ. A trailing literal
/// means the word does not end in a consonant.
pub fn final_consonant(w: &mut Word) -> bool {
    let n = w.len();
    if n >= 2
        && w.is(n - 2, Schwa)
        && w.is_c(n - 1)
        && !matches!(w.at(n - 1), Some(R | B | Dd | Tt))
    {
        w.set(n - 2, A);
        return true;
    }
    false
}

/// Rule 6: word-final ə j i.
pub fn final_yi(w: &mut Word) -> bool {
    let n = w.len();
    if n >= 3 && w.is(n - 3, Schwa) && w.is(n - 2, J) && w.is(n - 1, I) {
        w.set(n - 3, A);
        return true;
    }
    false
}

/// Rule 8: back to schwa in "kal" contexts. The pattern trigger also takes a
/// long `aː` after the `k`.
pub fn kal_context(w: &mut Word, scope: KalScope) -> bool {
    let pattern_hits: Vec<usize> = (0..w.len())
        .filter(|&i| {
            w.is(i, K)
                && matches!(w.at(i + 1), Some(A | Aa))
                && w.is(i + 2, L)
                && matches!(w.at(i + 3), Some(Aa | Ee | Oo))
                && w.is(i + 4, J)
        })
        .map(|i| i + 1)
        .collect();
    let prefix_hit = w.is(0, K) && w.is(1, A) && w.is(2, L);

    if scope == KalScope::Both && prefix_hit != pattern_hits.contains(&1) {
        log::debug!(
            "kal scopes disagree on /{}/: prefix={prefix_hit}, pattern={pattern_hits:?}",
            w.symbols()
        );
    }

    let mut changed = false;
    if matches!(scope, KalScope::Pattern | KalScope::Both) {
        for &i in &pattern_hits {
            w.set(i, Schwa);
            changed = true;
        }
    }
    if matches!(scope, KalScope::Prefix | KalScope::Both) && prefix_hit {
        w.set(1, Schwa);
        changed = true;
    }
    changed
}

/// Applies the ordered rule battery to a segmented word.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine {
    kal_scope: KalScope,
    max_passes: usize,
}

impl RuleEngine {
    pub fn new(kal_scope: KalScope, max_passes: usize) -> Self {
        Self {
            kal_scope,
            max_passes,
        }
    }

    /// Rewrites one word. Word-boundary rules look at the real first and
    /// last tokens, literals included.
    pub fn apply(&self, tokens: &[Token]) -> Result<Vec<Token>> {
        let mut w = Word::new(tokens.to_vec());
        initial_schwa(&mut w);
        self.run_group(&mut w)?;
        final_consonant(&mut w);
        final_yi(&mut w);
        kal_context(&mut w, self.kal_scope);
        Ok(w.tokens)
    }

    /// Rules 2, 3, 4 and 7, repeated until a pass changes nothing.
    pub fn run_group(&self, w: &mut Word) -> Result<usize> {
        for pass in 1..=self.max_passes {
            // Non-short-circuiting: every rule gets its pass.
            let changed =
                r_context(w) | schwa_before_h(w) | schwa_before_cluster(w) | k_liquid_u(w);
            if !changed {
                return Ok(pass);
            }
        }
        log::error!(
            "rule group still changing /{}/ after {} passes",
            w.symbols(),
            self.max_passes
        );
        Err(G2pError::RuleDivergence {
            word: w.symbols(),
            passes: self.max_passes,
        })
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        let config = crate::config::G2pConfig::default();
        Self::new(config.kal_scope, config.max_passes)
    }
}
