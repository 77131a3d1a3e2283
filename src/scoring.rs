use crate::error::GameError;
use std::collections::HashMap;
use std::fmt;

/// Outcome for a single letter of a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Right letter, right position (green)
    Correct,
    /// Right letter, wrong position (yellow)
    Present,
    /// Letter not available at that multiplicity (gray)
    Absent,
}

impl Verdict {
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'G' => Some(Self::Correct),
            'Y' => Some(Self::Present),
            'X' => Some(Self::Absent),
            _ => None,
        }
    }

    #[must_use]
    pub fn to_char(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => 'X',
        }
    }

    #[must_use]
    pub fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬛',
        }
    }
}

/// A guess paired letter by letter with its verdicts.
///
/// Letters keep the case the player typed; only the comparison is case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredGuess {
    letters: Vec<(char, Verdict)>,
}

impl ScoredGuess {
    #[must_use]
    pub fn letters(&self) -> &[(char, Verdict)] {
        &self.letters
    }

    pub fn verdicts(&self) -> impl Iterator<Item = Verdict> + '_ {
        self.letters.iter().map(|&(_, verdict)| verdict)
    }

    /// The guess as typed.
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|&(letter, _)| letter).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// True when every letter is `Correct`.
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.verdicts().all(|verdict| verdict == Verdict::Correct)
    }

    /// Share-style line such as `🟩🟨⬛⬛🟩`.
    #[must_use]
    pub fn to_emoji_string(&self) -> String {
        self.verdicts().map(Verdict::to_emoji).collect()
    }
}

impl fmt::Display for ScoredGuess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes: String = self.verdicts().map(Verdict::to_char).collect();
        write!(f, "{codes}")
    }
}

fn fold_case(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Score `guess` against `target` with multiset letter semantics.
///
/// Exact matches are settled for the whole word before any letter is marked `Present`, so a
/// misplaced letter can never take a count an exact match needs.
///
/// # Errors
///
/// Returns `GameError::LengthMismatch` if the two words differ in length.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoredGuess, GameError> {
    let guess_chars: Vec<char> = guess.chars().collect();
    let target_folded: Vec<char> = target.chars().map(fold_case).collect();

    if guess_chars.len() != target_folded.len() {
        return Err(GameError::LengthMismatch {
            expected: target_folded.len(),
            actual: guess_chars.len(),
        });
    }

    let mut remaining: HashMap<char, usize> = HashMap::new();
    for &c in &target_folded {
        *remaining.entry(c).or_insert(0) += 1;
    }

    let mut verdicts = vec![Verdict::Absent; guess_chars.len()];

    // First pass: exact matches
    for (i, &c) in guess_chars.iter().enumerate() {
        let folded = fold_case(c);
        if folded == target_folded[i] {
            verdicts[i] = Verdict::Correct;
            if let Some(count) = remaining.get_mut(&folded) {
                *count -= 1;
            }
        }
    }

    // Second pass: misplaced letters
    for (i, &c) in guess_chars.iter().enumerate() {
        if verdicts[i] == Verdict::Correct {
            continue;
        }
        if let Some(count) = remaining.get_mut(&fold_case(c))
            && *count > 0
        {
            verdicts[i] = Verdict::Present;
            *count -= 1;
        }
    }

    Ok(ScoredGuess {
        letters: guess_chars.into_iter().zip(verdicts).collect(),
    })
}
