// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Corpus bounds and the uniform random draw.

use std::fmt;

use rand::Rng;

use crate::error::CorpusError;

/// Number of ayat served by the default API.
pub const QURAN_AYAT: u16 = 6348;

/// The remote corpus, identified only by its size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corpus {
    size: u16,
}

impl Corpus {
    /// The Quran as served by api.alquran.cloud.
    pub const QURAN: Self = Self { size: QURAN_AYAT };

    /// Corpus with `size` units. Returns `None` for an empty corpus.
    pub fn new(size: u16) -> Option<Self> {
        (size > 0).then_some(Self { size })
    }

    /// Number of retrievable units.
    pub fn size(self) -> u16 {
        self.size
    }

    /// Uniform draw over `1..=size`.
    pub fn draw<R>(self, rng: &mut R) -> AyahNumber
    where
        R: Rng + ?Sized,
    {
        AyahNumber(rng.gen_range(1..=self.size))
    }
}

impl Default for Corpus {
    fn default() -> Self {
        Self::QURAN
    }
}

/// A 1-based ayah number known to lie inside its corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AyahNumber(u16);

impl AyahNumber {
    /// Validate `number` against `corpus`.
    pub fn new(number: u16, corpus: Corpus) -> Result<Self, CorpusError> {
        if (1..=corpus.size).contains(&number) {
            Ok(Self(number))
        } else {
            Err(CorpusError {
                number,
                size: corpus.size,
            })
        }
    }

    /// Raw number.
    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for AyahNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_corpus_is_rejected() {
        assert!(Corpus::new(0).is_none());
        assert_eq!(Corpus::new(7).map(Corpus::size), Some(7));
    }

    #[test]
    fn ayah_number_bounds_are_inclusive() {
        let corpus = Corpus::QURAN;
        assert!(AyahNumber::new(1, corpus).is_ok());
        assert!(AyahNumber::new(QURAN_AYAT, corpus).is_ok());
        assert_eq!(
            AyahNumber::new(0, corpus),
            Err(CorpusError {
                number: 0,
                size: QURAN_AYAT
            })
        );
        assert!(AyahNumber::new(QURAN_AYAT + 1, corpus).is_err());
    }

    #[test]
    fn single_unit_corpus_always_draws_one() {
        let corpus = Corpus::new(1).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..32 {
            assert_eq!(corpus.draw(&mut rng).get(), 1);
        }
    }

    #[test]
    fn small_corpus_reaches_both_ends() {
        let corpus = Corpus::new(3).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let seen: std::collections::BTreeSet<u16> =
            (0..256).map(|_| corpus.draw(&mut rng).get()).collect();
        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
