// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Property checks: random draws stay within the corpus range.
#![allow(clippy::unwrap_used)]
use ayah_core::{AyahNumber, Corpus, WidgetConfig};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

proptest! {
    #[test]
    fn quran_draws_stay_in_range(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..64 {
            let n = Corpus::QURAN.draw(&mut rng).get();
            prop_assert!((1..=6348).contains(&n));
        }
    }

    #[test]
    fn any_corpus_draws_stay_in_range(seed in any::<u64>(), size in 1u16..=u16::MAX) {
        let corpus = Corpus::new(size).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let drawn = corpus.draw(&mut rng);
        prop_assert!(drawn.get() >= 1 && drawn.get() <= size);
        prop_assert_eq!(AyahNumber::new(drawn.get(), corpus), Ok(drawn));
    }

    #[test]
    fn urls_end_in_the_drawn_number(seed in any::<u64>()) {
        let config = WidgetConfig::default();
        let mut rng = StdRng::seed_from_u64(seed);
        let ayah = config.corpus().draw(&mut rng);
        let url = config.ayah_url(ayah);
        prop_assert_eq!(url, format!("https://api.alquran.cloud/v1/ayah/{}", ayah.get()));
    }
}
