//! Источники случайности для генерации раздач (`ranker_stress`, тесты).
//!
//! Сам ранжировщик случайность не использует: колода тасуется только
//! там, где раздачи придумываются, а не читаются из ввода.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng, SeedableRng};

use crate::engine::RandomSource;

/// Тасовка Фишера–Йетса через любой `rand::Rng`.
fn shuffle_with<T, G: Rng + ?Sized>(slice: &mut [T], rng: &mut G) {
    slice.shuffle(rng);
}

/// Системный RNG: каждый запуск стресс-прогона без `--seed` даёт новые раздачи.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        shuffle_with(slice, &mut thread_rng());
    }
}

/// RNG с фиксированным seed: `ranker_stress --seed N` и тесты на случайных
/// раздачах повторяют одну и ту же последовательность колод.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    seed: u64,
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed, с которого начат поток (для сообщений о сбоях стресс-прогона).
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        shuffle_with(slice, &mut self.inner);
    }
}
