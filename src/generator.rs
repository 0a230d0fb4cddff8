/*-
 * #%L
 * TPCC Bench Framework
 * %%
 * Copyright (C) 2023 OceanBase
 * %%
 * TPCC Bench Framework is licensed under Mulan PSL v2.
 * You can use this software according to the terms and conditions of the
 * Mulan PSL v2. You may obtain a copy of Mulan PSL v2 at:
 *          http://license.coscl.org.cn/MulanPSL2
 * THIS SOFTWARE IS PROVIDED ON AN "AS IS" BASIS, WITHOUT WARRANTIES OF ANY
 * KIND, EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO
 * NON-INFRINGEMENT, MERCHANTABILITY OR FIT FOR A PARTICULAR PURPOSE.
 * See the Mulan PSL v2 for more details.
 * #L%
 */

//! Randomized input draws following the TPC-C distributions. Every
//! function takes the random source explicitly so input generation is a
//! pure function of (scope params, RNG state).

use rand::Rng;

/// NURand A constant for last-name selection (num in [0, 999]).
pub const A_C_LAST: u32 = 255;
/// NURand A constant for customer-id selection (id in [1, 3000]).
pub const A_C_ID: u32 = 1023;
/// Fixed per-field skew constants (C in the NURand formula).
pub const C_C_LAST: u32 = 173;
pub const C_C_ID: u32 = 259;

/// Syllable table for synthesized customer last names. Shared with the
/// data loader so name distributions stay consistent across the bench.
pub const LAST_NAME_SYLLABLES: [&str; 10] = [
    "BAR", "OUGHT", "ABLE", "PRI", "PRES", "ESE", "ANTI", "CALLY", "ATION", "EING",
];

/// Uniform integer in `[lo, hi]`, both ends inclusive.
#[inline]
pub fn urand_int(rng: &mut impl Rng, lo: u32, hi: u32) -> u32 {
    rng.gen_range(lo..=hi)
}

/// Non-uniform ("skewed") integer in `[lo, hi]` per the TPC-C NURand
/// function: `(((urand(0, a) | urand(lo, hi)) + c) % (hi - lo + 1)) + lo`.
#[inline]
pub fn nurand_int(rng: &mut impl Rng, a: u32, c: u32, lo: u32, hi: u32) -> u32 {
    (((urand_int(rng, 0, a) | urand_int(rng, lo, hi)) + c) % (hi - lo + 1)) + lo
}

/// Builds a customer last name from a number in `[0, 999]` by
/// concatenating one syllable per decimal digit.
pub fn make_clast(num: u32) -> String {
    debug_assert!(num <= 999);
    let mut name = String::with_capacity(15);
    for digit in [num / 100 % 10, num / 10 % 10, num % 10] {
        name.push_str(LAST_NAME_SYLLABLES[digit as usize]);
    }
    name
}

#[cfg(test)]
mod test {
    use rand::{rngs::SmallRng, SeedableRng};

    use super::*;

    #[test]
    fn test_urand_bounds() {
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..10_000 {
            let v = urand_int(&mut rng, 10, 20);
            assert!((10..=20).contains(&v));
        }
        assert_eq!(urand_int(&mut rng, 7, 7), 7);
    }

    #[test]
    fn test_nurand_bounds() {
        let mut rng = SmallRng::seed_from_u64(2);
        for _ in 0..10_000 {
            let v = nurand_int(&mut rng, A_C_ID, C_C_ID, 1, 3000);
            assert!((1..=3000).contains(&v));
            let v = nurand_int(&mut rng, A_C_LAST, C_C_LAST, 0, 999);
            assert!(v <= 999);
        }
    }

    #[test]
    fn test_nurand_skew() {
        // the OR with urand(0, a) biases draws toward ids with the low
        // bits set; the distribution must not collapse to uniform
        let mut rng = SmallRng::seed_from_u64(3);
        let mut hits = vec![0u32; 3001];
        for _ in 0..100_000 {
            hits[nurand_int(&mut rng, A_C_ID, C_C_ID, 1, 3000) as usize] += 1;
        }
        let max = *hits.iter().max().unwrap() as f64;
        let mean = 100_000.0 / 3000.0;
        assert!(max > 2.0 * mean, "expected skewed mass, max={max} mean={mean}");
    }

    #[test]
    fn test_make_clast() {
        assert_eq!(make_clast(0), "BARBARBAR");
        assert_eq!(make_clast(1), "BARBAROUGHT");
        assert_eq!(make_clast(371), "PRICALLYOUGHT");
        assert_eq!(make_clast(999), "EINGEINGEING");
    }

    #[test]
    fn test_deterministic_with_same_seed() {
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(
                nurand_int(&mut a, A_C_LAST, C_C_LAST, 0, 999),
                nurand_int(&mut b, A_C_LAST, C_C_LAST, 0, 999)
            );
        }
    }
}
