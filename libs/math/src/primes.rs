//! Probable primes.
//!
//! Primality is decided with trial division by a few small primes followed by Miller-Rabin rounds using
//! random bases, so every "prime" produced here is a probable prime with an error probability below
//! `4^-MILLER_RABIN_ROUNDS`.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

/// Miller-Rabin rounds performed on every candidate.
pub const MILLER_RABIN_ROUNDS: usize = 32;

/// Random candidates drawn for a given bit length before moving on to the next one.
pub const PRIME_GEN_MAX_ATTEMPTS: usize = 4096;

const SMALL_PRIMES: [u32; 12] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];

/// Checks whether `n` is a probable prime.
pub fn is_probable_prime(n: &BigUint) -> bool {
    is_probable_prime_with(n, &mut rand::thread_rng())
}

fn is_probable_prime_with<R: Rng + ?Sized>(n: &BigUint, rng: &mut R) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);

    if n < &two {
        return false;
    }
    for p in SMALL_PRIMES {
        let p = BigUint::from(p);
        if n == &p {
            return true;
        }
        if (n % &p).is_zero() {
            return false;
        }
    }

    // Write n-1 as d * 2^s with d odd.
    let n_minus_1 = n - &one;
    let s = n_minus_1.trailing_zeros().unwrap_or(0);
    let d = &n_minus_1 >> s;

    'rounds: for _ in 0..MILLER_RABIN_ROUNDS {
        // a ∈ [2, n-2]
        let a = rng.gen_biguint_range(&two, &n_minus_1);
        let mut x = a.modpow(&d, n);
        if x == one || x == n_minus_1 {
            continue;
        }
        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == n_minus_1 {
                continue 'rounds;
            }
            if x == one {
                return false;
            }
        }
        return false;
    }
    true
}

/// Returns the smallest probable prime strictly greater than `n`.
pub fn first_prime_greater_than(n: &BigUint) -> BigUint {
    let two = BigUint::from(2u32);
    let mut candidate = n + 1u32;
    if candidate <= two {
        return two;
    }
    if candidate.is_even() {
        candidate += 1u32;
    }
    while !is_probable_prime(&candidate) {
        candidate += 2u32;
    }
    candidate
}

/// Returns a random probable prime strictly greater than `n`, with the same bit length as `n`.
///
/// Candidates are resampled until one lands above `n`. Some bit lengths have no prime above `n` (e.g. `7`
/// is the largest 3 bit prime), so after [PRIME_GEN_MAX_ATTEMPTS] failed candidates the bit length is
/// increased by one.
pub fn random_prime_greater_than(n: &BigUint) -> BigUint {
    let mut rng = rand::thread_rng();
    let mut bits = n.bits().max(2);
    loop {
        for _ in 0..PRIME_GEN_MAX_ATTEMPTS {
            let candidate = random_odd_with_bits(bits, &mut rng);
            if &candidate > n && is_probable_prime_with(&candidate, &mut rng) {
                return candidate;
            }
        }
        bits = bits.saturating_add(1);
    }
}

/// Samples an integer with exactly `bits` bits, odd unless `bits` is 2 where `2` and `3` are both fair game.
fn random_odd_with_bits<R: Rng + ?Sized>(bits: u64, rng: &mut R) -> BigUint {
    let mut candidate = rng.gen_biguint(bits);
    // Ensure the generated number has exactly `bits` bits (set the MSB).
    candidate.set_bit(bits.saturating_sub(1), true);
    if bits > 2 {
        candidate.set_bit(0, true);
    }
    candidate
}
