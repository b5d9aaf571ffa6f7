use criterion::{black_box, criterion_group, criterion_main, Criterion};
use math_lib::{
    fields::PrimeField,
    polynomial::{point::Point, point_sequence::PointSequence, Polynomial},
    primes::{first_prime_greater_than, random_prime_greater_than},
    random::random_coefficients,
};
use num_bigint::{BigInt, BigUint};
use std::time::Duration;

fn prime_bound() -> BigUint {
    BigUint::from(1u32) << 255u32
}

fn run_prime_bench(c: &mut Criterion) {
    let bound = prime_bound();
    c.bench_function("first prime above 2^255", |b| b.iter(|| first_prime_greater_than(black_box(&bound))));
    c.bench_function("random prime above 2^255", |b| b.iter(|| random_prime_greater_than(black_box(&bound))));
}

fn run_lagrange_bench(c: &mut Criterion) {
    let prime = first_prime_greater_than(&prime_bound());
    let field = PrimeField::new(prime.clone()).unwrap();
    let coefficients = random_coefficients(32, &BigUint::from(15130512518u64), &prime).unwrap();
    let polynomial = Polynomial::from_unsigned_coefficients(&coefficients, coefficients.len());
    let points: PointSequence = (1..=32u32)
        .map(|x| {
            let x = BigInt::from(x);
            let y = polynomial.eval(&x, &field);
            Point::new(x, y)
        })
        .collect();
    c.bench_function("32-degree polynomial interpolation", |b| {
        b.iter(|| black_box(&points).lagrange_interpolate(&field).unwrap())
    });
}

criterion_group!(
    name = random_lagrange_bench;
    config = Criterion::default().significance_level(0.1).sample_size(10).measurement_time(Duration::from_secs(2));
    targets = run_prime_bench, run_lagrange_bench
);

criterion_main!(random_lagrange_bench);
