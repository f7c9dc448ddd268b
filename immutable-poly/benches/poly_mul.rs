use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use immutable_poly::prelude::*;
use rand::Rng;

criterion_main!(benches);
criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = poly_mul<4>,
              poly_mul<7>,
              poly_mul<9>,
);

fn random_coefficients(len: usize) -> Vec<f64> {
    let mut rng = rand::rng();
    (0..len).map(|_| rng.random_range(-1.0..1.0)).collect()
}

fn poly_mul<const LOG2_SIZE: usize>(c: &mut Criterion) {
    let product_degree = LOG2_SIZE + 1;
    let mut group = c.benchmark_group(format!(
        "Multiplication of Polynomials of Degree 2^{LOG2_SIZE} (Product Degree: 2^{product_degree})"
    ));

    let new_poly = || ImmutablePolynomial::new(random_coefficients((1 << LOG2_SIZE) + 1));
    let poly_0 = new_poly();
    let poly_1 = new_poly();

    let id = BenchmarkId::new("Same type", product_degree);
    group.bench_function(id, |b| b.iter(|| &poly_0 * &poly_1));

    let integer_poly = poly_1.map_coefficients(|c| (c * 1000.0) as i64);
    let id = BenchmarkId::new("Promoted from i64", product_degree);
    group.bench_function(id, |b| b.iter(|| poly_0.try_mul(&integer_poly)));

    group.finish();
}
