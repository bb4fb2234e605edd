use std::hint::black_box;
use rand::{
  distributions::Uniform,
  rngs::StdRng,
  Rng, SeedableRng
};

use criterion::{
  criterion_group, criterion_main, BenchmarkId, Criterion
};

use lvn_matcher::{
  Config,
  KDifferences,
  LandauVishkin,
  NaiveSearch,
};

// Docs: https://bheisler.github.io/criterion.rs/book/user_guide/comparing_functions.html

const ALPHABET: &[u8] = b"acgt";

fn random_text(rngo: &mut StdRng, length: usize) -> Vec<u8> {
  let symbol = Uniform::new(0, ALPHABET.len());
  (0..length).map(|_| ALPHABET[rngo.sample(symbol)]).collect()
}

// periodic texts keep the frontier trace long, which is where skipping pays off
fn periodic_text(period: &[u8], length: usize) -> Vec<u8> {
  period.iter().copied().cycle().take(length).collect()
}

fn generate_input(power: usize, periodic: bool) -> (Vec<u8>, Vec<u8>) {
  let mut rngo = StdRng::seed_from_u64(power as u64);
  let len = 2_usize.pow(power as u32);
  let pattern = random_text(&mut rngo, PATTERN_LEN);
  let text = if periodic {
    periodic_text(&pattern[..PATTERN_LEN / 2], len)
  } else {
    random_text(&mut rngo, len)
  };
  (text, pattern)
}

fn lvn_bench<const FAST_FORWARD : bool>(b : &mut criterion::Bencher, input: &(Vec<u8>, Vec<u8>)) { // has to be &ARGTYPE since this function is called by bench_with_input
  let (text, pattern) = input;
  let config = Config::new(K).with_fast_forward(FAST_FORWARD);
  b.iter(|| {
    let matcher = LandauVishkin::new(black_box(text.as_slice()), black_box(pattern.as_slice()), config).unwrap();
    black_box(matcher.matches().count())
  })
}

fn naive_bench(b : &mut criterion::Bencher, input: &(Vec<u8>, Vec<u8>)) {
  let (text, pattern) = input;
  b.iter(|| black_box(NaiveSearch.find_matches(black_box(text.as_slice()), black_box(pattern.as_slice()), K).unwrap()))
}

fn bench_by_fast_forward(c : &mut Criterion) {
  let groupname = "k-differences with and without fast-forward";
  let mut group = c.benchmark_group(groupname);

  for power in POWERS.step_by(STEP_SIZE) {
    group.bench_with_input(BenchmarkId::new("random, fast-forward", power), &generate_input(power, false), lvn_bench::<true>);
    group.bench_with_input(BenchmarkId::new("random, direct", power), &generate_input(power, false), lvn_bench::<false>);
    group.bench_with_input(BenchmarkId::new("periodic, fast-forward", power), &generate_input(power, true), lvn_bench::<true>);
    group.bench_with_input(BenchmarkId::new("periodic, direct", power), &generate_input(power, true), lvn_bench::<false>);
  }

  group.finish();
}

fn bench_against_naive(c : &mut Criterion) {
  let groupname = "Landau-Vishkin-Nussinov against dynamic programming";
  let mut group = c.benchmark_group(groupname);

  for power in POWERS.step_by(STEP_SIZE) {
    group.bench_with_input(BenchmarkId::new("lvn", power), &generate_input(power, false), lvn_bench::<true>);
    group.bench_with_input(BenchmarkId::new("naive", power), &generate_input(power, false), naive_bench);
  }

  group.finish();
}

const K : usize = 3;
const PATTERN_LEN : usize = 32;
const POWERS : std::ops::Range<usize> = 8..17;
const STEP_SIZE : usize = 2;

criterion_group!(lvn_by_fast_forward,
                 bench_by_fast_forward
);
criterion_group!(lvn_against_naive,
                 bench_against_naive
);
criterion_main!(
  lvn_by_fast_forward,
  lvn_against_naive,
);
