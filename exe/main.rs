use clap::{Parser, ValueEnum};
use lazy_stream::{numbers, Stream, DEFAULT_SAMPLE_SIZE};
use num::BigUint;
use std::fmt::Display;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Sequence {
  Naturals,
  Odd,
  Even,
  Primes,
  Fibonacci,
  Collatz,
}

/// Print a prefix of a lazily generated sequence.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
  /// Which sequence to print.
  #[arg(value_enum)]
  sequence: Sequence,

  /// How many elements to print.
  #[arg(short, long, default_value_t = DEFAULT_SAMPLE_SIZE)]
  count: usize,

  /// First natural number, or the start of the Collatz chain.
  #[arg(short, long, default_value_t = 1)]
  start: i64,

  /// How many elements to skip before printing.
  #[arg(long, default_value_t = 0)]
  skip: usize,
}

fn show<A: Display + Clone + 'static>(xs: Stream<A>, args: &Args) {
  let xs = xs.drop(args.skip);
  log::info!("{:?}: {}", args.sequence, xs);
  let items: Vec<String> = xs.sample(args.count).iter().map(|x| x.to_string()).collect();
  println!("{}", items.join(", "));
}

fn main() {
  env_logger::init();
  let args = Args::parse();
  log::debug!("{:?}", args);

  match args.sequence {
    Sequence::Naturals  => show(numbers::naturals(args.start), &args),
    Sequence::Odd       => show(numbers::odd_naturals::<u64>(), &args),
    Sequence::Even      => show(numbers::even_naturals::<u64>(), &args),
    Sequence::Primes    => show(numbers::primes::<u64>(), &args),
    Sequence::Fibonacci => show(numbers::fibonacci::<BigUint>(), &args),
    Sequence::Collatz   => show(numbers::collatz(args.start), &args),
  }
}
