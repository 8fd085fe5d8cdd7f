//! Benchmark for integer token checks
//!
//! Usage: `benchmark [config.json]`. Prints one JSON object on stdout,
//! logs go to stderr (`RUST_LOG` to adjust).

use serde::Serialize;
use std::hint::black_box;
use std::process::ExitCode;
use std::time::Instant;
use token_bench::corpus::generate_corpus;
use token_bench::{BenchConfig, IntegerClassify, Result, Strategy};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
struct TokenResult {
    token: String,
    accepted: bool,
    avg_ns: f64,
}

#[derive(Serialize)]
struct BenchmarkResult {
    strategy: Strategy,
    correct: bool,
    tokens: Vec<TokenResult>,
    corpus_checks_per_second: f64,
}

#[derive(Serialize)]
struct FullResults {
    results: Vec<BenchmarkResult>,
    correctness: bool,
}

/// (token, answer of the scan, answer of the 32-bit parse)
const EXPECTED: [(&str, bool, bool); 12] = [
    ("42", true, true),
    ("+", false, false),
    ("-13", true, true),
    ("hello", false, false),
    ("-", false, false),
    ("", false, false),
    ("-0", true, true),
    ("007", true, true),
    ("5-5", false, false),
    ("+5", false, true),
    ("2147483648", true, false),
    (" 1", false, false),
];

fn verify_correctness<C: IntegerClassify + ?Sized>(strategy: Strategy, classifier: &C) -> bool {
    if classifier.is_integer_opt(None) {
        warn!(%strategy, "accepted an absent token");
        return false;
    }
    for (token, scan, parse) in EXPECTED {
        let expected = if strategy.matches_scan() { scan } else { parse };
        let result = classifier.is_integer(token);
        if result != expected {
            warn!(%strategy, token, result, expected, "wrong answer");
            return false;
        }
    }
    true
}

fn time_token<C: IntegerClassify + ?Sized>(classifier: &C, token: &str, config: &BenchConfig) -> f64 {
    // Enough calls per pass that the clock resolution stops mattering
    const CALLS_PER_PASS: u64 = 10_000;

    for _ in 0..u64::from(config.warmup_iterations) * CALLS_PER_PASS {
        black_box(classifier.is_integer(black_box(token)));
    }

    let calls = u64::from(config.iterations) * CALLS_PER_PASS;
    let start = Instant::now();
    for _ in 0..calls {
        black_box(classifier.is_integer(black_box(token)));
    }
    start.elapsed().as_nanos() as f64 / calls as f64
}

fn time_corpus<C: IntegerClassify + ?Sized>(classifier: &C, corpus: &[String], config: &BenchConfig) -> f64 {
    for _ in 0..config.warmup_iterations {
        for token in corpus {
            black_box(classifier.is_integer(black_box(token)));
        }
    }

    let start = Instant::now();
    let mut total_checks = 0u64;
    for _ in 0..config.iterations {
        for token in corpus {
            black_box(classifier.is_integer(black_box(token)));
            total_checks += 1;
        }
    }
    total_checks as f64 / start.elapsed().as_secs_f64()
}

fn benchmark(strategy: Strategy, corpus: &[String], config: &BenchConfig) -> Result<BenchmarkResult> {
    let classifier = strategy.classifier()?;
    let correct = verify_correctness(strategy, &*classifier);

    let tokens = config
        .tokens
        .iter()
        .map(|token| TokenResult {
            token: token.clone(),
            accepted: classifier.is_integer(token),
            avg_ns: time_token(&*classifier, token, config),
        })
        .collect();
    let corpus_checks_per_second = time_corpus(&*classifier, corpus, config);
    info!(%strategy, correct, corpus_checks_per_second, "strategy done");

    Ok(BenchmarkResult {
        strategy,
        correct,
        tokens,
        corpus_checks_per_second,
    })
}

fn run() -> Result<FullResults> {
    let config = match std::env::args().nth(1) {
        Some(path) => BenchConfig::load(path)?,
        None => BenchConfig::default(),
    };
    info!(
        tokens = config.tokens.len(),
        iterations = config.iterations,
        corpus_size = config.corpus_size,
        "starting"
    );

    let corpus = generate_corpus(config.corpus_size, config.seed);
    let mut results = Vec::new();
    for strategy in Strategy::ALL {
        results.push(benchmark(strategy, &corpus, &config)?);
    }

    let correctness = results.iter().all(|r| r.correct);
    Ok(FullResults { results, correctness })
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(full_results) => match serde_json::to_string(&full_results) {
            Ok(json) => {
                println!("{json}");
                if full_results.correctness {
                    ExitCode::SUCCESS
                } else {
                    ExitCode::FAILURE
                }
            }
            Err(err) => {
                error!(%err, "could not serialise results");
                ExitCode::FAILURE
            }
        },
        Err(err) => {
            error!(%err, "benchmark failed");
            ExitCode::FAILURE
        }
    }
}
