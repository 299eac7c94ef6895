//! Driver commands: the two-stack demonstration and a push/pop benchmark

use std::time::{Duration, Instant};

use stack_pool::{PoolConfig, PoolStats, StackPool};
use tracing::{debug, info};

use crate::config::CliError;

/// Digits of pi, pushed onto the first demo stack
pub const PI_DIGITS: [i32; 11] = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];

/// Digits of e, pushed onto the second demo stack
pub const E_DIGITS: [i32; 11] = [8, 9, 7, 9, 3, 1, 1, 5, 9, 9, 7];

/// Nodes reserved by the demo when the config asks for fewer
const DEMO_CAPACITY: usize = 22;

#[derive(Debug)]
pub struct DemoReport {
    /// First stack rendered top to bottom
    pub first: String,
    /// Time spent walking the first stack
    pub iterate: Duration,
    pub second: String,
    /// Largest value on the first stack
    pub max: Option<i32>,
    /// Smallest value on the second stack
    pub min: Option<i32>,
    pub stats: PoolStats,
}

/// Build two independent stacks in one pool and search them
pub fn demo(config: &PoolConfig) -> Result<DemoReport, CliError> {
    let mut pool = StackPool::with_config(config);
    pool.reserve(DEMO_CAPACITY);

    let mut l1 = pool.new_stack();
    for v in PI_DIGITS {
        l1 = pool.push(v, l1)?;
    }

    let start = Instant::now();
    let first = pool.display(l1).to_string();
    let iterate = start.elapsed();
    debug!(nanos = iterate.as_nanos() as u64, "iterated first stack");

    let mut l2 = pool.new_stack();
    for v in E_DIGITS {
        l2 = pool.push(v, l2)?;
    }

    Ok(DemoReport {
        first,
        iterate,
        second: pool.display(l2).to_string(),
        max: pool.iter(l1).max().copied(),
        min: pool.iter(l2).min().copied(),
        stats: pool.stats(),
    })
}

#[derive(Debug)]
pub struct BenchReport {
    /// Wall time of each push-all/pop-all round
    pub rounds: Vec<Duration>,
    pub ops: usize,
    pub stats: PoolStats,
}

impl BenchReport {
    /// Average nanoseconds per push or pop in `round`
    pub fn nanos_per_op(&self, round: usize) -> f64 {
        match self.rounds.get(round) {
            Some(d) if self.ops > 0 => d.as_nanos() as f64 / (2 * self.ops) as f64,
            _ => 0.0,
        }
    }
}

/// Push `ops` values and pop them all, `rounds` times.
///
/// Only the first round grows storage; later rounds run entirely on
/// recycled nodes.
pub fn bench(config: &PoolConfig, ops: usize, rounds: usize) -> Result<BenchReport, CliError> {
    let mut pool = StackPool::with_config(config);
    let mut timings = Vec::with_capacity(rounds);

    for round in 0..rounds {
        let start = Instant::now();
        let mut s = pool.new_stack();
        for v in 0..ops {
            s = pool.push(v as u64, s)?;
        }
        while !pool.empty(s) {
            s = pool.pop(s)?;
        }
        let elapsed = start.elapsed();
        info!(
            round,
            ops,
            micros = elapsed.as_micros() as u64,
            capacity = pool.capacity(),
            "bench round complete"
        );
        timings.push(elapsed);
    }

    Ok(BenchReport {
        rounds: timings,
        ops,
        stats: pool.stats(),
    })
}
