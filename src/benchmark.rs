use crate::parser::SipUriParser;
use std::fmt;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::thread;
use std::time::{Duration, Instant};

/// Sample URIs covering each disambiguation rule; the last two are invalid
pub const SAMPLE_URIS: [&str; 10] = [
    "sip:alice@atlanta.com",
    "sip:alice:secretword@atlanta.com;transport=tcp",
    "sips:alice@atlanta.com?subject=project%20x&priority=urgent",
    // phone number as user, PIN as password
    "sip:+1-212-555-1212:1234@gateway.com;user=phone",
    "sips:1212@gateway.com",
    "sip:alice@192.0.2.4",
    "sip:atlanta.com;method=REGISTER?to=alice%40atlanta.com",
    "sip:alice;day=tuesday@atlanta.com",
    "sip:user:password:somethingelse@outlook.com",
    "sipps:user@outlook.com;parameters?headers",
];

/// Timing results of a benchmark run
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkReport {
    pub iterations: usize,
    pub successful_parses: usize,
    pub elapsed: Duration,
    pub total_bytes: usize,
}

impl BenchmarkReport {
    /// Average time per parse
    pub fn average(&self) -> Duration {
        if self.iterations == 0 {
            return Duration::ZERO;
        }
        self.elapsed.div_f64(self.iterations as f64)
    }

    pub fn parses_per_second(&self) -> f64 {
        self.iterations as f64 / self.elapsed.as_secs_f64().max(f64::EPSILON)
    }

    /// Throughput in MB/s
    pub fn throughput_mbps(&self) -> f64 {
        (self.total_bytes as f64 / 1_000_000.0) / self.elapsed.as_secs_f64().max(f64::EPSILON)
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Time elapsed: {:?}", self.elapsed)?;
        writeln!(f, "Average time per parse: {:?}", self.average())?;
        writeln!(f, "Parses per second: {:.2}", self.parses_per_second())?;
        writeln!(f, "Successful parses: {}", self.successful_parses)?;
        write!(f, "Throughput: {:.2} MB/s", self.throughput_mbps())
    }
}

fn sample_bytes() -> usize {
    SAMPLE_URIS.iter().map(|uri| uri.len()).sum()
}

/// Parse the sample set `iterations` times on the calling thread
pub fn benchmark_uri_parsing(iterations: usize) -> BenchmarkReport {
    let parser = SipUriParser::new();
    let mut successful_parses = 0;

    let start = Instant::now();
    for _ in 0..iterations {
        for uri in SAMPLE_URIS {
            if parser.parse(uri).is_ok() {
                successful_parses += 1;
            }
        }
    }
    let elapsed = start.elapsed();

    BenchmarkReport {
        iterations: iterations * SAMPLE_URIS.len(),
        successful_parses,
        elapsed,
        total_bytes: iterations * sample_bytes(),
    }
}

/// Benchmark using manual thread creation - one thread per core
pub fn run_parallel_benchmark(iterations_per_thread: usize) -> BenchmarkReport {
    let num_cores = num_cpus::get();
    let parser = SipUriParser::new();
    let successful_parses = Arc::new(AtomicUsize::new(0));

    let start = Instant::now();

    let mut handles = Vec::with_capacity(num_cores);
    for _ in 0..num_cores {
        let counter = Arc::clone(&successful_parses);
        handles.push(thread::spawn(move || {
            let mut local = 0;
            for _ in 0..iterations_per_thread {
                for uri in SAMPLE_URIS {
                    if parser.parse(uri).is_ok() {
                        local += 1;
                    }
                }
            }
            counter.fetch_add(local, Ordering::Relaxed);
        }));
    }

    for handle in handles {
        if let Err(panic) = handle.join() {
            std::panic::resume_unwind(panic);
        }
    }

    let elapsed = start.elapsed();
    let iterations = iterations_per_thread * num_cores;

    BenchmarkReport {
        iterations: iterations * SAMPLE_URIS.len(),
        successful_parses: successful_parses.load(Ordering::Relaxed),
        elapsed,
        total_bytes: iterations * sample_bytes(),
    }
}
