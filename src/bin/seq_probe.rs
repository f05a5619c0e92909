use std::env;
use std::time::Instant;

use seqdp::problems::{lccs::LccsProblem, lcs::LcsProblem};
use seqdp::utils::{find_run, is_subsequence};
use seqdp::{DpEngine, LengthStrategy};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("seq_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("seqdp scaling probe");
    eprintln!("{}", "=".repeat(80));
    eprintln!("  verify limit: {}", options.verify_limit);
    eprintln!("  max length:   {}", options.max_len);
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] LCS length, rolling rows...");
    measurements.extend(run_lcs_length(&options, &mut sys));
    eprintln!();

    eprintln!("[2/3] LCS table + reconstruction...");
    measurements.extend(run_lcs(&options, &mut sys));
    eprintln!();

    eprintln!("[3/3] LCCS table + extraction...");
    measurements.extend(run_lccs(&options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("seq_probe output error: {err}");
        std::process::exit(1);
    }
    if measurements
        .iter()
        .any(|m| matches!(m.verification_status, VerificationStatus::Failed))
    {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
    max_len: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 512usize;
        let mut max_len = 4096usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::parse(value)?;
            } else if arg == "--format" {
                let value = next_value(&mut args, "--format")?;
                format = OutputFormat::parse(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_usize(value, "verify limit")?;
            } else if arg == "--verify-limit" {
                let value = next_value(&mut args, "--verify-limit")?;
                verify_limit = parse_usize(&value, "verify limit")?;
            } else if let Some(value) = arg.strip_prefix("--max-len=") {
                max_len = parse_usize(value, "max length")?;
            } else if arg == "--max-len" {
                let value = next_value(&mut args, "--max-len")?;
                max_len = parse_usize(&value, "max length")?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
            max_len,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin seq_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Largest length checked against the nested-Vec baseline (default: 512)
  --max-len <N>                 Largest sequence length to run (default: 4096)
  -h, --help                    Print this help message

Examples:
  cargo run --bin seq_probe
  cargo run --release --bin seq_probe -- --format table --max-len 8192
"
        );
    }

    fn sizes(&self) -> Vec<usize> {
        const SIZES: &[usize] = &[64, 256, 512, 1024, 2048, 4096, 8192, 16384];
        SIZES
            .iter()
            .copied()
            .filter(|&len| len <= self.max_len)
            .collect()
    }
}

fn next_value<I, T>(args: &mut I, flag: &str) -> Result<String, String>
where
    I: Iterator<Item = T>,
    T: Into<String>,
{
    args.next()
        .map(Into::into)
        .ok_or_else(|| format!("missing value after {flag}"))
}

fn parse_usize(value: &str, what: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| format!("{what} must be a non-negative integer"))
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn parse(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) -> Result<(), String> {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    size_desc: String,
    wall_s: f64,
    rss_delta_kib: u64,
    verification_status: VerificationStatus,
    verification_detail: Option<String>,
}

#[derive(Clone, Copy)]
enum VerificationStatus {
    NotChecked,
    Passed,
    Failed,
}

impl VerificationStatus {
    fn label(&self) -> &'static str {
        match self {
            VerificationStatus::NotChecked => "not_checked",
            VerificationStatus::Passed => "passed",
            VerificationStatus::Failed => "failed",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            VerificationStatus::Passed => "✓",
            VerificationStatus::Failed => "✗",
            VerificationStatus::NotChecked => "○",
        }
    }
}

type Verdict = (VerificationStatus, Option<String>);

fn check(ok: bool, detail: impl FnOnce() -> String) -> Verdict {
    if ok {
        (VerificationStatus::Passed, None)
    } else {
        (VerificationStatus::Failed, Some(detail()))
    }
}

fn run_lcs_length(options: &Options, sys: &mut System) -> Vec<Measurement> {
    let sizes = options.sizes();
    let total = sizes.len();
    sizes
        .into_iter()
        .enumerate()
        .map(|(idx, len)| {
            eprint!("      [{}/{}] size {}... ", idx + 1, total, len);
            let mut len_result = 0usize;
            let m = measure("lcs_length", format!("len={len}"), sys, || {
                let s = deterministic_tokens(len, 0);
                let t = deterministic_tokens(len, 3);
                let cost = DpEngine::with_strategy(LcsProblem::new(&s, &t), LengthStrategy::Rolling)
                    .cost();
                len_result = cost;

                if len <= options.verify_limit {
                    let baseline = full_lcs_len(&s, &t);
                    check(baseline == cost, || format!("expected {baseline}, got {cost}"))
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            });
            eprintln!(
                "{} length={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                len_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_lcs(options: &Options, sys: &mut System) -> Vec<Measurement> {
    let sizes = options.sizes();
    let total = sizes.len();
    sizes
        .into_iter()
        .enumerate()
        .map(|(idx, len)| {
            eprint!("      [{}/{}] size {}... ", idx + 1, total, len);
            let mut len_result = 0usize;
            let m = measure("lcs", format!("len={len}"), sys, || {
                let s = deterministic_tokens(len, 0);
                let t = deterministic_tokens(len, 5);
                let (cost, lcs) = DpEngine::new(LcsProblem::new(&s, &t)).run();
                len_result = cost;

                let shape_ok = lcs.len() == cost
                    && is_subsequence(&lcs, &s)
                    && is_subsequence(&lcs, &t);
                if !shape_ok {
                    return (
                        VerificationStatus::Failed,
                        Some(format!("reconstruction of length {} is not a common subsequence", lcs.len())),
                    );
                }
                if len <= options.verify_limit {
                    let baseline = full_lcs_len(&s, &t);
                    check(baseline == cost, || format!("expected {baseline}, got {cost}"))
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            });
            eprintln!(
                "{} length={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                len_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_lccs(options: &Options, sys: &mut System) -> Vec<Measurement> {
    let sizes = options.sizes();
    let total = sizes.len();
    sizes
        .into_iter()
        .enumerate()
        .map(|(idx, len)| {
            eprint!("      [{}/{}] size {}... ", idx + 1, total, len);
            let mut len_result = 0usize;
            let m = measure("lccs", format!("len={len}"), sys, || {
                let s = deterministic_tokens(len, 0);
                let t = spliced_tokens(&s);
                let (cost, run) = DpEngine::new(LccsProblem::new(&s, &t)).run();
                len_result = cost;

                let shape_ok = run.len() == cost
                    && find_run(&run, &s).is_some()
                    && find_run(&run, &t).is_some();
                if !shape_ok {
                    return (
                        VerificationStatus::Failed,
                        Some(format!("run of length {} is not contiguous in both inputs", run.len())),
                    );
                }
                if len <= options.verify_limit {
                    let baseline = full_lccs_len(&s, &t);
                    check(baseline == cost, || format!("expected {baseline}, got {cost}"))
                } else {
                    (VerificationStatus::NotChecked, None)
                }
            });
            eprintln!(
                "{} length={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                len_result,
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn print_summary(measurements: &[Measurement], options: &Options) {
    eprintln!("{}", "=".repeat(80));
    eprintln!("Summary");
    eprintln!("{}", "=".repeat(80));

    let mut passed = 0;
    let mut failed = 0;
    let mut not_checked = 0;
    for m in measurements {
        match m.verification_status {
            VerificationStatus::Passed => passed += 1,
            VerificationStatus::Failed => failed += 1,
            VerificationStatus::NotChecked => not_checked += 1,
        }
    }

    let total = measurements.len().max(1) as f64;
    eprintln!("  Total runs: {}", measurements.len());
    eprintln!("  ✓ Passed: {} ({:.1}%)", passed, 100.0 * passed as f64 / total);
    eprintln!("  ✗ Failed: {} ({:.1}%)", failed, 100.0 * failed as f64 / total);
    eprintln!(
        "  ○ Not checked (size > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );

    if failed > 0 {
        eprintln!();
        eprintln!("Failures:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     {detail}");
                }
            }
        }
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(scenario: &'static str, size_desc: String, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> Verdict,
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (status, detail) = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        size_desc,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        verification_status: status,
        verification_detail: detail,
    }
}

fn write_csv(measurements: &[Measurement]) -> Result<(), String> {
    println!("scenario,size_desc,wall_s,rss_delta_kib,verification_status,verification_detail");
    for m in measurements {
        let detail = m
            .verification_detail
            .as_ref()
            .map(|s| s.replace('"', "'"))
            .unwrap_or_default();
        println!(
            "{},{},{:.3},{},{},\"{}\"",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail
        );
    }
    Ok(())
}

fn write_table(measurements: &[Measurement]) -> Result<(), String> {
    let col1 = measurements
        .iter()
        .map(|m| m.scenario.len())
        .fold("scenario".len(), usize::max);
    let col2 = measurements
        .iter()
        .map(|m| m.size_desc.len())
        .fold("size".len(), usize::max);

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>14}  {:>12}  detail",
        "scenario", "size", "wall_s", "rss_delta_kib", "status",
    );
    println!(
        "{:-<col1$}  {:-<col2$}  {:-<12}  {:-<14}  {:-<12}  {:-<12}",
        "", "", "", "", "", "",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12.3}  {:>14}  {:>12}  {}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            m.verification_detail.as_deref().unwrap_or(""),
        );
    }
    Ok(())
}

fn write_json(measurements: &[Measurement]) -> Result<(), String> {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        let detail = match m.verification_detail {
            Some(ref d) => format!("\"{}\"", d.replace('"', "'")),
            None => "null".to_string(),
        };
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            detail,
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        // sysinfo reports bytes
        process.memory() / 1024
    } else {
        0
    }
}

/// Tokens cycling through a small alphabet of values, rotated by `offset`.
fn deterministic_tokens(len: usize, offset: usize) -> Vec<f64> {
    const ALPHABET: &[f64] = &[0.5, 1.0, 2.5, 4.0, 8.25, 16.0, 32.5];
    (0..len)
        .map(|i| ALPHABET[(i * i + offset) % ALPHABET.len()])
        .collect()
}

/// A variant of `s` with its middle third moved to the front, so the two
/// inputs share long but displaced runs.
fn spliced_tokens(s: &[f64]) -> Vec<f64> {
    let a = s.len() / 3;
    let b = 2 * s.len() / 3;
    let mut out = Vec::with_capacity(s.len());
    out.extend_from_slice(&s[a..b]);
    out.extend_from_slice(&s[..a]);
    out.extend_from_slice(&s[b..]);
    out
}

fn full_lcs_len(s: &[f64], t: &[f64]) -> usize {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if s[i - 1] == t[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }
    dp[n][m]
}

fn full_lccs_len(s: &[f64], t: &[f64]) -> usize {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    let mut best = 0;
    for i in 1..=n {
        for j in 1..=m {
            if s[i - 1] == t[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
                best = best.max(dp[i][j]);
            }
        }
    }
    best
}
