use std::env;
use std::time::Instant;

use rodcut::{compare, BottomUp, CutStrategy, TopDown};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("rod_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    eprintln!("\n{}", "=".repeat(80));
    eprintln!("Rod-cutting probe: solver agreement and scaling");
    eprintln!("{}", "=".repeat(80));
    eprintln!();
    eprintln!("  • Reference scenarios must reproduce their known optimum");
    eprintln!(
        "  • Sweeps are checked against an unbounded-knapsack baseline (up to length {})",
        options.verify_limit
    );
    eprintln!("  • status: 'passed' = matches, 'not_checked' = longer than the verify limit");
    eprintln!();

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/3] Reference scenarios...");
    measurements.extend(run_reference(&mut sys));
    eprintln!();

    eprintln!("[2/3] Top-down sweep...");
    measurements.extend(run_sweep(TopDown, &options, &mut sys));
    eprintln!();

    eprintln!("[3/3] Bottom-up sweep...");
    measurements.extend(run_sweep(BottomUp, &options, &mut sys));
    eprintln!();

    print_summary(&measurements, &options);

    if let Err(err) = options.format.write(&measurements) {
        eprintln!("rod_probe output error: {err}");
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 1024usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin rod_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Longest rod verified against the baseline (default: 1024)
  -h, --help                    Print this help message

Examples:
  cargo run --bin rod_probe
  cargo run --bin rod_probe -- --format table --verify-limit 256
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
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

#[derive(Clone)]
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

fn run_reference(sys: &mut System) -> Vec<Measurement> {
    let scenarios: [(&str, i64, Vec<i64>, i64); 3] = [
        ("base", 5, vec![2, 5, 7, 8, 10], 12),
        ("uncut", 3, vec![1, 3, 8], 8),
        ("unit_pieces", 4, vec![3, 5, 6, 7], 12),
    ];

    scenarios
        .into_iter()
        .map(|(name, length, prices, expected)| {
            eprint!("      {name}... ");
            let m = measure("reference", format!("{name} len={length}"), sys, || {
                match compare(length, &prices) {
                    Ok(cmp) if !cmp.profits_agree() => (
                        VerificationStatus::Failed,
                        Some(format!(
                            "top_down {} vs bottom_up {}",
                            cmp.top_down.max_profit, cmp.bottom_up.max_profit
                        )),
                    ),
                    Ok(cmp) if cmp.top_down.max_profit != expected => (
                        VerificationStatus::Failed,
                        Some(format!("expected {expected}, got {}", cmp.top_down.max_profit)),
                    ),
                    Ok(_) => (VerificationStatus::Passed, None),
                    Err(err) => (VerificationStatus::Failed, Some(err.to_string())),
                }
            });
            eprintln!(
                "{} time={:.3}s, status={}",
                m.verification_status.icon(),
                m.wall_s,
                m.verification_status.label()
            );
            m
        })
        .collect()
}

fn run_sweep<S: CutStrategy>(strategy: S, options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[64, 128, 256, 512, 1024, 2048, 4096];
    let total = SIZES.len();

    SIZES
        .iter()
        .enumerate()
        .map(|(idx, &len)| {
            eprint!("      [{}/{}] Testing length {}... ", idx + 1, total, len);
            let mut profit_result = 0i64;
            let mut pieces_result = 0usize;
            let m = measure(strategy.name(), format!("len={len}"), sys, || {
                let prices = deterministic_prices(len);
                let solution = match strategy.solve(len as i64, &prices) {
                    Ok(s) => s,
                    Err(err) => return (VerificationStatus::Failed, Some(err.to_string())),
                };
                profit_result = solution.max_profit;
                pieces_result = solution.cuts.len();

                if solution.cuts.iter().sum::<usize>() != len {
                    return (
                        VerificationStatus::Failed,
                        Some(format!("pieces cover {} of {len}", solution.cuts.iter().sum::<usize>())),
                    );
                }
                if len > options.verify_limit {
                    return (VerificationStatus::NotChecked, None);
                }
                let baseline = knapsack_baseline(&prices);
                if baseline == solution.max_profit {
                    (VerificationStatus::Passed, None)
                } else {
                    (
                        VerificationStatus::Failed,
                        Some(format!("expected {baseline}, got {}", solution.max_profit)),
                    )
                }
            });
            eprintln!(
                "{} profit={}, pieces={}, time={:.3}s, status={}",
                m.verification_status.icon(),
                profit_result,
                pieces_result,
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
        "  ○ Not checked (length > {}): {} ({:.1}%)",
        options.verify_limit,
        not_checked,
        100.0 * not_checked as f64 / total
    );

    if failed > 0 {
        eprintln!();
        eprintln!("Failed runs:");
        for m in measurements {
            if matches!(m.verification_status, VerificationStatus::Failed) {
                eprintln!("  ✗ {} ({})", m.scenario, m.size_desc);
                if let Some(ref detail) = m.verification_detail {
                    eprintln!("     Error: {}", detail);
                }
            }
        }
    }
    eprintln!("{}", "=".repeat(80));
    eprintln!();
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (VerificationStatus, Option<String>),
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
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

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
        let detail = m.verification_detail.as_ref().map(|s| s.replace('"', "'"));
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":{{\"status\":\"{}\",\"detail\":{}}}}}{}",
            m.scenario,
            m.size_desc,
            m.wall_s,
            m.rss_delta_kib,
            m.verification_status.label(),
            match detail {
                Some(ref d) => format!("\"{d}\""),
                None => "null".to_string(),
            },
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
    Ok(())
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory()
    } else {
        0
    }
}

/// Prices with a mild premium on every seventh length, so optima mix piece sizes.
fn deterministic_prices(len: usize) -> Vec<i64> {
    (1..=len as i64)
        .map(|k| k * 3 + if k % 7 == 0 { 4 } else { (k * 5) % 3 })
        .collect()
}

/// Unbounded-knapsack formulation: outer loop over piece lengths, inner over capacity.
fn knapsack_baseline(prices: &[i64]) -> i64 {
    let n = prices.len();
    let mut best: Vec<Option<i64>> = vec![None; n + 1];
    best[0] = Some(0);
    for piece in 1..=n {
        for cap in piece..=n {
            if let Some(rest) = best[cap - piece] {
                let cand = rest + prices[piece - 1];
                if best[cap].map_or(true, |b| cand > b) {
                    best[cap] = Some(cand);
                }
            }
        }
    }
    best[n].unwrap_or(0)
}
