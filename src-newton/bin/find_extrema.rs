use clap::{Parser, ValueEnum};
use log::info;
use plotly::{
    Layout, Plot, Scatter,
    common::{Marker, Mode, Title},
};
use std::path::{Path, PathBuf};

use evopt_newton::{Extremum, ExtremumKind, find_extrema};
use evopt_testfunctions::{
    sin_2x, sin_2x_prime, sin_2x_second, sin_plus_x_cos, sin_plus_x_cos_prime,
    sin_plus_x_cos_second,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Function {
    /// f(x) = sin(2x)
    Sin2x,
    /// f(x) = sin(x) + x cos(x)
    SinPlusXCos,
}

type Scalar = fn(f64) -> f64;

impl Function {
    fn triple(self) -> (Scalar, Scalar, Scalar) {
        match self {
            Function::Sin2x => (sin_2x, sin_2x_prime, sin_2x_second),
            Function::SinPlusXCos => (sin_plus_x_cos, sin_plus_x_cos_prime, sin_plus_x_cos_second),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Function::Sin2x => "f(x) = sin(2x)",
            Function::SinPlusXCos => "f(x) = sin(x) + x cos(x)",
        }
    }

    fn default_interval(self) -> (f64, f64) {
        match self {
            Function::Sin2x => (-4.0, 4.0),
            Function::SinPlusXCos => (-5.0, 5.0),
        }
    }
}

/// CLI arguments for the extrema search
#[derive(Parser, Debug)]
#[command(name = "find_extrema")]
#[command(about = "Locate extrema of a scalar function with Newton's method")]
struct Args {
    /// Function to analyse
    #[arg(short, long, value_enum, default_value_t = Function::Sin2x)]
    function: Function,

    /// Lower end of the interval (defaults per function)
    #[arg(long, allow_hyphen_values = true)]
    low: Option<f64>,

    /// Upper end of the interval (defaults per function)
    #[arg(long, allow_hyphen_values = true)]
    high: Option<f64>,

    /// Number of evenly spaced starting points
    #[arg(short = 'n', long, default_value_t = 20)]
    starts: usize,

    /// Write an HTML plot of the function with its extrema to this file
    #[arg(short, long)]
    plot: Option<PathBuf>,

    /// Print the extrema as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn plot_extrema(
    f: Scalar,
    label: &str,
    interval: (f64, f64),
    extrema: &[Extremum],
    filename: &Path,
) {
    let samples = 400;
    let xs: Vec<f64> = (0..samples)
        .map(|i| interval.0 + (interval.1 - interval.0) * i as f64 / (samples - 1) as f64)
        .collect();
    let ys: Vec<f64> = xs.iter().map(|&x| f(x)).collect();

    let mut plot = Plot::new();
    plot.add_trace(Scatter::new(xs, ys).mode(Mode::Lines).name(label));

    for (kind, color) in [(ExtremumKind::Maximum, "red"), (ExtremumKind::Minimum, "blue")] {
        let (px, py): (Vec<f64>, Vec<f64>) =
            extrema.iter().filter(|e| e.kind == kind).map(|e| (e.x, e.value)).unzip();
        plot.add_trace(
            Scatter::new(px, py)
                .mode(Mode::Markers)
                .name(&kind.to_string())
                .marker(Marker::new().color(color).size(10)),
        );
    }

    plot.set_layout(Layout::new().title(Title::with_text(&format!("Extrema of {}", label))));
    plot.write_html(filename);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let (f, f1, f2) = args.function.triple();
    let default = args.function.default_interval();
    let interval = (args.low.unwrap_or(default.0), args.high.unwrap_or(default.1));
    info!(
        "searching {} on [{}, {}] from {} starting points",
        args.function.label(),
        interval.0,
        interval.1,
        args.starts
    );

    let extrema = find_extrema(f, f1, f2, interval, args.starts)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&extrema)?);
    } else {
        println!("{}", args.function.label());
        for e in &extrema {
            println!("x = {:.4}, f(x) = {:.4}, {}", e.x, e.value, e.kind);
        }
    }

    if let Some(filename) = &args.plot {
        plot_extrema(f, args.function.label(), interval, &extrema, filename);
        info!("plot written to {}", filename.display());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let args = Args::parse_from(["find_extrema"]);
        assert_eq!(args.function, Function::Sin2x);
        assert_eq!(args.starts, 20);
        assert!(args.low.is_none() && args.plot.is_none());
        assert!(!args.json);
    }

    #[test]
    fn parse_function_and_interval() {
        let args = Args::parse_from([
            "find_extrema",
            "-f",
            "sin-plus-x-cos",
            "--low",
            "-2.5",
            "--high",
            "1",
            "--json",
        ]);
        assert_eq!(args.function, Function::SinPlusXCos);
        assert_eq!(args.low, Some(-2.5));
        assert_eq!(args.high, Some(1.0));
        assert!(args.json);
    }
}
