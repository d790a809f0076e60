use clap::{Parser, ValueEnum};
use log::{info, warn};
use plotly::{
	Layout, Plot, Scatter,
	common::{Mode, Title},
};
use std::fs;
use std::path::{Path, PathBuf};

use evopt::{
	ESConfig, FAConfig, GAConfig, evolution_strategy, firefly_algorithm, genetic_algorithm,
	run_recorded_evolution_strategy, run_recorded_firefly, run_recorded_genetic_algorithm,
};
use evopt_env::{get_data_generated_dir, get_records_dir};
use evopt_testfunctions::{
	function_names, get_function, get_function_bounds_vec, get_function_metadata,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algo {
	/// Generational genetic algorithm
	Ga,
	/// Self-adaptive (mu + lambda) evolution strategy
	Es,
	/// Firefly algorithm
	Fa,
}

impl Algo {
	fn name(self) -> &'static str {
		match self {
			Algo::Ga => "ga",
			Algo::Es => "es",
			Algo::Fa => "fa",
		}
	}
}

/// CLI arguments for a single optimization run
#[derive(Parser, Debug)]
#[command(name = "run_evopt")]
#[command(about = "Minimize a test function with a genetic algorithm, an evolution strategy or a firefly swarm")]
struct Args {
	/// Optimizer to run
	#[arg(short, long, value_enum, default_value_t = Algo::Ga)]
	algo: Algo,

	/// Test function name
	#[arg(short, long, default_value = "sphere")]
	function: String,

	/// Number of dimensions
	#[arg(short, long, default_value_t = 2)]
	dim: usize,

	/// Bounds applied to every dimension (min,max); defaults to the function metadata
	#[arg(short, long)]
	bounds: Option<String>,

	/// JSON file with a GAConfig, ESConfig or FAConfig; command line flags override it
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Number of generations
	#[arg(short, long)]
	generations: Option<usize>,

	/// GA population size
	#[arg(long)]
	population_size: Option<usize>,

	/// GA crossover rate
	#[arg(long)]
	crossover_rate: Option<f64>,

	/// GA per-gene mutation rate
	#[arg(long)]
	mutation_rate: Option<f64>,

	/// ES number of parents
	#[arg(long)]
	mu: Option<usize>,

	/// ES number of offspring
	#[arg(long)]
	lambda: Option<usize>,

	/// ES upper limit of the initial step sizes
	#[arg(long)]
	initial_sigma: Option<f64>,

	/// FA swarm size
	#[arg(long)]
	n_fireflies: Option<usize>,

	/// Random seed
	#[arg(short, long)]
	seed: Option<u64>,

	/// Write the per-generation trace as CSV
	#[arg(long)]
	record: bool,

	/// Write an HTML convergence plot of the best objective
	#[arg(long)]
	plot: bool,

	/// Output directory for CSV and HTML files (default: under $EVOPT_DIR/data_generated)
	#[arg(short, long)]
	output_dir: Option<PathBuf>,

	/// List the available functions and exit
	#[arg(long)]
	list: bool,
}

fn parse_bounds(bounds_str: &str) -> Result<(f64, f64), Box<dyn std::error::Error>> {
	let cleaned = bounds_str.trim_matches(|c| c == '\'' || c == '"');
	let parts: Vec<&str> = if cleaned.contains(',') {
		cleaned.split(',').collect()
	} else {
		cleaned.split_whitespace().collect()
	};
	if parts.len() != 2 {
		return Err("Bounds must be in format 'min,max' or 'min max'".into());
	}
	let min = parts[0].trim().parse::<f64>()?;
	let max = parts[1].trim().parse::<f64>()?;
	Ok((min, max))
}

fn ga_config(args: &Args) -> Result<GAConfig, Box<dyn std::error::Error>> {
	let mut config: GAConfig = match &args.config {
		Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
		None => GAConfig::default(),
	};
	if let Some(v) = args.generations {
		config.generations = v;
	}
	if let Some(v) = args.population_size {
		config.population_size = v;
	}
	if let Some(v) = args.crossover_rate {
		config.crossover_rate = v;
	}
	if let Some(v) = args.mutation_rate {
		config.mutation_rate = v;
	}
	if args.seed.is_some() {
		config.seed = args.seed;
	}
	Ok(config)
}

fn es_config(args: &Args) -> Result<ESConfig, Box<dyn std::error::Error>> {
	let mut config: ESConfig = match &args.config {
		Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
		None => ESConfig::default(),
	};
	if let Some(v) = args.generations {
		config.generations = v;
	}
	if let Some(v) = args.mu {
		config.mu = v;
	}
	if let Some(v) = args.lambda {
		config.lambda = v;
	}
	if let Some(v) = args.initial_sigma {
		config.initial_sigma = v;
	}
	if args.seed.is_some() {
		config.seed = args.seed;
	}
	Ok(config)
}

fn fa_config(args: &Args) -> Result<FAConfig, Box<dyn std::error::Error>> {
	let mut config: FAConfig = match &args.config {
		Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
		None => FAConfig::default(),
	};
	if let Some(v) = args.generations {
		config.generations = v;
	}
	if let Some(v) = args.n_fireflies {
		config.n_fireflies = v;
	}
	if args.seed.is_some() {
		config.seed = args.seed;
	}
	Ok(config)
}

/// `--output-dir` if given, else the records or data_generated directory under EVOPT_DIR
fn output_dir(args: &Args, records: bool) -> Result<PathBuf, Box<dyn std::error::Error>> {
	match &args.output_dir {
		Some(dir) => Ok(dir.clone()),
		None if records => Ok(get_records_dir()?),
		None => Ok(get_data_generated_dir()?),
	}
}

/// Best objective per generation, log scale when every value is positive
fn plot_convergence(
	history: &[f64],
	title: &str,
	output_dir: &Path,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
	fs::create_dir_all(output_dir)?;
	let generations: Vec<usize> = (1..=history.len()).collect();
	let best_trace = Scatter::new(generations, history.to_vec())
		.mode(Mode::Lines)
		.name("Best So Far")
		.line(plotly::common::Line::new().color("rgba(0, 100, 200, 0.8)").width(3.0));

	let y_type = if history.iter().all(|&v| v > 0.0) {
		plotly::layout::AxisType::Log
	} else {
		plotly::layout::AxisType::Linear
	};
	let layout = Layout::new()
		.title(Title::with_text(&format!("Convergence: {}", title)))
		.x_axis(plotly::layout::Axis::new().title(Title::with_text("Generation")))
		.y_axis(
			plotly::layout::Axis::new().title(Title::with_text("Best Objective")).type_(y_type),
		);

	let mut plot = Plot::new();
	plot.add_trace(best_trace);
	plot.set_layout(layout);

	let filename = output_dir.join(format!("{}_convergence.html", title));
	plot.write_html(&filename);
	Ok(filename)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	if args.list {
		for name in function_names() {
			println!("{}", name);
		}
		return Ok(());
	}

	if args.dim == 0 {
		return Err("dimension must be at least 1".into());
	}
	let func = get_function(&args.function)
		.ok_or_else(|| format!("unknown function '{}', try --list", args.function))?;
	if let Some(meta) = get_function_metadata().get(&args.function) {
		if meta.dimensions == [2] && args.dim != 2 {
			return Err(format!("{} is only defined in 2 dimensions", args.function).into());
		}
	}

	let bounds = match &args.bounds {
		Some(b) => vec![parse_bounds(b)?; args.dim],
		None => get_function_bounds_vec(&args.function, args.dim, (-5.0, 5.0)),
	};
	let run_name = format!("{}_{}", args.algo.name(), args.function);
	info!(
		"{} on {} in {} dimensions, bounds {:?}",
		args.algo.name(),
		args.function,
		args.dim,
		bounds[0]
	);

	let records = if args.record { Some(output_dir(&args, true)?) } else { None };

	let (x, fun, history, nfev) = match args.algo {
		Algo::Ga => {
			let config = ga_config(&args)?;
			let report = match &records {
				Some(dir) => {
					let (report, csv) =
						run_recorded_genetic_algorithm(&run_name, &func, &bounds, config, dir)?;
					info!("trace written to {}", csv.display());
					report
				}
				_ => genetic_algorithm(&func, &bounds, config)?,
			};
			(report.x, report.fun, report.history, report.nfev)
		}
		Algo::Es => {
			let config = es_config(&args)?;
			let (low, high) = bounds[0];
			let report = match &records {
				Some(dir) => {
					let (report, csv) = run_recorded_evolution_strategy(
						&run_name, &func, (low, high), args.dim, config, dir,
					)?;
					info!("trace written to {}", csv.display());
					report
				}
				_ => evolution_strategy(&func, (low, high), args.dim, config)?,
			};
			(report.x, report.fun, report.history, report.nfev)
		}
		Algo::Fa => {
			let config = fa_config(&args)?;
			let report = match &records {
				Some(dir) => {
					let (report, csv) = run_recorded_firefly(&run_name, &func, &bounds, config, dir)?;
					info!("trace written to {}", csv.display());
					report
				}
				_ => firefly_algorithm(&func, &bounds, config)?,
			};
			(report.x, report.fun, report.history, report.nfev)
		}
	};

	println!("best x   = {:?}", x.to_vec());
	println!("best f   = {:.8}", fun);
	println!("nfev     = {}", nfev);

	if let Some(known) = get_function_metadata().get(&args.function) {
		if let Some((_, f_star)) = known.global_minima.first() {
			if (fun - f_star).abs() > 1e-2 {
				warn!("result {:.6} is far from the known minimum {:.6}", fun, f_star);
			}
		}
	}

	if args.plot {
		let filename = plot_convergence(&history, &run_name, &output_dir(&args, false)?)?;
		info!("convergence plot written to {}", filename.display());
	}

	Ok(())
}
