use clap::Parser;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt};

mod catalog;
mod error;
mod layout;
mod log;
mod model;
mod pipeline;
mod plot;
mod render;
mod summary;

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "list-bench-plotter")]
#[command(about = "Turn list benchmark logs into gnuplot data files and charts", long_about = None)]
struct Cli {
    /// <LOG> <TEMPLATE> <OUTPUT_DIR>; any other count exits without doing anything.
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// Plotting program, looked up on PATH.
    #[arg(long, default_value = plot::DEFAULT_PLOTTER)]
    plotter: String,

    /// Write data files and scripts only.
    #[arg(long, default_value_t = false)]
    no_plot: bool,

    /// Abort when the plotter exits with a non-zero status.
    #[arg(long, default_value_t = false)]
    fail_on_plot_error: bool,

    /// Also write a JSON run summary to this path.
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Extra tracing filter directives, e.g. `list_bench_plotter=debug`.
    #[arg(short, long)]
    log: Vec<String>,
}

impl Cli {
    /// None unless exactly three paths were given.
    fn run_config(&self) -> Option<pipeline::RunConfig> {
        let [log, template, output] = self.paths.as_slice() else {
            return None;
        };

        let mut config = pipeline::RunConfig::new(log, template, output);
        config.plotter = (!self.no_plot).then(|| plot::Plotter::new(&self.plotter));
        config.fail_on_plot_error = self.fail_on_plot_error;
        Some(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log)?;

    execute(&cli)
}

fn init_tracing(directives: &[String]) -> Result<()> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("warn".to_owned());
    let mut env_filter = EnvFilter::new(format!("list_bench_plotter={log_level}"));
    for directive in directives {
        env_filter = env_filter.add_directive(directive.parse()?);
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layer().with_writer(std::io::stderr).compact())
        .init();
    Ok(())
}

fn execute(cli: &Cli) -> Result<()> {
    let Some(config) = cli.run_config() else {
        debug!("expected 3 paths, got {}; nothing to do", cli.paths.len());
        return Ok(());
    };

    let summary = pipeline::run(&config)?;
    for op in &summary.operations {
        println!("Wrote {}", op.data_file.display());
    }

    if let Some(path) = &cli.summary {
        summary.write_json(path)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("list-bench-plotter").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn wrong_path_count_is_a_clean_no_op() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("out");
        let out = out.to_str().unwrap();

        for args in [vec!["a.log", out], vec!["a.log", "t.plt", out, "extra"]] {
            let cli = parse(&args);
            assert!(cli.run_config().is_none());
            execute(&cli).unwrap();
        }
        assert!(!tmp.path().join("out").exists());
    }

    #[test]
    fn failed_run_returns_the_error_to_main() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.log");
        let out = tmp.path().join("out");
        let cli = parse(&[missing.to_str().unwrap(), "t.plt", out.to_str().unwrap()]);

        let err = execute(&cli).unwrap_err();
        assert!(format!("{err:#}").contains("missing.log"));
        assert!(!out.exists());
    }

    #[test]
    fn three_paths_build_config() {
        let cli = parse(&["a.log", "t.plt", "out", "--plotter", "gp", "--fail-on-plot-error"]);
        let config = cli.run_config().unwrap();
        assert_eq!(config.log, PathBuf::from("a.log"));
        assert_eq!(config.template, PathBuf::from("t.plt"));
        assert_eq!(config.output, PathBuf::from("out"));
        assert_eq!(config.plotter.map(|p| p.program().to_string()), Some("gp".to_string()));
        assert!(config.fail_on_plot_error);
    }

    #[test]
    fn no_plot_disables_plotter_and_summary_is_written() {
        let tmp = tempfile::tempdir().unwrap();
        let log = tmp.path().join("bench.log");
        let template = tmp.path().join("t.plt");
        let summary = tmp.path().join("summary.json");
        fs::write(&log, "arrayListAddAtEnd: 5\n").unwrap();
        fs::write(&template, "plot \"DATA_FILE_NAME_PLACEHOLDER\"\n").unwrap();

        let out = tmp.path().join("out");
        let cli = parse(&[
            log.to_str().unwrap(),
            template.to_str().unwrap(),
            out.to_str().unwrap(),
            "--no-plot",
            "--summary",
            summary.to_str().unwrap(),
        ]);
        assert!(cli.run_config().unwrap().plotter.is_none());
        execute(&cli).unwrap();

        assert_eq!(
            fs::read_to_string(out.join("data").join("AddAtEnd.dat")).unwrap(),
            "100000  5"
        );
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&summary).unwrap()).unwrap();
        assert_eq!(json["operations"].as_array().unwrap().len(), 13);
        assert_eq!(json["operations"][1]["operation"], "AddAtEnd");
        assert_eq!(json["operations"][1]["blocks"][0], "arrayList");
        assert_eq!(json["operations"][1]["missing"][0], "indexedLinkedList");
        assert!(json["operations"][1]["plot"].is_null());
    }
}
