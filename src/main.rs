use std::process::ExitCode;

use shape_perceptron::{pipeline, ArtifactWriter, PerceptronConfig, RunEvent};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("shape_perceptron=warn"))
        .with_writer(std::io::stderr)
        .init();

    let config = PerceptronConfig::default();

    let result = ArtifactWriter::from_config(&config).and_then(|writer| {
        pipeline::run_with_events(&config, Some(&writer), |event| match event {
            RunEvent::Untrained { fail_rate } => {
                println!("The fail rate of untrained model is {fail_rate:.6}")
            }
            RunEvent::Pass(stats) => println!("adjusted {} times", stats.adjustments),
            RunEvent::Trained { fail_rate } => {
                println!("The fail rate of trained model is {fail_rate:.6}")
            }
        })
    });

    match result {
        Ok(report) => {
            println!(
                "Training ran {} pass(es){}; artifacts in {}/",
                report.training.passes_run,
                if report.training.converged { " and converged" } else { "" },
                config.data_folder.display(),
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
