//! Prints intake channel velocity for a reference engine.
//!
//! Evaluates the velocity at a fixed speed, then sweeps the default RPM
//! window and prints each sample with its filling band.

use std::error::Error as _;
use std::io::{self, Write};
use std::process::ExitCode;

use intake_port_models::models::engine::intake_port::{
    EngineGeometry, EvaluateError, EvaluationRequest, EvaluationResult, FillingBand,
    FillingThresholds, Series, evaluate,
};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use uom::si::{f64::Length, f64::Velocity, length::millimeter, velocity::meter_per_second};

const FIXED_RPM: u32 = 4000;

#[derive(Debug, Error)]
enum RunError {
    #[error("evaluation failed")]
    Evaluate(#[from] EvaluateError),

    #[error("failed to write report")]
    Io(#[from] io::Error),
}

/// Renders evaluation results; the model itself never prints.
trait Presenter {
    fn scalar(&mut self, rpm: u32, velocity: Velocity) -> io::Result<()>;
    fn series(&mut self, series: &Series) -> io::Result<()>;
}

struct ConsolePresenter<W> {
    out: W,
    thresholds: FillingThresholds,
}

impl<W: Write> Presenter for ConsolePresenter<W> {
    fn scalar(&mut self, rpm: u32, velocity: Velocity) -> io::Result<()> {
        writeln!(
            self.out,
            "{rpm} rpm: {:.2} m/s",
            velocity.get::<meter_per_second>()
        )
    }

    fn series(&mut self, series: &Series) -> io::Result<()> {
        writeln!(self.out, "{:>6}  {:>8}  band", "rpm", "m/s")?;
        for sample in series {
            let band = match self.thresholds.classify(sample.velocity) {
                FillingBand::Low => "low",
                FillingBand::Good => "good",
                FillingBand::Acceptable => "acceptable",
                FillingBand::Excessive => "excessive",
            };
            writeln!(
                self.out,
                "{:>6}  {:>8.2}  {band}",
                sample.rpm,
                sample.velocity.get::<meter_per_second>()
            )?;
        }
        if let Some(peak) = series.peak() {
            writeln!(
                self.out,
                "peak: {:.2} m/s at {} rpm",
                peak.velocity.get::<meter_per_second>(),
                peak.rpm
            )?;
        }
        Ok(())
    }
}

fn run(geometry: &EngineGeometry, presenter: &mut impl Presenter) -> Result<(), RunError> {
    if let EvaluationResult::Scalar(velocity) =
        evaluate(geometry, EvaluationRequest::Fixed(FIXED_RPM))?
    {
        presenter.scalar(FIXED_RPM, velocity)?;
    }
    if let EvaluationResult::Series(series) = evaluate(geometry, EvaluationRequest::Swept(None))? {
        presenter.series(&series)?;
    }
    Ok(())
}

/// Joins an error and all of its sources into one line.
fn error_chain(err: &RunError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to init logging. {e}");
    }

    let geometry = EngineGeometry {
        piston_diameter: Length::new::<millimeter>(82.0),
        piston_stroke: Length::new::<millimeter>(84.0),
        channel_diameter: Length::new::<millimeter>(27.5),
        valve_count: 4,
    };
    info!(?geometry, "evaluating reference engine");

    let mut presenter = ConsolePresenter {
        out: io::stdout().lock(),
        thresholds: FillingThresholds::default(),
    };

    match run(&geometry, &mut presenter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = ?e, "intake port report failed");
            eprintln!("{}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}
