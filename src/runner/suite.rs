use std::future::Future;
use std::io::{self, Write};
use std::time::{Duration, Instant};

use tracing::{error, info};

use crate::client::ApiClient;
use crate::workflow::{Scenarios, VerificationError};

/// The result of one scenario: its name, pass/fail state and wall-clock time.
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub result: Result<(), VerificationError>,
    pub duration: Duration
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs the scenario catalog in order against one collaborator endpoint.
///
/// A failed scenario does not stop the suite; every outcome is collected so
/// the summary reports the whole catalog.
pub struct SuiteRunner {
    scenarios: Scenarios
}

impl SuiteRunner {
    pub fn new(client: ApiClient) -> Self {
        Self {
            scenarios: Scenarios::new(client)
        }
    }

    pub async fn run_all(&self) -> Vec<ScenarioOutcome> {
        vec![
            self.run("batch_create_unique_emails", self.scenarios.batch_create_unique_emails()).await,
            self.run("listing_contains_no_duplicate_emails", self.scenarios.listing_contains_no_duplicate_emails()).await,
            self.run("account_number_update_round_trip", self.scenarios.account_number_update_round_trip()).await,
            self.run("deposit_then_withdrawal_adjusts_balance", self.scenarios.deposit_then_withdrawal_adjusts_balance()).await,
            self.run("overdraw_write_is_accepted", self.scenarios.overdraw_write_is_accepted()).await,
        ]
    }

    async fn run<F>(&self, name: &'static str, scenario: F) -> ScenarioOutcome
    where
        F: Future<Output = Result<(), VerificationError>>
    {
        let timer = Instant::now();
        let result = scenario.await;
        let duration = timer.elapsed();

        match &result {
            Ok(()) => info!("Scenario [{name}] passed in {duration:?}"),
            Err(failure) => error!("Scenario [{name}] failed: {failure}")
        }

        ScenarioOutcome { name, result, duration }
    }
}

/// Writes the `scenario,outcome,duration_ms` summary for a finished run.
pub fn write_summary<W: Write>(outcomes: &[ScenarioOutcome], output: &mut W) -> io::Result<()> {
    writeln!(output, "scenario,outcome,duration_ms")?;

    for outcome in outcomes {
        let state = if outcome.passed() { "passed" } else { "failed" };
        writeln!(output, "{},{},{}", outcome.name, state, outcome.duration.as_millis())?;
    }

    output.flush()?;

    Ok(())
}
