mod suite;

pub use suite::{write_summary, ScenarioOutcome, SuiteRunner};
