mod record;
#[cfg(test)]
mod tests;

pub use record::{RecordPatch, TransactionRecord};
