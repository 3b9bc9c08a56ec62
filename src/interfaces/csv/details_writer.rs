use crate::domain::response::ConfirmationResult;
use std::io::{self, Write};

/// Writes a confirmation result as `field,value` CSV rows.
///
/// The first data row is `confirmed`, followed by every detail in name order.
pub struct DetailsWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> DetailsWriter<W> {
    /// Creates a new `DetailsWriter` over any `Write` sink (e.g., File, Stdout).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_result(&mut self, result: &ConfirmationResult) -> csv::Result<()> {
        self.writer.write_record(["field", "value"])?;
        let confirmed = if result.confirmed { "true" } else { "false" };
        self.writer.write_record(["confirmed", confirmed])?;
        for (name, value) in &result.details {
            self.writer.write_record([name, value])?;
        }
        self.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
