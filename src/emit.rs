use std::io::Write;

use crate::domain::ticket::DashboardOutput;
use crate::error::{AppError, AppResult};

/// Writes the dashboard document as a single JSON line. The consumer
/// parses stdout verbatim, so nothing else may ever be written there.
pub fn write_document<W: Write>(mut writer: W, output: &DashboardOutput) -> AppResult<()> {
    let document = serde_json::to_string(output)
        .map_err(|err| AppError::Logic(format!("failed to serialize dashboard output: {err}")))?;
    writeln!(writer, "{document}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ticket::DashboardTicket;

    #[test]
    fn emits_the_empty_fallback_document() {
        let mut buffer = Vec::new();
        write_document(&mut buffer, &DashboardOutput::default()).unwrap();

        assert_eq!(buffer, b"{\"tickets\":[],\"groupCount\":0}\n");
    }

    #[test]
    fn emits_exactly_one_line() {
        let output = DashboardOutput {
            tickets: vec![DashboardTicket {
                id: 1,
                title: "Printer down".to_string(),
                assigned_to: "Help Desk".to_string(),
                status: "New".to_string(),
                requestor: "Unknown".to_string(),
            }],
            group_count: 12,
        };

        let mut buffer = Vec::new();
        write_document(&mut buffer, &output).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.ends_with('\n'));
        assert!(text.contains("\"groupCount\":12"));
    }
}
