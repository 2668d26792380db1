mod gain_report;

pub use gain_report::{GainReport, GainReportEntry, ReportFormat};
