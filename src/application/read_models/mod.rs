pub mod report_view;
pub mod report_view_builder;

pub use report_view::{
    CveCountView, ReportView, ScanMetadataView, SeverityCountView, SummaryView,
};
pub use report_view_builder::ReportViewBuilder;
