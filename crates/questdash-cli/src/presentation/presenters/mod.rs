mod dashboard;

pub use dashboard::build_dashboard;
