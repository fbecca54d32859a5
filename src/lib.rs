pub mod constants;
pub mod sweep_axis;
pub mod mixture;
pub mod oracle;
pub mod filter;
pub mod series;
pub mod sweep;
pub mod yield_grid;
pub mod sabatier;
pub mod report;
pub mod chart_png;
