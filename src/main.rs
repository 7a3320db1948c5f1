use gistemp::{Gistemp, GistempError};
use log::info;
use std::path::PathBuf;

const DEFAULT_CSV_PATH: &str = "ExcelFormattedGISTEMPDataCSV.csv";

fn main() -> Result<(), GistempError> {
    // RUST_LOG=info (or debug) shows progress
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CSV_PATH));

    let anomalies = Gistemp::from_csv(&path).call()?;
    if anomalies.smoothing.is_fallback() {
        info!("Trend line is a {}", anomalies.smoothing);
    }

    anomalies.plot()
}
