use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use csv::Writer;

use crate::session::SessionState;

const REPORT_BASENAME: &str = "carbon-dashboard-report";

pub const CSV_HEADER: [&str; 5] = [
    "Time",
    "Runtime (h)",
    "Energy (kWh)",
    "Carbon (kg CO2)",
    "Progress (%)",
];

/// Render the report payload: header row plus one row per history point.
///
/// The runtime and progress columns repeat the current session values on
/// every row; the time/energy/carbon columns come from the history point.
/// An empty history yields the header row alone.
pub fn render(state: &SessionState) -> io::Result<String> {
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record(CSV_HEADER).map_err(into_io)?;

    let runtime = format!("{:.2}", state.runtime_hours);
    let progress = format!("{:.0}", state.progress_percent);

    for point in &state.history {
        let energy = format!("{:.2}", point.energy_kwh);
        let carbon = format!("{:.2}", point.carbon_kg);
        writer
            .write_record([
                point.time_label.as_str(),
                runtime.as_str(),
                energy.as_str(),
                carbon.as_str(),
                progress.as_str(),
            ])
            .map_err(into_io)?;
    }

    let bytes = writer.into_inner().map_err(into_io)?;
    String::from_utf8(bytes).map_err(into_io)
}

/// `carbon-dashboard-report-<ISO-date>.csv`, stamped with today's date.
pub fn filename() -> String {
    format!("{}-{}.csv", REPORT_BASENAME, Local::now().format("%Y-%m-%d"))
}

/// Write the rendered report into `dir` and return the full path.
pub fn write(state: &SessionState, dir: &Path) -> io::Result<PathBuf> {
    let payload = render(state)?;
    fs::create_dir_all(dir)?;
    let path = dir.join(filename());
    fs::write(&path, payload)?;
    Ok(path)
}

fn into_io<E>(err: E) -> io::Error
where
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    io::Error::new(io::ErrorKind::Other, err)
}
