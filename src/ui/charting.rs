use crate::history::History;

/// Build the (x, y) tuples for the energy and carbon datasets.
/// X is the sample's position in the window; labels carry the clock time.
pub fn series(history: &History) -> (Vec<(f64, f64)>, Vec<(f64, f64)>) {
    let energy = history
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.energy_kwh))
        .collect();
    let carbon = history
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.carbon_kg))
        .collect();
    (energy, carbon)
}

/// X span of the window; degenerate windows get a [0, 1] span so the
/// axis stays drawable.
pub fn x_bounds(history: &History) -> [f64; 2] {
    let upper = history.len().saturating_sub(1).max(1) as f64;
    [0.0, upper]
}

/// First/last time labels for the X axis.
pub fn x_labels(history: &History) -> (String, String) {
    let first = history
        .first()
        .map(|p| p.time_label.clone())
        .unwrap_or_else(|| "00:00".to_string());
    let last = history
        .last()
        .map(|p| p.time_label.clone())
        .unwrap_or_else(|| "00:00".to_string());
    (first, last)
}

/// Upper Y bound: the largest sample in the window rounded up, at least 1.
pub fn y_upper(history: &History) -> f64 {
    let max = history
        .iter()
        .flat_map(|p| [p.energy_kwh, p.carbon_kg])
        .fold(0.0_f64, f64::max);
    max.ceil().max(1.0)
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryPoint;

    fn sample_history() -> History {
        let mut history = History::new();
        history.push(HistoryPoint::new("00:06", 1.5, 0.4));
        history.push(HistoryPoint::new("00:12", 2.1, 0.9));
        history.push(HistoryPoint::new("00:18", 0.8, 0.3));
        history
    }

    #[test]
    fn test_series_indexes_points() {
        let (energy, carbon) = series(&sample_history());
        assert_eq!(energy, vec![(0.0, 1.5), (1.0, 2.1), (2.0, 0.8)]);
        assert_eq!(carbon, vec![(0.0, 0.4), (1.0, 0.9), (2.0, 0.3)]);
    }

    #[test]
    fn test_series_empty() {
        let (energy, carbon) = series(&History::new());
        assert!(energy.is_empty());
        assert!(carbon.is_empty());
    }

    #[test]
    fn test_x_bounds() {
        assert_eq!(x_bounds(&sample_history()), [0.0, 2.0]);
        assert_eq!(x_bounds(&History::new()), [0.0, 1.0]);
    }

    #[test]
    fn test_x_labels() {
        let (first, last) = x_labels(&sample_history());
        assert_eq!(first, "00:06");
        assert_eq!(last, "00:18");

        let (first, last) = x_labels(&History::new());
        assert_eq!(first, "00:00");
        assert_eq!(last, "00:00");
    }

    #[test]
    fn test_y_upper_rounds_up() {
        assert_eq!(y_upper(&sample_history()), 3.0);
        assert_eq!(y_upper(&History::new()), 1.0);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(1.0), "1");
        assert_eq!(format_label(1.2345), "1.23");
    }
}
