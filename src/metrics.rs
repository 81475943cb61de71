//! Display-only derivations. Nothing here is stored in the session record;
//! every value is recomputed from it on render.

use crate::history::History;
use crate::util::mean;

/// Mean energy rate over the history window, 0 when the window is empty.
pub fn avg_energy(history: &History) -> f64 {
    let samples: Vec<f64> = history.iter().map(|p| p.energy_kwh).collect();
    mean(&samples).unwrap_or(0.0)
}

/// Sum of carbon samples over the history window, 0 when empty.
pub fn total_carbon(history: &History) -> f64 {
    history.iter().map(|p| p.carbon_kg).sum()
}

/// Carbon per unit energy as a percentage. Clamped to 0 when the energy
/// sample is zero; the derivation must stay total.
pub fn carbon_intensity(carbon_kg: f64, energy_kwh: f64) -> f64 {
    if energy_kwh == 0.0 {
        return 0.0;
    }
    carbon_kg / energy_kwh * 100.0
}

/// Average power drawn from the latest energy sample, for the card trend.
pub fn avg_power_kw(energy_kwh: f64) -> f64 {
    energy_kwh * 0.5
}

/// "Xh Ym" card label from simulated hours.
pub fn format_runtime(hours: f64) -> String {
    let whole_hours = hours.floor() as u64;
    let minutes = (hours.fract() * 60.0).floor() as u64;
    format!("{}h {}m", whole_hours, minutes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryPoint;

    fn history_of(points: &[(f64, f64)]) -> History {
        let mut history = History::new();
        for (i, &(energy, carbon)) in points.iter().enumerate() {
            history.push(HistoryPoint::new(format!("00:{:02}", i), energy, carbon));
        }
        history
    }

    #[test]
    fn test_avg_energy_empty() {
        assert_eq!(avg_energy(&History::new()), 0.0);
    }

    #[test]
    fn test_avg_energy() {
        let history = history_of(&[(1.0, 0.5), (2.0, 0.5), (3.0, 0.5)]);
        assert_eq!(avg_energy(&history), 2.0);
    }

    #[test]
    fn test_total_carbon_empty() {
        assert_eq!(total_carbon(&History::new()), 0.0);
    }

    #[test]
    fn test_total_carbon() {
        let history = history_of(&[(1.0, 0.25), (1.0, 0.5), (1.0, 0.75)]);
        assert_eq!(total_carbon(&history), 1.5);
    }

    #[test]
    fn test_carbon_intensity() {
        assert_eq!(carbon_intensity(0.5, 2.0), 25.0);
        assert_eq!(carbon_intensity(1.2, 1.2), 100.0);
    }

    #[test]
    fn test_carbon_intensity_zero_energy_clamps() {
        assert_eq!(carbon_intensity(0.8, 0.0), 0.0);
    }

    #[test]
    fn test_avg_power() {
        assert_eq!(avg_power_kw(2.0), 1.0);
        assert_eq!(avg_power_kw(0.0), 0.0);
    }

    #[test]
    fn test_format_runtime() {
        assert_eq!(format_runtime(0.0), "0h 0m");
        assert_eq!(format_runtime(0.5), "0h 30m");
        assert_eq!(format_runtime(2.75), "2h 45m");
        assert_eq!(format_runtime(26.25), "26h 15m");
    }
}
