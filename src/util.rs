pub fn mean(data: &[f64]) -> Option<f64> {
    let sum = data.iter().sum::<f64>();
    let count = data.len();

    match count {
        positive if positive > 0 => Some(sum / count as f64),
        _ => None,
    }
}

/// Round to two decimal places, the precision every displayed and exported
/// sample carries.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[10., 20., 30., 15., 22.]), Some(19.4));
        assert_eq!(mean(&[15., 7., 55., 12., 4.]), Some(18.6));
    }

    #[test]
    fn test_mean_single_value() {
        assert_eq!(mean(&[42.0]), Some(42.0));
    }

    #[test]
    fn test_mean_empty_slice() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_negative_values() {
        assert_eq!(mean(&[-5.0, -10.0, -15.0]), Some(-10.0));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.678), 2.68);
        assert_eq!(round2(2.4999), 2.5);
        assert_eq!(round2(0.2), 0.2);
        assert_eq!(round2(1.23456), 1.23);
    }

    #[test]
    fn test_round2_negative() {
        assert_eq!(round2(-1.236), -1.24);
    }
}
