use std::collections::VecDeque;

/// One retained time-series sample: the label shown on the chart axis plus
/// the energy/carbon readings at that tick, rounded to two decimals.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    pub time_label: String,
    pub energy_kwh: f64,
    pub carbon_kg: f64,
}

impl HistoryPoint {
    pub fn new(time_label: impl Into<String>, energy_kwh: f64, carbon_kg: f64) -> Self {
        Self {
            time_label: time_label.into(),
            energy_kwh,
            carbon_kg,
        }
    }
}

/// Sliding window over the most recent samples. Push-only; once the capacity
/// is exceeded the oldest point is evicted first (strict FIFO).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    points: VecDeque<HistoryPoint>,
}

impl History {
    pub const CAPACITY: usize = 20;

    pub fn new() -> Self {
        Self {
            points: VecDeque::with_capacity(Self::CAPACITY),
        }
    }

    pub fn push(&mut self, point: HistoryPoint) {
        self.points.push_back(point);
        while self.points.len() > Self::CAPACITY {
            self.points.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn first(&self) -> Option<&HistoryPoint> {
        self.points.front()
    }

    pub fn last(&self) -> Option<&HistoryPoint> {
        self.points.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryPoint> {
        self.points.iter()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryPoint;
    type IntoIter = std::collections::vec_deque::Iter<'a, HistoryPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
