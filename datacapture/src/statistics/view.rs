// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::capture::FrequencyTable;

/// Immutable snapshot of a [`DataCapture`](crate::capture::DataCapture).
///
/// See the [statistics module level documentation](crate::statistics) for more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statistics {
    values: Vec<u32>,
    frequency: FrequencyTable,
}

impl Statistics {
    pub(crate) fn new(values: Vec<u32>, frequency: FrequencyTable) -> Self {
        debug_assert_eq!(
            frequency.total(),
            values.len() as u64,
            "frequency total does not match captured count"
        );
        Self { values, frequency }
    }

    /// Returns the largest value the originating capture accepted.
    pub fn domain_max(&self) -> u32 {
        self.frequency.domain_max()
    }

    /// Returns the number of values in the snapshot.
    pub fn n(&self) -> u64 {
        self.values.len() as u64
    }

    /// Returns true if the snapshot holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the number of values strictly less than `value`.
    ///
    /// Any integer is accepted; bounds outside the domain yield `0` or
    /// [`n`](Self::n).
    pub fn less_than(&self, value: i64) -> u64 {
        self.values
            .iter()
            .filter(|&&v| i64::from(v) < value)
            .count() as u64
    }

    /// Returns the number of values greater than or equal to `value`.
    ///
    /// The argument is clamped to the domain: `value <= 1` counts everything
    /// and `value > domain_max` counts nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use datacapture::capture::DataCapture;
    /// let mut capture = DataCapture::with_domain_max(10);
    /// capture.add_all([2, 5, 10]).unwrap();
    /// let stats = capture.build_statistics();
    /// assert_eq!(stats.greater_or_equal(5), 2);
    /// assert_eq!(stats.greater_or_equal(-7), 3);
    /// assert_eq!(stats.greater_or_equal(11), 0);
    /// ```
    pub fn greater_or_equal(&self, value: i64) -> u64 {
        self.frequency.count_from(value)
    }

    /// Returns the number of values strictly greater than `value`.
    pub fn greater_than(&self, value: i64) -> u64 {
        self.frequency.count_from(value.saturating_add(1))
    }

    /// Returns the number of values in the inclusive range `[low, high]`.
    ///
    /// An empty range (`low > high`) yields `0`.
    pub fn between(&self, low: i64, high: i64) -> u64 {
        if low > high {
            return 0;
        }
        self.values
            .iter()
            .filter(|&&v| (low..=high).contains(&i64::from(v)))
            .count() as u64
    }

    /// Returns the number of occurrences of `value`.
    pub fn count(&self, value: i64) -> u64 {
        self.frequency.get(value)
    }

    /// Returns the smallest captured value.
    pub fn min_value(&self) -> Option<u32> {
        self.frequency.min_value()
    }

    /// Returns the largest captured value.
    pub fn max_value(&self) -> Option<u32> {
        self.frequency.max_value()
    }
}

#[cfg(test)]
mod tests {
    use crate::capture::DataCapture;

    #[test]
    fn test_empty_snapshot() {
        let stats = DataCapture::new().build_statistics();
        assert!(stats.is_empty());
        assert_eq!(stats.n(), 0);
        assert_eq!(stats.less_than(i64::MAX), 0);
        assert_eq!(stats.greater_or_equal(i64::MIN), 0);
        assert_eq!(stats.between(i64::MIN, i64::MAX), 0);
        assert_eq!(stats.min_value(), None);
        assert_eq!(stats.max_value(), None);
    }

    #[test]
    fn test_greater_than_saturates() {
        let mut capture = DataCapture::with_domain_max(5);
        capture.add_all([1, 5]).unwrap();
        let stats = capture.build_statistics();
        assert_eq!(stats.greater_than(i64::MAX), 0);
        assert_eq!(stats.greater_than(i64::MIN), 2);
        assert_eq!(stats.greater_than(0), 2);
        assert_eq!(stats.greater_than(1), 1);
        assert_eq!(stats.greater_than(5), 0);
    }

    #[test]
    fn test_min_max() {
        let mut capture = DataCapture::with_domain_max(20);
        capture.add_all([7, 3, 12, 3]).unwrap();
        let stats = capture.build_statistics();
        assert_eq!(stats.min_value(), Some(3));
        assert_eq!(stats.max_value(), Some(12));
        assert_eq!(stats.count(3), 2);
        assert_eq!(stats.count(21), 0);
    }
}
