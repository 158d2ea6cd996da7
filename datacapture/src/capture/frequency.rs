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

/// Dense occurrence counts over the domain `[1, domain_max]`.
///
/// Domain value `v` lives in slot `v - 1`. Every read and write goes through
/// [`FrequencyTable::slot`], so the offset is applied in one place only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FrequencyTable {
    counts: Vec<u64>,
}

impl FrequencyTable {
    pub fn new(domain_max: u32) -> Self {
        Self {
            counts: vec![0; domain_max as usize],
        }
    }

    pub fn domain_max(&self) -> u32 {
        self.counts.len() as u32
    }

    /// Returns the slot holding `value`, or `None` if it is outside the domain.
    fn slot(&self, value: i64) -> Option<usize> {
        if (1..=i64::from(self.domain_max())).contains(&value) {
            Some((value - 1) as usize)
        } else {
            None
        }
    }

    /// Records one occurrence of `value`.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside the domain. Callers validate first.
    pub fn increment(&mut self, value: u32) {
        match self.slot(i64::from(value)) {
            Some(slot) => self.counts[slot] += 1,
            None => panic!(
                "value {value} is outside the frequency table domain [1, {}]",
                self.domain_max()
            ),
        }
    }

    /// Returns the occurrences of `value`; zero outside the domain.
    pub fn get(&self, value: i64) -> u64 {
        self.slot(value).map_or(0, |slot| self.counts[slot])
    }

    /// Returns the occurrences of every domain value `>= value`.
    ///
    /// `value <= 1` covers the whole table and `value > domain_max` covers
    /// nothing.
    pub fn count_from(&self, value: i64) -> u64 {
        match self.slot(value.max(1)) {
            Some(start) => self.counts[start..].iter().sum(),
            None => 0,
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn min_value(&self) -> Option<u32> {
        let slot = self.counts.iter().position(|&count| count > 0)?;
        Some(slot as u32 + 1)
    }

    pub fn max_value(&self) -> Option<u32> {
        let slot = self.counts.iter().rposition(|&count| count > 0)?;
        Some(slot as u32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_of(domain_max: u32, values: &[u32]) -> FrequencyTable {
        let mut table = FrequencyTable::new(domain_max);
        for &value in values {
            table.increment(value);
        }
        table
    }

    #[test]
    fn test_empty() {
        let table = FrequencyTable::new(10);
        assert_eq!(table.domain_max(), 10);
        assert_eq!(table.total(), 0);
        assert_eq!(table.count_from(1), 0);
        assert_eq!(table.min_value(), None);
        assert_eq!(table.max_value(), None);
    }

    #[test]
    fn test_domain_edges() {
        let table = table_of(10, &[1, 10, 10]);
        assert_eq!(table.get(1), 1);
        assert_eq!(table.get(10), 2);
        assert_eq!(table.get(0), 0);
        assert_eq!(table.get(11), 0);
        assert_eq!(table.get(-3), 0);
        assert_eq!(table.min_value(), Some(1));
        assert_eq!(table.max_value(), Some(10));
    }

    #[test]
    fn test_count_from_clamps() {
        let table = table_of(10, &[2, 5, 5, 9]);
        assert_eq!(table.count_from(i64::MIN), 4);
        assert_eq!(table.count_from(0), 4);
        assert_eq!(table.count_from(1), 4);
        assert_eq!(table.count_from(3), 3);
        assert_eq!(table.count_from(5), 3);
        assert_eq!(table.count_from(6), 1);
        assert_eq!(table.count_from(10), 0);
        assert_eq!(table.count_from(11), 0);
        assert_eq!(table.count_from(i64::MAX), 0);
    }

    #[test]
    #[should_panic(expected = "outside the frequency table domain")]
    fn test_increment_out_of_domain_panics() {
        let mut table = FrequencyTable::new(10);
        table.increment(11);
    }
}
