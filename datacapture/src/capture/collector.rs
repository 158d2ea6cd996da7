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

use log::debug;

use super::DEFAULT_DOMAIN_MAX;
use super::FrequencyTable;
use super::MAX_DOMAIN_MAX;
use super::MIN_DOMAIN_MAX;
use crate::error::Error;
use crate::statistics::Statistics;

/// Append-only collector of values in `[1, domain_max]`.
///
/// See the [capture module level documentation](crate::capture) for more.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataCapture {
    values: Vec<u32>,
    frequency: FrequencyTable,
}

impl Default for DataCapture {
    fn default() -> Self {
        Self::new()
    }
}

impl DataCapture {
    /// Creates an empty capture over the domain `[1, DEFAULT_DOMAIN_MAX]`.
    pub fn new() -> Self {
        Self::with_domain_max(DEFAULT_DOMAIN_MAX)
    }

    /// Creates an empty capture over the domain `[1, domain_max]`.
    ///
    /// # Panics
    ///
    /// Panics if domain_max is not in [MIN_DOMAIN_MAX, MAX_DOMAIN_MAX].
    ///
    /// # Examples
    ///
    /// ```
    /// # use datacapture::capture::DataCapture;
    /// let capture = DataCapture::with_domain_max(100);
    /// assert_eq!(capture.domain_max(), 100);
    /// assert!(capture.is_empty());
    /// ```
    pub fn with_domain_max(domain_max: u32) -> Self {
        assert!(
            (MIN_DOMAIN_MAX..=MAX_DOMAIN_MAX).contains(&domain_max),
            "domain_max must be in [{MIN_DOMAIN_MAX}, {MAX_DOMAIN_MAX}], got {domain_max}"
        );
        Self {
            values: Vec::new(),
            frequency: FrequencyTable::new(domain_max),
        }
    }

    /// Returns the largest value this capture accepts.
    pub fn domain_max(&self) -> u32 {
        self.frequency.domain_max()
    }

    /// Returns the number of captured values.
    pub fn n(&self) -> u64 {
        self.values.len() as u64
    }

    /// Returns true if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the captured values in arrival order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Returns how many times `value` has been captured.
    pub fn frequency(&self, value: i64) -> u64 {
        self.frequency.get(value)
    }

    /// Captures a value.
    ///
    /// Returns a [`DomainViolation`](crate::error::ErrorKind::DomainViolation)
    /// error, leaving the capture untouched, if `value` is not in
    /// `[1, domain_max]`.
    pub fn add(&mut self, value: i64) -> Result<(), Error> {
        let value = self.check(value)?;
        self.record(value);
        Ok(())
    }

    /// Captures every value of `values`, in order.
    ///
    /// Either all values are captured or none: the first out-of-domain value
    /// rejects the whole batch, and the error records its `position`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use datacapture::capture::DataCapture;
    /// let mut capture = DataCapture::with_domain_max(10);
    /// capture.add_all([1, 2, 3]).unwrap();
    ///
    /// let err = capture.add_all([4, 11]).unwrap_err();
    /// assert_eq!(err.context("position"), Some("1"));
    /// assert_eq!(capture.n(), 3);
    /// ```
    pub fn add_all<I>(&mut self, values: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut accepted = Vec::new();
        for (position, value) in values.into_iter().enumerate() {
            let value = self
                .check(value)
                .map_err(|err| err.with_context("position", position))?;
            accepted.push(value);
        }

        self.values.reserve(accepted.len());
        for value in accepted {
            self.record(value);
        }
        Ok(())
    }

    /// Builds a [`Statistics`] over a copy of everything captured so far.
    ///
    /// The returned statistics do not observe values added afterwards.
    pub fn build_statistics(&self) -> Statistics {
        debug!(
            "building statistics over {} values in domain [1, {}]",
            self.values.len(),
            self.domain_max()
        );
        Statistics::new(self.values.clone(), self.frequency.clone())
    }

    fn check(&self, value: i64) -> Result<u32, Error> {
        let domain_max = self.domain_max();
        let checked = match u32::try_from(value) {
            Ok(v) if (1..=domain_max).contains(&v) => Ok(v),
            Ok(_) => Err(Error::domain_violation(value, domain_max)),
            Err(err) => Err(Error::domain_violation(value, domain_max).set_source(err)),
        };
        checked.inspect_err(|err| debug!("rejected captured value: {err}"))
    }

    fn record(&mut self, value: u32) {
        self.values.push(value);
        self.frequency.increment(value);
        debug_assert_eq!(
            self.frequency.total(),
            self.values.len() as u64,
            "frequency total does not match captured count"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_domain() {
        let capture = DataCapture::default();
        assert_eq!(capture.domain_max(), DEFAULT_DOMAIN_MAX);
        assert!(capture.is_empty());
        assert_eq!(capture.n(), 0);
    }

    #[test]
    fn test_add_keeps_arrival_order() {
        let mut capture = DataCapture::new();
        for value in [3, 9, 3, 4, 6] {
            capture.add(value).unwrap();
        }
        assert_eq!(capture.values(), &[3, 9, 3, 4, 6]);
        assert_eq!(capture.n(), 5);
        assert_eq!(capture.frequency(3), 2);
        assert_eq!(capture.frequency(9), 1);
        assert_eq!(capture.frequency(5), 0);
    }

    #[test]
    fn test_rejected_value_leaves_state() {
        let mut capture = DataCapture::with_domain_max(10);
        capture.add(10).unwrap();
        let before = capture.clone();

        for value in [0, 11, -1, i64::MAX, i64::from(u32::MAX) + 1] {
            let err = capture.add(value).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::DomainViolation);
        }
        assert_eq!(capture, before);
    }

    #[test]
    fn test_source_only_when_conversion_fails() {
        use std::error::Error as _;

        let mut capture = DataCapture::with_domain_max(10);
        assert!(capture.add(11).unwrap_err().source().is_none());
        assert!(capture.add(-1).unwrap_err().source().is_some());
    }

    #[test]
    fn test_add_all_is_atomic() {
        let mut capture = DataCapture::with_domain_max(10);
        capture.add_all([1, 2]).unwrap();

        let err = capture.add_all([3, 4, 0, 5]).unwrap_err();
        assert_eq!(err.context("position"), Some("2"));
        assert_eq!(err.context("value"), Some("0"));
        assert_eq!(capture.values(), &[1, 2]);
        assert_eq!(capture.frequency(3), 0);

        capture.add_all(Vec::<i64>::new()).unwrap();
        assert_eq!(capture.n(), 2);
    }

    #[test]
    #[should_panic(expected = "domain_max must be in")]
    fn test_zero_domain_panics() {
        DataCapture::with_domain_max(0);
    }

    #[test]
    #[should_panic(expected = "domain_max must be in")]
    fn test_domain_too_large_panics() {
        DataCapture::with_domain_max(MAX_DOMAIN_MAX + 1);
    }
}
