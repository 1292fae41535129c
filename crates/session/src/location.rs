// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use grievance_form::Step;

/// Formats the shareable location indicator for a step.
#[must_use]
pub fn location_query(step: Step) -> String {
    format!("step={}", step.index())
}

/// Parses the step out of a location query string such as `step=2` or
/// `lang=en&step=2`.
///
/// A missing query, a missing `step` entry, a non-numeric value, or an
/// out-of-range index all default to step 0.
#[must_use]
pub fn step_from_query(query: Option<&str>) -> Step {
    let Some(query) = query else {
        return Step::Personal;
    };

    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "step")
        .and_then(|(_, value)| value.parse::<u8>().ok())
        .and_then(|index| Step::from_index(index).ok())
        .unwrap_or(Step::Personal)
}
