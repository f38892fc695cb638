// Copyright 2025 Chisomo Makombo Sakala
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
use crate::error::RunError;
use crate::error::WorkloadError;
use crate::registry::Workload;
use std::num::NonZeroU32;
use std::time::Duration;
use std::time::Instant;

/// What happened to one workload during a run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
  /// The workload ran every repetition; `average` is total time / repetitions.
  Timed { average: Duration },
  /// The workload was not (fully) executed.
  Skipped { reason: String },
}

/// Times `workload` over `repetitions` sequential invocations.
///
/// - A workload marked unavailable is skipped without being invoked.
/// - [`WorkloadError::MissingDependency`] from the body turns into a skip.
/// - Any other failure is returned and should abort the run.
pub fn run(workload: &Workload, repetitions: NonZeroU32) -> Result<Outcome, RunError> {
  let _span = tracing::info_span!("run_workload", workload = %workload.name()).entered();

  if let Some(reason) = workload.unavailable_reason() {
    tracing::info!(%reason, "Workload marked unavailable. Skipping.");
    return Ok(Outcome::Skipped {
      reason: reason.to_string(),
    });
  }

  let mut total = Duration::ZERO;
  for iteration in 0..repetitions.get() {
    let start = Instant::now();
    let result = workload.invoke();
    let elapsed = start.elapsed();

    match result {
      Ok(()) => {
        tracing::debug!(iteration, ?elapsed, "Repetition finished");
        total += elapsed;
      }
      Err(WorkloadError::MissingDependency(reason)) => {
        tracing::warn!(%reason, "Workload dependency missing. Skipping.");
        return Ok(Outcome::Skipped { reason });
      }
      Err(source) => {
        tracing::error!(error = %source, iteration, "Workload failed");
        return Err(RunError::Workload {
          name: workload.name().to_string(),
          source,
        });
      }
    }
  }

  let average = total / repetitions.get();
  tracing::info!(?total, ?average, repetitions = repetitions.get(), "Workload timed");
  Ok(Outcome::Timed { average })
}
