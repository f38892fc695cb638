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
use crate::error::RegistryError;
use crate::error::WorkloadError;
use std::fmt;

/// The timed body of a workload. Takes no arguments; anything it needs
/// (grid size, output location) is captured when it is built.
pub type WorkloadFn = Box<dyn Fn() -> Result<(), WorkloadError>>;

/// A named unit of work the harness can time.
pub struct Workload {
  name: String,
  body: WorkloadFn,
  unavailable: Option<String>,
}

impl Workload {
  /// Creates an available workload.
  pub fn new<F>(name: impl Into<String>, body: F) -> Self
  where
    F: Fn() -> Result<(), WorkloadError> + 'static,
  {
    Workload {
      name: name.into(),
      body: Box::new(body),
      unavailable: None,
    }
  }

  /// Creates a workload that is known up front to be unusable in this build.
  /// The runner reports it as skipped and never calls a body.
  pub fn unavailable(name: impl Into<String>, reason: impl Into<String>) -> Self {
    Workload::new(name, || Ok(())).with_unavailable_reason(reason)
  }

  /// Marks the workload as unavailable.
  pub fn with_unavailable_reason(mut self, reason: impl Into<String>) -> Self {
    self.unavailable = Some(reason.into());
    self
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  pub fn unavailable_reason(&self) -> Option<&str> {
    self.unavailable.as_deref()
  }

  pub(crate) fn invoke(&self) -> Result<(), WorkloadError> {
    (self.body)()
  }
}

impl fmt::Debug for Workload {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Workload")
      .field("name", &self.name)
      .field("unavailable", &self.unavailable)
      .finish_non_exhaustive()
  }
}

/// Every workload known to the process, populated once at startup.
#[derive(Debug, Default)]
pub struct Registry {
  workloads: Vec<Workload>,
}

impl Registry {
  pub fn new() -> Self {
    Registry::default()
  }

  /// Adds a workload. Names are unique; a second registration under an
  /// existing name is rejected and leaves the registry untouched.
  pub fn register(&mut self, workload: Workload) -> Result<(), RegistryError> {
    if self.workloads.iter().any(|w| w.name == workload.name) {
      return Err(RegistryError::DuplicateName {
        name: workload.name,
      });
    }

    tracing::debug!(
      workload = %workload.name,
      unavailable = ?workload.unavailable,
      "Registered workload"
    );
    self.workloads.push(workload);
    Ok(())
  }

  /// All registered workloads, in registration order.
  pub fn all(&self) -> &[Workload] {
    &self.workloads
  }

  pub fn len(&self) -> usize {
    self.workloads.len()
  }

  pub fn is_empty(&self) -> bool {
    self.workloads.is_empty()
  }
}
