//! Workspace-level integration tests for PetriBench live in `tests/`.
