//! The license sweep workflow
//!
//! Per repository the workflow runs a strictly forward pipeline:
//! resolve the commit branch, stage the license files into a tree, push a
//! commit onto the branch, open a pull request. The organization loop feeds
//! repositories without a license descriptor into that pipeline one at a
//! time, in listing order.

mod org;
mod progress;
mod tree;
mod workflow;

pub use org::{RepoFailure, SweepOutcome, sweep_org};
pub use progress::{NoopProgress, Phase, ProgressCallback};
pub use tree::{load_entries, parse_file_specs};
pub use workflow::{
    WorkflowOutcome, open_pull_request, push_commit, resolve_ref, run_workflow,
};
