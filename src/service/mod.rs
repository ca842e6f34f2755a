//! Service layer for fixture generation and reconstruction.
//!
//! Services sit between the CLI and the data (repository) layer:
//!
//! - **Validation**: Rejecting invalid draw requests before anything is written
//! - **Orchestration**: Combining scheduler output with tournament teams and repositories
//! - **Concurrency**: Loading independent fixture groups in parallel

pub mod fixture;
pub mod publish;
