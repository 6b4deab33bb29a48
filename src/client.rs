//! Base Recman API client: request building, transport call, error checking.

mod api;
mod builder;
mod core;
mod operation;
mod request;

pub use api::{ApiResponse, RecmanApi};
pub use builder::RecmanClientBuilder;
pub use self::core::{RecmanClient, DEFAULT_BASE_URL};
pub use operation::{
    LocationField, Operation, UserListFilter, CANDIDATE_FIELDS, CANDIDATE_PAGE_SIZE,
    CORPORATION_FIELDS, DEFAULT_CANDIDATE_PAGE, DEPARTMENT_FIELDS, JOB_POST_FIELDS, NAME_FIELDS,
    USER_FIELDS,
};
pub use request::{Fields, RequestSpec};

#[cfg(test)]
pub(crate) use self::core::tests::{stub_client, StubHttpClient};
