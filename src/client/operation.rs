//! Named Recman API operations.
//!
//! Every public client method maps to one [`Operation`]. The operation knows
//! its stable name, its argument tuple (used for cache keys) and how to turn
//! itself into a [`RequestSpec`].

use super::request::RequestSpec;
use crate::Error;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;
use std::str::FromStr;

/// Page requested when the caller does not pick one.
pub const DEFAULT_CANDIDATE_PAGE: u32 = 1;

/// Upstream cap on entries per candidate list page.
pub const CANDIDATE_PAGE_SIZE: usize = 5000;

pub const JOB_POST_FIELDS: &[&str] = &[
    "name", "ingress", "body", "logo", "from_date", "to_date", "title", "place",
    "deadline", "facebook", "twitter", "webpage", "num_positions", "video",
    "external_ats", "created", "updated", "position_start", "salary",
    "company_name", "address1", "address2", "city", "postal_code",
    "country", "keywords", "contact_persons", "country_id", "region_id", "city_id",
    "first_branch", "first_branch_category_id", "first_branch_id",
    "second_branch_category_id", "second_branch_id", "sector_id", "extent_id",
];

pub const DEPARTMENT_FIELDS: &[&str] = &[
    "name", "address1", "address2", "postal_code", "city", "country",
    "phone", "email", "fax", "logo", "number", "corporation_id",
];

pub const CORPORATION_FIELDS: &[&str] = &[
    "name", "phone", "email", "logo", "footer_logo", "about",
    "webpage", "facebook", "linkedin", "twitter", "rm_page",
];

pub const CANDIDATE_FIELDS: &[&str] = &[
    "candidateID", "firstName", "lastName", "email", "profilePicture",
    "mobilePhone", "officePhone", "homePhone", "facebook", "linkedin",
    "twitter", "address1", "address2", "postalCode", "city", "country",
];

pub const USER_FIELDS: &[&str] = &[
    "first_name", "last_name", "title", "mobile_phone", "office_phone", "email",
    "image", "facebook", "linkedin", "twitter", "corporation_id", "department_id",
];

pub const NAME_FIELDS: &[&str] = &["name"];

/// The `fields` value accepted by the location list scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LocationField {
    #[serde(rename = "city")]
    City,
    #[serde(rename = "region")]
    Region,
    #[serde(rename = "country")]
    Country,
    #[serde(rename = "world-country-list")]
    WorldCountryList,
    #[serde(rename = "nationality-list")]
    NationalityList,
}

impl LocationField {
    pub const ALL: [LocationField; 5] = [
        LocationField::City,
        LocationField::Region,
        LocationField::Country,
        LocationField::WorldCountryList,
        LocationField::NationalityList,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LocationField::City => "city",
            LocationField::Region => "region",
            LocationField::Country => "country",
            LocationField::WorldCountryList => "world-country-list",
            LocationField::NationalityList => "nationality-list",
        }
    }

    pub fn valid_values() -> Vec<&'static str> {
        Self::ALL.iter().map(LocationField::as_str).collect()
    }
}

impl FromStr for LocationField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| Error::InvalidArgument {
                argument: "location field",
                value: s.to_string(),
                allowed: Self::valid_values(),
            })
    }
}

impl fmt::Display for LocationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters for the user list. An empty list means "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UserListFilter {
    pub department_ids: Vec<u64>,
    pub corporation_ids: Vec<u64>,
    pub tag_ids: Vec<u64>,
}

impl UserListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_department_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.department_ids = ids.into_iter().collect();
        self
    }

    pub fn with_corporation_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.corporation_ids = ids.into_iter().collect();
        self
    }

    pub fn with_tag_ids(mut self, ids: impl IntoIterator<Item = u64>) -> Self {
        self.tag_ids = ids.into_iter().collect();
        self
    }
}

fn join_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// One call against the Recman API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    BranchList,
    BranchCategoryList,
    SectorList,
    ExtentList,
    LocationList(LocationField),
    JobPostList,
    DepartmentList,
    Corporation,
    CandidateList { page: u32 },
    Candidate { candidate_id: u64 },
    CandidateAttributeList,
    CandidateAttributes,
    CandidateLanguageList,
    UserList(UserListFilter),
    UserTagList,
}

impl Operation {
    /// Candidate list operation; `None` selects [`DEFAULT_CANDIDATE_PAGE`].
    pub fn candidate_list(page: Option<u32>) -> Self {
        Operation::CandidateList {
            page: page.unwrap_or(DEFAULT_CANDIDATE_PAGE),
        }
    }

    /// Stable operation name, matching the client method that issues it.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::BranchList => "get_branch_list",
            Operation::BranchCategoryList => "get_branch_category_list",
            Operation::SectorList => "get_sector_list",
            Operation::ExtentList => "get_extent_list",
            Operation::LocationList(_) => "get_location_list",
            Operation::JobPostList => "get_job_post_list",
            Operation::DepartmentList => "get_department_list",
            Operation::Corporation => "get_corporation",
            Operation::CandidateList { .. } => "get_candidate_list",
            Operation::Candidate { .. } => "get_candidate",
            Operation::CandidateAttributeList => "get_candidate_attribute_list",
            Operation::CandidateAttributes => "get_candidate_attributes",
            Operation::CandidateLanguageList => "get_candidate_language_list",
            Operation::UserList(_) => "get_user_list",
            Operation::UserTagList => "get_user_tag_list",
        }
    }

    /// Positional arguments of the call, as an ordered JSON array.
    pub fn arguments(&self) -> Value {
        match self {
            Operation::LocationList(field) => json!([field.as_str()]),
            Operation::CandidateList { page } => json!([page]),
            Operation::Candidate { candidate_id } => json!([candidate_id]),
            Operation::UserList(filter) => json!([
                filter.department_ids,
                filter.corporation_ids,
                filter.tag_ids
            ]),
            _ => json!([]),
        }
    }

    pub fn scope(&self) -> &'static str {
        match self {
            Operation::BranchList => "branch_list",
            Operation::BranchCategoryList => "branch_category_list",
            Operation::SectorList => "sector_list",
            Operation::ExtentList => "extent_list",
            Operation::LocationList(_) => "location",
            Operation::JobPostList => "job_post",
            Operation::DepartmentList => "department",
            Operation::Corporation => "corporation",
            Operation::CandidateList { .. } | Operation::Candidate { .. } => "candidate_list",
            Operation::CandidateAttributeList => "candidate_attribute_list",
            Operation::CandidateAttributes => "candidate_attribute",
            Operation::CandidateLanguageList => "language_list",
            Operation::UserList(_) => "user",
            Operation::UserTagList => "user_tag_list",
        }
    }

    pub fn request(&self) -> RequestSpec {
        let spec = RequestSpec::new(self.scope());
        match self {
            Operation::LocationList(field) => spec.fields(field.as_str()),
            Operation::JobPostList => spec.fields(JOB_POST_FIELDS),
            Operation::DepartmentList => spec.fields(DEPARTMENT_FIELDS),
            Operation::Corporation => spec.fields(CORPORATION_FIELDS),
            Operation::CandidateList { page } => spec.param("page", page).fields(CANDIDATE_FIELDS),
            Operation::Candidate { candidate_id } => spec
                .param("c_candidate_id", candidate_id)
                .fields(CANDIDATE_FIELDS),
            Operation::CandidateLanguageList | Operation::UserTagList => spec.fields(NAME_FIELDS),
            Operation::UserList(filter) => spec
                .param("c_department_id", join_ids(&filter.department_ids))
                .param("c_corporation_id", join_ids(&filter.corporation_ids))
                .param("c_tag_id", join_ids(&filter.tag_ids))
                .fields(USER_FIELDS),
            Operation::BranchList
            | Operation::BranchCategoryList
            | Operation::SectorList
            | Operation::ExtentList
            | Operation::CandidateAttributeList
            | Operation::CandidateAttributes => spec,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.arguments())
    }
}
