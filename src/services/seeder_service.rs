//! Seeds the "Test Air Conditioner" service for the test organization.
//!
//! Three sequential PostgREST calls: resolve the organization by slug, look
//! for an existing service with the same title, insert it when absent. The
//! existence check is a plain read, so two runs started at the same moment
//! can both insert.

use std::fmt;

use reqwest::StatusCode;
use uuid::Uuid;

use crate::error::AppResult;
use crate::http_client::{eq, RestClient};
use crate::models::{NewServiceModel, OrganizationModel, ServiceModel, TEST_SERVICE_TITLE};

/// Slug of the organization the test service is attached to
pub const TARGET_ORGANIZATION_SLUG: &str = "test119-ca665cae";

const ORGANIZATIONS: &str = "organizations";
const SERVICES: &str = "services";

/// How a seed run ended. Every variant is a normal return; only transport
/// faults come back as `Err` from [`ServiceSeederImpl::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    OrganizationLookupFailed { body: String },
    OrganizationNotFound { slug: String },
    ServiceLookupFailed { body: String },
    AlreadyExists { organization_id: Uuid },
    Created {
        organization_id: Uuid,
        service_id: Option<Uuid>,
    },
    CreateFailed { body: String },
}

impl SeedOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created { .. })
    }
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OrganizationLookupFailed { body } => write!(f, "Error fetching org: {}", body),
            Self::OrganizationNotFound { slug } => write!(f, "Organization {} not found.", slug),
            Self::ServiceLookupFailed { body } => {
                write!(f, "Error checking existing service: {}", body)
            }
            Self::AlreadyExists { .. } => write!(f, "Service already exists."),
            Self::Created { .. } => write!(f, "Service created successfully!"),
            Self::CreateFailed { body } => write!(f, "Error creating service: {}", body),
        }
    }
}

pub struct ServiceSeederImpl {
    client: RestClient,
    slug: String,
}

impl ServiceSeederImpl {
    pub fn new(client: RestClient) -> Self {
        Self {
            client,
            slug: TARGET_ORGANIZATION_SLUG.to_string(),
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub async fn run(&self) -> AppResult<SeedOutcome> {
        // 1. Organization
        let organization = match self.find_organization().await? {
            Ok(Some(org)) => org,
            Ok(None) => {
                tracing::info!("No organization with slug {}", self.slug);
                return Ok(SeedOutcome::OrganizationNotFound {
                    slug: self.slug.clone(),
                });
            }
            Err(body) => return Ok(SeedOutcome::OrganizationLookupFailed { body }),
        };
        println!("Found Org ID: {}", organization.id);

        // 2. Existing service
        match self.find_existing_service(organization.id).await? {
            Ok(existing) if !existing.is_empty() => {
                tracing::info!(
                    "Service {:?} already present for org {} ({} row(s))",
                    TEST_SERVICE_TITLE,
                    organization.id,
                    existing.len()
                );
                return Ok(SeedOutcome::AlreadyExists {
                    organization_id: organization.id,
                });
            }
            Ok(_) => {}
            Err(body) => return Ok(SeedOutcome::ServiceLookupFailed { body }),
        }

        // 3. Insert
        let payload = NewServiceModel::test_air_conditioner(organization.id);
        let response = self.client.insert(SERVICES, &payload).await?;
        if response.status() != StatusCode::CREATED {
            let status = response.status();
            let body = response.text().await?;
            tracing::warn!("Service insert failed: status={}", status);
            return Ok(SeedOutcome::CreateFailed { body });
        }

        let service_id = match response.json::<Vec<ServiceModel>>().await {
            Ok(rows) => rows.first().map(|row| row.id),
            Err(e) => {
                tracing::warn!("Could not read created service representation: {}", e);
                None
            }
        };
        tracing::info!("Created service {:?} for org {}", service_id, organization.id);

        Ok(SeedOutcome::Created {
            organization_id: organization.id,
            service_id,
        })
    }

    /// Outer `Err` is a transport fault, inner `Err` carries the raw body of
    /// a non-success response.
    async fn find_organization(&self) -> AppResult<Result<Option<OrganizationModel>, String>> {
        let params = [("slug", eq(&self.slug)), ("select", "id".to_string())];
        let response = self.client.select(ORGANIZATIONS, &params).await?;

        if response.status() != StatusCode::OK {
            let status = response.status();
            let body = response.text().await?;
            tracing::warn!("Organization lookup failed: status={}", status);
            return Ok(Err(body));
        }

        let rows: Vec<OrganizationModel> = response.json().await?;
        Ok(Ok(rows.into_iter().next()))
    }

    async fn find_existing_service(
        &self,
        organization_id: Uuid,
    ) -> AppResult<Result<Vec<ServiceModel>, String>> {
        let params = [
            ("organization_id", eq(organization_id)),
            ("title", eq(TEST_SERVICE_TITLE)),
        ];
        let response = self.client.select(SERVICES, &params).await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            tracing::warn!("Service lookup failed: status={}", status);
            return Ok(Err(body));
        }

        Ok(Ok(response.json().await?))
    }
}
