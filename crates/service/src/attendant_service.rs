use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::errors::ServiceError;
use crate::repository::{AttendantInput, AttendantRepository};
use models::attendant;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email regex")
});

static MOBILE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9+]{7,15}$").expect("mobile regex"));

/// List every persisted attendant, in storage order.
pub async fn list_attendants(
    repo: &dyn AttendantRepository,
) -> Result<Vec<attendant::Model>, ServiceError> {
    repo.find_all().await
}

/// Look up a single attendant; `None` when the id is unknown.
pub async fn get_attendant(
    repo: &dyn AttendantRepository,
    id: i32,
) -> Result<Option<attendant::Model>, ServiceError> {
    repo.find_by_id(id).await
}

/// Validate and persist a new attendant.
///
/// Order of checks: field validation, then email uniqueness, then mobile
/// uniqueness, then the insert. The duplicate pre-checks give friendly
/// errors; the unique indexes close the race with concurrent creates.
pub async fn create_attendant(
    repo: &dyn AttendantRepository,
    input: AttendantInput,
) -> Result<attendant::Model, ServiceError> {
    let input = input.normalized();
    validate_attendant(&input)?;

    if let Some(email) = input.email.as_deref() {
        if repo.exists_by_email(email).await? {
            return Err(ServiceError::Validation("email already exists".into()));
        }
    }
    if let Some(mobile) = input.mobile.as_deref() {
        if repo.exists_by_mobile(mobile).await? {
            return Err(ServiceError::Validation(
                "mobile number already exists".into(),
            ));
        }
    }

    let created = repo.insert(&input).await?;
    info!(id = created.id, name = %created.name, "created attendant");
    Ok(created)
}

/// Replace every field of an existing attendant. The id never changes.
///
/// A duplicate check only fires when the incoming email/mobile differs from
/// the stored one, so re-submitting an unchanged record always succeeds.
pub async fn update_attendant(
    repo: &dyn AttendantRepository,
    id: i32,
    input: AttendantInput,
) -> Result<attendant::Model, ServiceError> {
    let existing = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("attendant"))?;
    let input = input.normalized();

    if let Some(email) = input.email.as_deref() {
        if existing.email.as_deref() != Some(email) && repo.exists_by_email(email).await? {
            return Err(ServiceError::Validation("email already exists".into()));
        }
    }
    if let Some(mobile) = input.mobile.as_deref() {
        if existing.mobile.as_deref() != Some(mobile) && repo.exists_by_mobile(mobile).await? {
            return Err(ServiceError::Validation(
                "mobile number already exists".into(),
            ));
        }
    }

    validate_attendant(&input)?;
    let merged = attendant::Model {
        id: existing.id,
        name: input.name,
        address: input.address,
        mobile: input.mobile,
        email: input.email,
        comments: input.comments,
    };
    let updated = repo.update(merged).await?;
    info!(id = updated.id, "updated attendant");
    Ok(updated)
}

/// Remove an attendant; returns whether a record existed.
pub async fn delete_attendant(
    repo: &dyn AttendantRepository,
    id: i32,
) -> Result<bool, ServiceError> {
    if repo.exists_by_id(id).await? {
        repo.delete_by_id(id).await?;
        info!(id, "deleted attendant");
        return Ok(true);
    }
    Ok(false)
}

/// Exact-match email lookup.
pub async fn attendant_by_email(
    repo: &dyn AttendantRepository,
    email: &str,
) -> Result<Option<attendant::Model>, ServiceError> {
    repo.find_by_email(email).await
}

/// Case-insensitive substring match against attendant names.
pub async fn search_attendants(
    repo: &dyn AttendantRepository,
    keyword: &str,
) -> Result<Vec<attendant::Model>, ServiceError> {
    repo.find_by_name_containing(keyword).await
}

// Checks run in order and stop at the first failure. Mobile numbers are
// validated with spaces and hyphens stripped but stored as entered.
fn validate_attendant(input: &AttendantInput) -> Result<(), ServiceError> {
    if input.name.trim().is_empty() {
        return Err(ServiceError::Validation(
            "attendant name is required".into(),
        ));
    }
    if let Some(email) = input.email.as_deref() {
        if !EMAIL_PATTERN.is_match(email) {
            return Err(ServiceError::Validation("invalid email format".into()));
        }
    }
    if let Some(mobile) = input.mobile.as_deref() {
        let cleaned: String = mobile
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        if !MOBILE_PATTERN.is_match(&cleaned) {
            return Err(ServiceError::Validation(
                "invalid mobile number format".into(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::memory::MemoryAttendantRepository;

    fn john() -> AttendantInput {
        AttendantInput {
            name: "John Smith".into(),
            address: Some("123 Queen Street, Auckland".into()),
            mobile: Some("+64 21 123 4567".into()),
            email: Some("john.smith@company.co.nz".into()),
            comments: None,
        }
    }

    #[tokio::test]
    async fn create_and_fetch_by_email() {
        let repo = MemoryAttendantRepository::new();
        let created = create_attendant(&repo, john()).await.expect("create ok");
        assert!(created.id > 0);

        let found = attendant_by_email(&repo, "john.smith@company.co.nz")
            .await
            .expect("lookup ok")
            .expect("present");
        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let repo = MemoryAttendantRepository::new();
        let input = AttendantInput { name: " ".into(), ..john() };
        assert!(matches!(
            create_attendant(&repo, input).await,
            Err(ServiceError::Validation(msg)) if msg.contains("name")
        ));
    }

    #[tokio::test]
    async fn invalid_email_formats_are_rejected() {
        let repo = MemoryAttendantRepository::new();
        for bad in ["not-an-email", "missing@tld", "no domain@x.com", "@example.com"] {
            let input = AttendantInput { email: Some(bad.into()), ..john() };
            assert!(
                matches!(
                    create_attendant(&repo, input).await,
                    Err(ServiceError::Validation(msg)) if msg == "invalid email format"
                ),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[tokio::test]
    async fn mobile_is_validated_after_stripping_separators() {
        let repo = MemoryAttendantRepository::new();

        let spaced = AttendantInput { mobile: Some("+64 21-123 4567".into()), ..john() };
        create_attendant(&repo, spaced).await.expect("create ok");

        let too_short = AttendantInput {
            mobile: Some("123 45".into()),
            email: Some("other@company.co.nz".into()),
            ..john()
        };
        assert!(matches!(
            create_attendant(&repo, too_short).await,
            Err(ServiceError::Validation(msg)) if msg == "invalid mobile number format"
        ));

        let letters = AttendantInput {
            mobile: Some("02x1234567".into()),
            email: Some("other@company.co.nz".into()),
            ..john()
        };
        assert!(matches!(
            create_attendant(&repo, letters).await,
            Err(ServiceError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_on_create() {
        let repo = MemoryAttendantRepository::new();
        create_attendant(&repo, john()).await.expect("create ok");

        let dup = AttendantInput {
            name: "Jane Doe".into(),
            mobile: Some("+64 22 999 8888".into()),
            ..john()
        };
        assert!(matches!(
            create_attendant(&repo, dup).await,
            Err(ServiceError::Validation(msg)) if msg == "email already exists"
        ));
    }

    #[tokio::test]
    async fn duplicate_mobile_is_rejected_on_create() {
        let repo = MemoryAttendantRepository::new();
        create_attendant(&repo, john()).await.expect("create ok");

        let dup = AttendantInput {
            name: "Jane Doe".into(),
            email: Some("jane.doe@company.co.nz".into()),
            ..john()
        };
        assert!(matches!(
            create_attendant(&repo, dup).await,
            Err(ServiceError::Validation(msg)) if msg == "mobile number already exists"
        ));
    }

    #[tokio::test]
    async fn unchanged_email_on_update_is_exempt_from_the_duplicate_check() {
        let repo = MemoryAttendantRepository::new();
        let created = create_attendant(&repo, john()).await.expect("create ok");

        // Same email and mobile, different comments: must not self-collide.
        let resubmit = AttendantInput { comments: Some("promoted".into()), ..john() };
        let updated = update_attendant(&repo, created.id, resubmit)
            .await
            .expect("self-update ok");
        assert_eq!(updated.comments.as_deref(), Some("promoted"));
    }

    #[tokio::test]
    async fn changed_email_colliding_with_another_attendant_is_rejected() {
        let repo = MemoryAttendantRepository::new();
        create_attendant(&repo, john()).await.expect("create ok");
        let other = create_attendant(
            &repo,
            AttendantInput {
                name: "Jane Doe".into(),
                address: None,
                mobile: Some("+64 22 999 8888".into()),
                email: Some("jane.doe@company.co.nz".into()),
                comments: None,
            },
        )
        .await
        .expect("create ok");

        let steal = AttendantInput { email: Some("john.smith@company.co.nz".into()), ..john() };
        assert!(matches!(
            update_attendant(&repo, other.id, steal).await,
            Err(ServiceError::Validation(msg)) if msg == "email already exists"
        ));
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let repo = MemoryAttendantRepository::new();
        assert!(matches!(
            update_attendant(&repo, 7, john()).await,
            Err(ServiceError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let repo = MemoryAttendantRepository::new();
        let created = create_attendant(&repo, john()).await.expect("create ok");
        assert!(delete_attendant(&repo, created.id).await.expect("first delete"));
        assert!(!delete_attendant(&repo, created.id).await.expect("second delete"));
    }

    #[tokio::test]
    async fn blank_optional_fields_are_stored_as_none() {
        let repo = MemoryAttendantRepository::new();
        let input = AttendantInput {
            name: "Sam Low".into(),
            address: Some("".into()),
            mobile: Some("   ".into()),
            email: Some("".into()),
            comments: None,
        };
        let created = create_attendant(&repo, input).await.expect("create ok");
        assert_eq!(created.email, None);
        assert_eq!(created.mobile, None);
        assert_eq!(created.address, None);
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let repo = MemoryAttendantRepository::new();
        create_attendant(&repo, john()).await.expect("create ok");

        let hits = search_attendants(&repo, "SMITH").await.expect("search ok");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "John Smith");
    }
}
