/**
 * Profile Handlers
 *
 * HTTP handlers for the `/api/profile` endpoints.
 *
 * # Routes
 *
 * - `GET /api/profile/me` - own profile (private)
 * - `GET /api/profile` - all profiles
 * - `GET /api/profile/user/{user_id}` - one user's profile
 * - `POST /api/profile` - create or update own profile (private)
 * - `DELETE /api/profile` - delete own profile and account (private)
 * - `PUT /api/profile/experience` - add experience (private)
 * - `DELETE /api/profile/experience/{exp_id}` - remove experience (private)
 * - `PUT /api/profile/education` - add education (private)
 * - `DELETE /api/profile/education/{edu_id}` - remove education (private)
 *
 * Read endpoints return the profile with its owner's name and avatar in
 * place of the bare user id. Write endpoints return the stored document.
 */

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::profile::model::{Education, Experience, Profile, ProfileView};
use crate::backend::profile::types::{EducationRequest, ExperienceRequest, ProfileRequest};
use crate::backend::store::Store;
use crate::backend::validation::{non_blank, parse_id, Validator};

const NO_PROFILE: &str = "There is no profile for this user";

/// Join a profile with its owner's public identity
async fn populate(store: &dyn Store, profile: Profile) -> Result<ProfileView, ApiError> {
    let owner = store.find_user_by_id(profile.user).await?;
    Ok(ProfileView::new(profile, owner.map(|u| u.summary())))
}

/// Make sure the caller's account still exists before writing for it
async fn require_owner(store: &dyn Store, user_id: Uuid) -> Result<(), ApiError> {
    match store.find_user_by_id(user_id).await? {
        Some(_) => Ok(()),
        None => {
            tracing::warn!("User not found: {}", user_id);
            Err(ApiError::not_found("User not found"))
        }
    }
}

/// Load the caller's profile or fail with 404
async fn own_profile(store: &dyn Store, user_id: Uuid) -> Result<Profile, ApiError> {
    store.find_profile_by_user(user_id).await?.ok_or_else(|| {
        tracing::warn!("No profile for user: {}", user_id);
        ApiError::not_found(NO_PROFILE)
    })
}

/// GET /api/profile/me
pub async fn get_own_profile(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<ProfileView>, ApiError> {
    let profile = own_profile(store.as_ref(), auth.user_id).await?;
    Ok(Json(populate(store.as_ref(), profile).await?))
}

/// GET /api/profile
pub async fn list_profiles(
    State(store): State<Arc<dyn Store>>,
) -> Result<Json<Vec<ProfileView>>, ApiError> {
    let profiles = store.list_profiles().await?;

    let ids: Vec<Uuid> = profiles.iter().map(|p| p.user).collect();
    let owners: HashMap<Uuid, _> = store
        .find_users_by_ids(&ids)
        .await?
        .into_iter()
        .map(|user| (user.id, user.summary()))
        .collect();

    let views: Vec<ProfileView> = profiles
        .into_iter()
        .map(|profile| {
            let owner = owners.get(&profile.user).cloned();
            ProfileView::new(profile, owner)
        })
        .collect();

    Ok(Json(views))
}

/// GET /api/profile/user/{user_id}
///
/// A malformed user id is reported exactly like a missing profile.
pub async fn get_profile_by_user(
    State(store): State<Arc<dyn Store>>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileView>, ApiError> {
    let user_id = parse_id(&user_id, "Profile not found")?;

    let profile = store
        .find_profile_by_user(user_id)
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;

    Ok(Json(populate(store.as_ref(), profile).await?))
}

/// POST /api/profile
///
/// Creates the caller's profile, or updates it with only the supplied
/// fields. `status` and `skills` are required either way, and the account
/// must still exist.
pub async fn upsert_profile(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Json(request): Json<ProfileRequest>,
) -> Result<Json<Profile>, ApiError> {
    let mut check = Validator::new();
    check.required("status", request.status.as_deref(), "Status is required");
    check.required("skills", request.skills.as_deref(), "Skills is required");
    check.finish()?;

    require_owner(store.as_ref(), auth.user_id).await?;
    let fields = request.into_fields();

    let profile = match store.find_profile_by_user(auth.user_id).await? {
        Some(mut existing) => {
            existing.apply(fields);
            tracing::info!("Updating profile for user: {}", auth.user_id);
            existing
        }
        None => {
            tracing::info!("Creating profile for user: {}", auth.user_id);
            Profile::new(auth.user_id, fields)
        }
    };

    store.save_profile(&profile).await?;

    Ok(Json(profile))
}

/// DELETE /api/profile
///
/// Removes the caller's profile and account. Their posts stay.
pub async fn delete_account(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
) -> Result<Json<Value>, ApiError> {
    store.delete_account(auth.user_id).await?;

    tracing::info!("User deleted: {}", auth.user_id);

    Ok(Json(json!({ "msg": "User deleted" })))
}

/// PUT /api/profile/experience
pub async fn add_experience(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Json(request): Json<ExperienceRequest>,
) -> Result<Json<Profile>, ApiError> {
    let mut check = Validator::new();
    let title = check.required("title", request.title.as_deref(), "Title is required");
    let company = check.required("company", request.company.as_deref(), "Company is required");
    let from = check.date("from", request.from.as_deref(), "From date is required");
    let to = check.optional_date("to", request.to.as_deref());
    let from = check.finish_with(from)?;

    let mut profile = own_profile(store.as_ref(), auth.user_id).await?;

    profile.add_experience(Experience {
        id: Uuid::new_v4(),
        title,
        company,
        location: non_blank(request.location),
        from,
        to,
        current: request.current.unwrap_or(false),
        description: non_blank(request.description),
    });
    store.save_profile(&profile).await?;

    tracing::info!("Experience added for user: {}", auth.user_id);

    Ok(Json(profile))
}

/// DELETE /api/profile/experience/{exp_id}
pub async fn remove_experience(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path(exp_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = own_profile(store.as_ref(), auth.user_id).await?;

    let exp_id = parse_id(&exp_id, "Experience not found")?;
    if !profile.remove_experience(exp_id) {
        tracing::warn!("Experience {} not found for user: {}", exp_id, auth.user_id);
        return Err(ApiError::not_found("Experience not found"));
    }
    store.save_profile(&profile).await?;

    tracing::info!("Experience {} removed for user: {}", exp_id, auth.user_id);

    Ok(Json(profile))
}

/// PUT /api/profile/education
pub async fn add_education(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Json(request): Json<EducationRequest>,
) -> Result<Json<Profile>, ApiError> {
    let mut check = Validator::new();
    let school = check.required("school", request.school.as_deref(), "School is required");
    let degree = check.required("degree", request.degree.as_deref(), "Degree is required");
    let fieldofstudy = check.required(
        "fieldofstudy",
        request.fieldofstudy.as_deref(),
        "Field of study is required",
    );
    let from = check.date("from", request.from.as_deref(), "From date is required");
    let to = check.optional_date("to", request.to.as_deref());
    let from = check.finish_with(from)?;

    let mut profile = own_profile(store.as_ref(), auth.user_id).await?;

    profile.add_education(Education {
        id: Uuid::new_v4(),
        school,
        degree,
        fieldofstudy,
        from,
        to,
        current: request.current.unwrap_or(false),
        description: non_blank(request.description),
    });
    store.save_profile(&profile).await?;

    tracing::info!("Education added for user: {}", auth.user_id);

    Ok(Json(profile))
}

/// DELETE /api/profile/education/{edu_id}
pub async fn remove_education(
    State(store): State<Arc<dyn Store>>,
    AuthUser(auth): AuthUser,
    Path(edu_id): Path<String>,
) -> Result<Json<Profile>, ApiError> {
    let mut profile = own_profile(store.as_ref(), auth.user_id).await?;

    let edu_id = parse_id(&edu_id, "Education not found")?;
    if !profile.remove_education(edu_id) {
        tracing::warn!("Education {} not found for user: {}", edu_id, auth.user_id);
        return Err(ApiError::not_found("Education not found"));
    }
    store.save_profile(&profile).await?;

    tracing::info!("Education {} removed for user: {}", edu_id, auth.user_id);

    Ok(Json(profile))
}
