/**
 * Profile Handler Types
 *
 * Request bodies for profile submission and for experience and education
 * entries. Fields are optional so missing values surface as validation
 * errors.
 */

use serde::{Deserialize, Serialize};

use crate::backend::profile::model::{parse_skills, ProfileFields, Social};
use crate::backend::validation::non_blank;

/// Create-or-update profile request
///
/// `skills` is a comma-separated list. Social links are flat fields here and
/// nested under `social` in the stored profile.
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct ProfileRequest {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub status: Option<String>,
    pub skills: Option<String>,
    pub githubusername: Option<String>,
    pub youtube: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

impl ProfileRequest {
    /// Keep only the supplied, non-blank fields
    pub fn into_fields(self) -> ProfileFields {
        ProfileFields {
            company: non_blank(self.company),
            website: non_blank(self.website),
            location: non_blank(self.location),
            status: non_blank(self.status),
            skills: non_blank(self.skills).map(|raw| parse_skills(&raw)),
            bio: non_blank(self.bio),
            githubusername: non_blank(self.githubusername),
            social: Social {
                youtube: non_blank(self.youtube),
                twitter: non_blank(self.twitter),
                facebook: non_blank(self.facebook),
                linkedin: non_blank(self.linkedin),
                instagram: non_blank(self.instagram),
            },
        }
    }
}

/// Experience entry request; dates are `YYYY-MM-DD`
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct ExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

/// Education entry request; dates are `YYYY-MM-DD`
#[derive(Deserialize, Serialize, Debug, Default)]
#[serde(default)]
pub struct EducationRequest {
    pub school: Option<String>,
    pub degree: Option<String>,
    pub fieldofstudy: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}
