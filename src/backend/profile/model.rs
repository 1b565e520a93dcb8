/**
 * Profile Documents
 *
 * A profile belongs to exactly one user. Experience and education entries
 * are nested inside the profile document, most recent first, and each
 * carries its own identifier so it can be removed individually.
 */

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::backend::auth::users::UserSummary;

/// Social network links, all optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

impl Social {
    /// Overwrite only the links present in `update`
    pub fn merge(&mut self, update: Social) {
        let Social {
            youtube,
            twitter,
            facebook,
            linkedin,
            instagram,
        } = update;
        if youtube.is_some() {
            self.youtube = youtube;
        }
        if twitter.is_some() {
            self.twitter = twitter;
        }
        if facebook.is_some() {
            self.facebook = facebook;
        }
        if linkedin.is_some() {
            self.linkedin = linkedin;
        }
        if instagram.is_some() {
            self.instagram = instagram;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
    pub school: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub from: NaiveDate,
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    pub description: Option<String>,
}

/// Profile document as stored
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: Uuid,
    /// Owning user
    #[sqlx(rename = "user_id")]
    pub user: Uuid,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    #[sqlx(json)]
    pub social: Social,
    #[sqlx(json)]
    pub experience: Vec<Experience>,
    #[sqlx(json)]
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

/// Fields supplied by a profile submission; `None` leaves a field untouched
#[derive(Debug, Clone, Default)]
pub struct ProfileFields {
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub skills: Option<Vec<String>>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: Social,
}

/// Split a comma-separated skill list into trimmed, non-empty entries
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

impl Profile {
    /// Create a profile for `user` from a submission
    pub fn new(user: Uuid, fields: ProfileFields) -> Self {
        let mut profile = Self {
            id: Uuid::new_v4(),
            user,
            company: None,
            website: None,
            location: None,
            status: String::new(),
            skills: Vec::new(),
            bio: None,
            githubusername: None,
            social: Social::default(),
            experience: Vec::new(),
            education: Vec::new(),
            date: Utc::now(),
        };
        profile.apply(fields);
        profile
    }

    /// Apply a partial update: only supplied fields change
    pub fn apply(&mut self, fields: ProfileFields) {
        let ProfileFields {
            company,
            website,
            location,
            status,
            skills,
            bio,
            githubusername,
            social,
        } = fields;

        if company.is_some() {
            self.company = company;
        }
        if website.is_some() {
            self.website = website;
        }
        if location.is_some() {
            self.location = location;
        }
        if let Some(status) = status {
            self.status = status;
        }
        if let Some(skills) = skills {
            self.skills = skills;
        }
        if bio.is_some() {
            self.bio = bio;
        }
        if githubusername.is_some() {
            self.githubusername = githubusername;
        }
        self.social.merge(social);
    }

    /// Prepend an experience entry
    pub fn add_experience(&mut self, entry: Experience) {
        self.experience.insert(0, entry);
    }

    /// Remove the experience entry with this id; false if none matched
    pub fn remove_experience(&mut self, id: Uuid) -> bool {
        match self.experience.iter().position(|e| e.id == id) {
            Some(index) => {
                self.experience.remove(index);
                true
            }
            None => false,
        }
    }

    /// Prepend an education entry
    pub fn add_education(&mut self, entry: Education) {
        self.education.insert(0, entry);
    }

    /// Remove the education entry with this id; false if none matched
    pub fn remove_education(&mut self, id: Uuid) -> bool {
        match self.education.iter().position(|e| e.id == id) {
            Some(index) => {
                self.education.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Profile joined with its owner's public identity
#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    pub id: Uuid,
    pub user: Option<UserSummary>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    pub bio: Option<String>,
    pub githubusername: Option<String>,
    pub social: Social,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub date: DateTime<Utc>,
}

impl ProfileView {
    pub fn new(profile: Profile, user: Option<UserSummary>) -> Self {
        Self {
            id: profile.id,
            user,
            company: profile.company,
            website: profile.website,
            location: profile.location,
            status: profile.status,
            skills: profile.skills,
            bio: profile.bio,
            githubusername: profile.githubusername,
            social: profile.social,
            experience: profile.experience,
            education: profile.education,
            date: profile.date,
        }
    }
}
