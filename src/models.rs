use crate::schema::*;
use diesel::prelude::*;
use serde::{Deserialize, Deserializer, Serialize};

/// Placeholder stored for text fields missing from a create body.
pub const PLACEHOLDER: &str = "None";

fn placeholder() -> String {
    PLACEHOLDER.to_string()
}

fn placeholder_opt() -> Option<String> {
    Some(placeholder())
}

fn zero_opt() -> Option<i32> {
    Some(0)
}

/// A present key becomes `Some`, so an explicit `null` reads as `Some(None)`.
fn present<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(de).map(Some)
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = clubs)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Club {
    pub id: i32,
    pub name: String,
    pub link: String,
    pub industry: String,
    pub email: String,
    pub phone: String,
    pub about: String,
    pub location: String,
    pub registered_users: i32,
}

/// Body of a club creation request. Missing keys fall back to placeholders,
/// unknown keys are ignored.
#[derive(Debug, Clone, Insertable, Deserialize)]
#[diesel(table_name = clubs)]
pub struct NewClub {
    #[serde(default = "placeholder")]
    pub name: String,
    #[serde(default = "placeholder")]
    pub link: String,
    #[serde(default = "placeholder")]
    pub industry: String,
    #[serde(default = "placeholder")]
    pub email: String,
    #[serde(default = "placeholder")]
    pub phone: String,
    #[serde(default = "placeholder")]
    pub about: String,
    #[serde(default = "placeholder")]
    pub location: String,
    #[serde(default)]
    pub registered_users: i32,
}

impl Default for NewClub {
    fn default() -> Self {
        Self {
            name: placeholder(),
            link: placeholder(),
            industry: placeholder(),
            email: placeholder(),
            phone: placeholder(),
            about: placeholder(),
            location: placeholder(),
            registered_users: 0,
        }
    }
}

/// Partial club update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, AsChangeset, Deserialize)]
#[diesel(table_name = clubs)]
pub struct ClubChanges {
    pub name: Option<String>,
    pub link: Option<String>,
    pub industry: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub about: Option<String>,
    pub location: Option<String>,
    pub registered_users: Option<i32>,
}

impl ClubChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.link.is_none()
            && self.industry.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.about.is_none()
            && self.location.is_none()
            && self.registered_users.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable, Serialize)]
#[diesel(table_name = events)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Event {
    pub id: i32,
    pub name: String,
    pub club_id: i32,
    pub time: String,
    pub description: String,
    pub link: Option<String>,
    pub industry: Option<String>,
    pub location: Option<String>,
    pub registered_users: Option<i32>,
}

/// Body of an event creation request. An explicit `null` for one of the
/// nullable columns is stored as NULL; a missing key gets the placeholder.
#[derive(Debug, Clone, Insertable, Deserialize)]
#[diesel(table_name = events)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewEvent {
    #[serde(default = "placeholder")]
    pub name: String,
    #[serde(default)]
    pub club_id: i32,
    #[serde(default = "placeholder")]
    pub time: String,
    #[serde(default = "placeholder")]
    pub description: String,
    #[serde(default = "placeholder_opt")]
    pub link: Option<String>,
    #[serde(default = "placeholder_opt")]
    pub industry: Option<String>,
    #[serde(default = "placeholder_opt")]
    pub location: Option<String>,
    #[serde(default = "zero_opt")]
    pub registered_users: Option<i32>,
}

impl Default for NewEvent {
    fn default() -> Self {
        Self {
            name: placeholder(),
            club_id: 0,
            time: placeholder(),
            description: placeholder(),
            link: placeholder_opt(),
            industry: placeholder_opt(),
            location: placeholder_opt(),
            registered_users: zero_opt(),
        }
    }
}

/// Partial event update. `None` leaves the column untouched; for the
/// nullable columns `Some(None)` sets NULL.
#[derive(Debug, Clone, Default, AsChangeset, Deserialize)]
#[diesel(table_name = events)]
pub struct EventChanges {
    pub name: Option<String>,
    pub club_id: Option<i32>,
    pub time: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub link: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub industry: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub location: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub registered_users: Option<Option<i32>>,
}

impl EventChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.club_id.is_none()
            && self.time.is_none()
            && self.description.is_none()
            && self.link.is_none()
            && self.industry.is_none()
            && self.location.is_none()
            && self.registered_users.is_none()
    }
}
