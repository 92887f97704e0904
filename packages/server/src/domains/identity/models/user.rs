//! User model - mirror of an identity-provider account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::auth::Actor;
use crate::common::{Role, UserId};

/// A user account, synced from the external identity provider.
///
/// Rows are created and maintained exclusively by the webhook sync flow;
/// the API never registers users itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    /// Subject identifier assigned by the identity provider.
    pub external_id: String,
    pub email: String,
    pub nickname: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub image_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Builds a fresh row from synced attributes.
    pub fn new(attrs: UserAttributes) -> Self {
        Self {
            id: UserId::new(),
            external_id: attrs.external_id,
            email: attrs.email,
            nickname: attrs.nickname,
            first_name: attrs.first_name,
            last_name: attrs.last_name,
            phone_number: attrs.phone_number,
            image_url: attrs.image_url,
            role: attrs.role,
            created_at: Utc::now(),
        }
    }

    /// Overwrites every synced attribute, keeping id and creation time.
    ///
    /// Sync is a full replace, not a merge: a field the provider stopped
    /// sending goes back to `None`.
    pub fn overwrite(&mut self, attrs: UserAttributes) {
        self.external_id = attrs.external_id;
        self.email = attrs.email;
        self.nickname = attrs.nickname;
        self.first_name = attrs.first_name;
        self.last_name = attrs.last_name;
        self.phone_number = attrs.phone_number;
        self.image_url = attrs.image_url;
        self.role = attrs.role;
    }

    /// Directory label: nickname when present, email otherwise.
    pub fn label(&self) -> String {
        self.nickname.clone().unwrap_or_else(|| self.email.clone())
    }
}

impl Actor for User {
    fn actor_id(&self) -> UserId {
        self.id
    }

    fn actor_role(&self) -> Role {
        self.role
    }
}

/// Full attribute set carried by a sync upsert.
///
/// The same struct backs both the insert and the update half of the upsert,
/// which is what makes updates full replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAttributes {
    pub external_id: String,
    pub email: String,
    pub nickname: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub image_url: Option<String>,
    pub role: Role,
}
