//! Session state shared by every form
//!
//! A `Session` bundles the API client, the activity panels and the user
//! directory. It is created once by whichever front-end is running and
//! handed to the services by reference.

pub mod users;

pub use users::UserDirectory;

use crate::activity::{ActivityLog, Transcript};
use crate::api::ApiClient;
use crate::config::{RestdeskPaths, Settings};
use crate::error::RestdeskResult;
use crate::models::UserId;

pub struct Session {
    settings: Settings,
    pub client: ApiClient,
    pub activity: ActivityLog,
    pub users: UserDirectory,
}

impl Session {
    /// Build a session from settings; attaches the transcript when enabled
    pub fn new(settings: Settings, paths: &RestdeskPaths) -> RestdeskResult<Self> {
        let client = ApiClient::new(&settings)?;

        let mut activity = ActivityLog::new(settings.activity_limit);
        if settings.transcript_enabled {
            paths.ensure_directories()?;
            activity = activity.with_transcript(Transcript::new(paths.transcript_file()));
        }

        let users = UserDirectory::new(UserId::new(settings.default_user_id));

        Ok(Self {
            settings,
            client,
            activity,
            users,
        })
    }

    /// Session without a transcript, for tests and one-off tools
    pub fn in_memory(settings: Settings) -> RestdeskResult<Self> {
        Ok(Self {
            client: ApiClient::new(&settings)?,
            activity: ActivityLog::new(settings.activity_limit),
            users: UserDirectory::new(UserId::new(settings.default_user_id)),
            settings,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
