use shared::{Currency, UserSettings};
use tracing::info;

use crate::domain::currencies;
use crate::errors::{Result, ServiceError};
use crate::storage::{DbConnection, UserSettingsRepository};

#[derive(Clone)]
pub struct UserSettingsService {
    settings_repository: UserSettingsRepository,
}

impl UserSettingsService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            settings_repository: UserSettingsRepository::new(db),
        }
    }

    /// Fetch a user's settings, creating them with the default currency on
    /// first access
    pub async fn get_or_create(&self, user_id: &str) -> Result<UserSettings> {
        if let Some(settings) = self.settings_repository.get(user_id).await? {
            return Ok(settings);
        }

        self.settings_repository
            .insert(user_id, currencies::DEFAULT_CURRENCY)
            .await?;
        info!("Created default settings for user {}", user_id);

        Ok(UserSettings {
            user_id: user_id.to_string(),
            currency: currencies::DEFAULT_CURRENCY.to_string(),
        })
    }

    /// Change a user's currency preference
    pub async fn update_currency(&self, user_id: &str, currency: &str) -> Result<UserSettings> {
        if !currencies::is_supported(currency) {
            return Err(ServiceError::validation(format!("Invalid currency: {}", currency)));
        }

        // Settings may not exist yet if the wizard is the first thing hit
        self.get_or_create(user_id).await?;
        self.settings_repository.update_currency(user_id, currency).await?;

        Ok(UserSettings {
            user_id: user_id.to_string(),
            currency: currency.to_string(),
        })
    }

    pub fn currencies(&self) -> Vec<Currency> {
        currencies::supported()
    }
}
