//! Per-site blogging prompt settings.

use chrono::{NaiveTime, Weekday};

use crate::db::{Collectable, Database, Identifiable, Key};
use crate::{Result, SiteId};

/// Format of the stored reminder time, e.g. `09.30`.
pub const REMINDER_TIME_FORMAT: &str = "%H.%M";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BloggingPromptSettings {
    pub site_id: SiteId,
    pub prompt_card_enabled: bool,
    /// Time of day as `HH.mm`.
    pub reminder_time: String,
    pub prompt_reminders_enabled: bool,
    pub is_potential_blogging_site: bool,
    pub reminder_days: ReminderDays,
}

impl Default for BloggingPromptSettings {
    fn default() -> Self {
        Self {
            site_id: 0,
            prompt_card_enabled: true,
            reminder_time: "10.00".to_string(),
            prompt_reminders_enabled: false,
            is_potential_blogging_site: false,
            reminder_days: ReminderDays::default(),
        }
    }
}

impl Collectable for BloggingPromptSettings {
    fn get_collection_name() -> &'static str {
        "blogging_prompt_settings"
    }
}

impl Identifiable for BloggingPromptSettings {
    fn get_id(&self) -> Key {
        self.site_id
    }
}

impl BloggingPromptSettings {
    pub fn new(site_id: SiteId) -> Self {
        Self {
            site_id,
            ..Default::default()
        }
    }

    /// Parses the stored reminder time. `None` means no usable reminder
    /// time is configured.
    pub fn reminder_time_date(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(&self.reminder_time, REMINDER_TIME_FORMAT).ok()
    }

    pub fn set_reminder_time(&mut self, time: NaiveTime) {
        self.reminder_time = time.format(REMINDER_TIME_FORMAT).to_string();
    }

    /// Copies every field of the remote settings.
    pub fn configure(&mut self, remote: &RemoteBloggingPromptsSettings) {
        self.prompt_card_enabled = remote.prompt_card_enabled;
        self.reminder_time = remote.reminders_time.clone();
        self.prompt_reminders_enabled = remote.prompt_reminders_enabled;
        self.is_potential_blogging_site = remote.is_potential_blogging_site;
        self.reminder_days.configure(&remote.reminders_days);
    }

    pub fn to_remote(&self) -> RemoteBloggingPromptsSettings {
        RemoteBloggingPromptsSettings {
            prompt_card_enabled: self.prompt_card_enabled,
            prompt_reminders_enabled: self.prompt_reminders_enabled,
            reminders_days: RemoteReminderDays {
                monday: self.reminder_days.monday,
                tuesday: self.reminder_days.tuesday,
                wednesday: self.reminder_days.wednesday,
                thursday: self.reminder_days.thursday,
                friday: self.reminder_days.friday,
                saturday: self.reminder_days.saturday,
                sunday: self.reminder_days.sunday,
            },
            reminders_time: self.reminder_time.clone(),
            is_potential_blogging_site: self.is_potential_blogging_site,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderDays {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

impl ReminderDays {
    pub fn configure(&mut self, remote: &RemoteReminderDays) {
        self.monday = remote.monday;
        self.tuesday = remote.tuesday;
        self.wednesday = remote.wednesday;
        self.thursday = remote.thursday;
        self.friday = remote.friday;
        self.saturday = remote.saturday;
        self.sunday = remote.sunday;
    }

    pub fn is_enabled(&self, day: Weekday) -> bool {
        match day {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        }
    }

    pub fn set(&mut self, day: Weekday, enabled: bool) {
        let slot = match day {
            Weekday::Mon => &mut self.monday,
            Weekday::Tue => &mut self.tuesday,
            Weekday::Wed => &mut self.wednesday,
            Weekday::Thu => &mut self.thursday,
            Weekday::Fri => &mut self.friday,
            Weekday::Sat => &mut self.saturday,
            Weekday::Sun => &mut self.sunday,
        };
        *slot = enabled;
    }

    /// Enabled days, monday first.
    pub fn enabled_weekdays(&self) -> Vec<Weekday> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .filter(|day| self.is_enabled(*day))
        .collect()
    }
}

/// Settings as exchanged with the platform.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteBloggingPromptsSettings {
    pub prompt_card_enabled: bool,
    pub prompt_reminders_enabled: bool,
    pub reminders_days: RemoteReminderDays,
    pub reminders_time: String,
    pub is_potential_blogging_site: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoteReminderDays {
    pub monday: bool,
    pub tuesday: bool,
    pub wednesday: bool,
    pub thursday: bool,
    pub friday: bool,
    pub saturday: bool,
    pub sunday: bool,
}

/// Stored settings for the site, if any.
pub fn settings_for_site(
    db: &Database,
    site_id: SiteId,
) -> Result<Option<BloggingPromptSettings>> {
    db.find::<BloggingPromptSettings>(site_id)
}

pub fn store_settings(db: &Database, settings: &BloggingPromptSettings) -> Result<()> {
    db.set(settings)?;
    tracing::debug!(site = settings.site_id, "blogging prompt settings stored");
    Ok(())
}
