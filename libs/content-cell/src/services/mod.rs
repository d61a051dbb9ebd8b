pub mod settings;

pub use settings::SiteSettingsService;
