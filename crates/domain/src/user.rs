//! User account types.

use serde::{Deserialize, Serialize};

/// Role assigned to an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    /// Regular professional user of the internal dashboard.
    #[serde(rename = "profesyonel")]
    Professional,
    /// Manager with access to the admin console.
    #[serde(rename = "yonetici")]
    Manager,
    /// Super administrator.
    #[serde(rename = "super_admin")]
    SuperAdmin,
}

/// Per-user dashboard preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Default city used to pre-fill searches.
    #[serde(rename = "varsayilan_sehir")]
    pub default_city: String,
    /// Preferred page size for search results.
    #[serde(rename = "sonuc_sayisi")]
    pub result_count: u32,
    /// Whether AI analysis runs automatically on listing detail pages.
    #[serde(rename = "ai_otomatik")]
    pub ai_auto: bool,
    /// Whether email notifications are enabled.
    #[serde(rename = "email_bildirimleri")]
    pub email_notifications: bool,
}

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique account identifier.
    pub id: u64,
    /// Full display name.
    #[serde(rename = "ad_soyad")]
    pub full_name: String,
    /// Account email address.
    pub email: String,
    /// Account role.
    #[serde(rename = "rol")]
    pub role: UserRole,
    /// Dashboard preferences, when configured.
    #[serde(rename = "tercihler", default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<UserPreferences>,
}

/// Request body for `PATCH /auth/profile`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    /// New full name, when changing it.
    #[serde(rename = "ad_soyad", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Request body for `PATCH /auth/preferences`. Only the present fields are
/// updated.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PreferencesUpdate {
    /// New default city.
    #[serde(rename = "varsayilan_sehir", skip_serializing_if = "Option::is_none")]
    pub default_city: Option<String>,
    /// New result page size.
    #[serde(rename = "sonuc_sayisi", skip_serializing_if = "Option::is_none")]
    pub result_count: Option<u32>,
    /// New AI auto-analysis setting.
    #[serde(rename = "ai_otomatik", skip_serializing_if = "Option::is_none")]
    pub ai_auto: Option<bool>,
    /// New email notification setting.
    #[serde(rename = "email_bildirimleri", skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
}

/// Request body for `POST /auth/change-password`.
#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordRequest {
    /// Current password.
    #[serde(rename = "mevcut_sifre")]
    pub current_password: String,
    /// New password.
    #[serde(rename = "yeni_sifre")]
    pub new_password: String,
    /// New password, repeated.
    #[serde(rename = "yeni_sifre_tekrar")]
    pub new_password_repeat: String,
}
