//! Site-wide constants: firm identity, contact details and asset paths.

pub const FIRM_NAME_EN: &str = "YAMADA & SUZUKI";
pub const FIRM_NAME_JP: &str = "山田・鈴木法律事務所";

pub const PHONE: &str = "03-1234-5678";
pub const EMAIL: &str = "info@yamada-suzuki-law.jp";

pub const POSTAL_CODE: &str = "〒100-0001";
pub const ADDRESS: &str = "東京都千代田区千代田1-1-1";
pub const BUILDING: &str = "大手町ビル 15F";

pub const FOUNDED_YEAR: &str = "1998";

/// Scroll offset (px) past which the navigation bar switches from the
/// transparent to the opaque blurred treatment.
pub const NAV_SCROLL_THRESHOLD: i32 = 60;

pub const HERO_BG_IMAGE: &str = "/assets/hero-bg.jpg";
pub const OFFICE_IMAGE: &str = "/assets/office-interior.jpg";
pub const SCALES_IMAGE: &str = "/assets/scales-justice.jpg";
