//! The launchable-app catalog. Each entry becomes one marker on the globe;
//! order is significant because layout positions are index-aligned.

/// One launchable app: stable `slug` identity plus display metadata.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AppEntry {
    pub name: &'static str,
    pub glyph: &'static str,
    pub color_hex: &'static str,
    pub slug: &'static str,
    pub description: &'static str,
    pub api_url: Option<&'static str>,
}

impl AppEntry {
    /// Accent color as linear RGB in [0, 1]. The catalog is static and
    /// covered by tests, so a malformed literal falls back to white
    /// rather than failing at runtime.
    pub fn color_rgb(&self) -> [f32; 3] {
        hex_to_rgb(self.color_hex).unwrap_or([1.0, 1.0, 1.0])
    }
}

macro_rules! app {
    ($name:literal, $glyph:literal, $color:literal, $slug:literal, $desc:literal) => {
        AppEntry {
            name: $name,
            glyph: $glyph,
            color_hex: $color,
            slug: $slug,
            description: $desc,
            api_url: None,
        }
    };
    ($name:literal, $glyph:literal, $color:literal, $slug:literal, $desc:literal, $api:literal) => {
        AppEntry {
            name: $name,
            glyph: $glyph,
            color_hex: $color,
            slug: $slug,
            description: $desc,
            api_url: Some($api),
        }
    };
}

pub const APP_LIST: &[AppEntry] = &[
    app!("Messages", "💬", "#22d3ee", "messages", "Send and receive messages with your contacts."),
    app!("Camera", "📷", "#f472b6", "camera", "Capture photos and videos instantly."),
    app!("Music", "🎵", "#a78bfa", "music", "Stream and listen to your favorite tracks."),
    app!("Weather", "🌤", "#fbbf24", "weather", "Check forecasts and current conditions."),
    app!("Maps", "🗺", "#34d399", "maps", "Navigate and explore locations worldwide."),
    app!("Calendar", "📅", "#f87171", "calendar", "Manage your events and schedule."),
    app!("Notes", "📝", "#fb923c", "notes", "Write and organize your thoughts."),
    app!("Health", "❤️", "#ec4899", "health", "Track your wellness and activity."),
    app!("Photos", "🖼", "#60a5fa", "photos", "Browse and manage your photo library."),
    app!("Settings", "⚙️", "#94a3b8", "settings", "Customize your device preferences."),
    app!("Mail", "✉️", "#2dd4bf", "mail", "Read and compose your emails."),
    app!("Clock", "⏰", "#e879f9", "clock", "Alarms, timers, and world clocks."),
    app!("Wallet", "💳", "#4ade80", "wallet", "Manage cards and payments."),
    app!("Store", "🛍", "#38bdf8", "store", "Discover and download new apps."),
    app!("News", "📰", "#f59e0b", "news", "Stay updated with latest headlines."),
    app!("Phone", "📞", "#10b981", "phone", "Make and receive phone calls."),
    app!("Video", "🎬", "#ef4444", "video", "Watch and stream video content."),
    app!("Browser", "🌐", "#6366f1", "browser", "Browse the web freely."),
    app!("Games", "🎮", "#8b5cf6", "games", "Play your favorite games."),
    app!("Fitness", "🏋️", "#14b8a6", "fitness", "Track workouts and fitness goals."),
    app!("Books", "📚", "#f97316", "books", "Read ebooks and audiobooks."),
    app!("Translate", "🌍", "#0ea5e9", "translate", "Translate text between languages."),
    app!("Podcast", "🎙", "#d946ef", "podcast", "Listen to your favorite podcasts."),
    app!("Files", "📁", "#64748b", "files", "Manage and organize your files."),
    app!(
        "Zoom",
        "📹",
        "#2D8CFF",
        "zoom",
        "Host and join video meetings instantly.",
        "https://api.zoom.us/v2/users/me/meetings"
    ),
    app!("Jira", "🎯", "#0052CC", "jira", "Track issues, manage projects, and plan sprints."),
];

/// Look up a catalog entry by its stable slug.
pub fn app_by_slug(slug: &str) -> Option<&'static AppEntry> {
    APP_LIST.iter().find(|a| a.slug == slug)
}

/// Parse a `#rrggbb` hex color into linear RGB components in [0, 1].
pub fn hex_to_rgb(hex: &str) -> Option<[f32; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .ok()
            .map(|v| v as f32 / 255.0)
    };
    Some([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}
