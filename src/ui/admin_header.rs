/// View state for the admin dashboard header. Rendering is left to the
/// embedding UI; this type only carries the props and their defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminHeader {
    pub title: String,
    pub subtitle: String,
    pub badges: Vec<String>,
    pub show_notifications: bool,
}

impl Default for AdminHeader {
    fn default() -> Self {
        Self {
            title: "Admin Dashboard".to_string(),
            subtitle: "Manage your platform".to_string(),
            badges: Vec::new(),
            show_notifications: true,
        }
    }
}

impl AdminHeader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badges.push(badge.into());
        self
    }

    pub fn without_notifications(mut self) -> Self {
        self.show_notifications = false;
        self
    }
}
