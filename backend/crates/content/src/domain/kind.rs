//! Resource Kinds
//!
//! The five content types the site renders. Each kind declares which payload
//! fields must be present on create/update and which fields hold image URLs
//! whose backing objects are cleaned up on delete.

/// Content resource kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Logos,
    Projects,
    Testimonials,
    Services,
    Gallery,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 5] = [
        ResourceKind::Logos,
        ResourceKind::Projects,
        ResourceKind::Testimonials,
        ResourceKind::Services,
        ResourceKind::Gallery,
    ];

    /// URL path segment for this kind
    pub fn slug(self) -> &'static str {
        match self {
            ResourceKind::Logos => "logos",
            ResourceKind::Projects => "projects",
            ResourceKind::Testimonials => "testimonials",
            ResourceKind::Services => "services",
            ResourceKind::Gallery => "gallery",
        }
    }

    /// Parse a URL path segment
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "logos" => Some(ResourceKind::Logos),
            "projects" => Some(ResourceKind::Projects),
            "testimonials" => Some(ResourceKind::Testimonials),
            "services" => Some(ResourceKind::Services),
            "gallery" => Some(ResourceKind::Gallery),
            _ => None,
        }
    }

    /// Fields a payload of this kind must carry (non-empty)
    pub fn required_fields(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Logos => &["name", "imageUrl"],
            ResourceKind::Projects => &["title", "description", "imageUrl"],
            ResourceKind::Testimonials => &["author", "quote"],
            ResourceKind::Services => &["title", "description"],
            ResourceKind::Gallery => &["imageUrl"],
        }
    }

    /// Fields that hold object-store image URLs, checked on delete
    pub fn image_url_fields(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Logos => &["imageUrl"],
            ResourceKind::Projects => &["imageUrl"],
            ResourceKind::Testimonials => &["avatarUrl"],
            ResourceKind::Services => &["iconUrl"],
            ResourceKind::Gallery => &["imageUrl"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_round_trip() {
        for kind in ResourceKind::ALL {
            assert_eq!(ResourceKind::from_slug(kind.slug()), Some(kind));
        }
    }

    #[test]
    fn test_unknown_slug() {
        assert_eq!(ResourceKind::from_slug("blog"), None);
        assert_eq!(ResourceKind::from_slug("Logos"), None);
    }
}
