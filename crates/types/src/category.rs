use serde::{Deserialize, Serialize};

/// Icons the front end draws next to a category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    Cpu,
    Code,
    Palette,
    Coffee,
    Plane,
    Utensils,
    Briefcase,
    Heart,
    Tag,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CategoryKind {
    Technology,
    Programming,
    Design,
    Lifestyle,
    Travel,
    Food,
    Business,
    Health,
    Other(String),
}

impl CategoryKind {
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "technology" | "tech" => Self::Technology,
            "programming" | "development" => Self::Programming,
            "design" => Self::Design,
            "lifestyle" => Self::Lifestyle,
            "travel" => Self::Travel,
            "food" => Self::Food,
            "business" => Self::Business,
            "health" | "wellness" => Self::Health,
            _ => Self::Other(name.to_string()),
        }
    }

    /// Unknown categories fall back to the generic tag icon.
    pub fn icon(&self) -> Icon {
        match self {
            Self::Technology => Icon::Cpu,
            Self::Programming => Icon::Code,
            Self::Design => Icon::Palette,
            Self::Lifestyle => Icon::Coffee,
            Self::Travel => Icon::Plane,
            Self::Food => Icon::Utensils,
            Self::Business => Icon::Briefcase,
            Self::Health => Icon::Heart,
            Self::Other(_) => Icon::Tag,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryStat {
    #[serde(alias = "_id")]
    pub category: String,
    pub count: u64,
}

impl CategoryStat {
    pub fn kind(&self) -> CategoryKind {
        CategoryKind::from_name(&self.category)
    }

    pub fn icon(&self) -> Icon {
        self.kind().icon()
    }
}
