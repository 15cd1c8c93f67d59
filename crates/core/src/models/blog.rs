//! News posts shown on the blog page.

use serde::{Deserialize, Serialize};

use crate::types::{Language, PostId};

/// A news post teaser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    #[serde(default)]
    pub title_ru: Option<String>,
    /// Publication date as authored ("Oct 12, 2024").
    pub date: String,
    #[serde(default)]
    pub date_ru: Option<String>,
    pub excerpt: String,
    #[serde(default)]
    pub excerpt_ru: Option<String>,
    pub image_url: String,
}

impl BlogPost {
    #[must_use]
    pub fn title(&self, language: Language) -> &str {
        language.pick(&self.title, self.title_ru.as_deref())
    }

    #[must_use]
    pub fn date(&self, language: Language) -> &str {
        language.pick(&self.date, self.date_ru.as_deref())
    }

    #[must_use]
    pub fn excerpt(&self, language: Language) -> &str {
        language.pick(&self.excerpt, self.excerpt_ru.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_post_partial_translation() {
        let post: BlogPost = serde_json::from_str(
            r#"{
                "id": "expo",
                "title": "Expo",
                "title_ru": "Выставка",
                "date": "May 1, 2024",
                "excerpt": "We exhibited.",
                "image_url": "https://images.unsplash.com/x"
            }"#,
        )
        .expect("parse");

        assert_eq!(post.title(Language::Ru), "Выставка");
        assert_eq!(post.date(Language::Ru), "May 1, 2024");
        assert_eq!(post.excerpt(Language::Ru), "We exhibited.");
    }
}
