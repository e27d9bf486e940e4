use serde::Deserialize;

use vitrine_identity::Identified;
use vitrine_imagery::HasImage;

use super::RecordId;
use super::lenient::{self, first_present};

/**
    A product review, as supplied by the backend.

    Every identity and image field is optional - the backend
    may omit them, send `null`, or send an empty string. Some
    endpoints use alternative keys for the same value, those are
    kept as separate fields and resolved by the accessors below,
    preferring the canonical key whenever it is present.
*/
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: RecordId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub content: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "lenient::rating")]
    pub rating: u8,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Review {
    #[allow(clippy::missing_errors_doc)]
    pub fn try_from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /**
        The review text, from `content` or else `comment`.
    */
    #[must_use]
    pub fn text(&self) -> &str {
        if self.content.trim().is_empty() {
            self.comment.as_deref().unwrap_or_default()
        } else {
            &self.content
        }
    }
}

impl Identified for Review {
    fn raw_name(&self) -> Option<String> {
        first_present([&self.name, &self.user_name])
    }

    fn raw_email(&self) -> Option<String> {
        first_present([&self.email, &self.user_email])
    }
}

impl HasImage for Review {
    fn raw_image_url(&self) -> Option<String> {
        first_present([&self.image_url, &self.image])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_review() {
        let review = Review::try_from_json(
            r#"{
                "id": 12,
                "name": "maria silva",
                "email": "maria@example.com",
                "content": "Ótimo produto",
                "rating": 5,
                "created_at": "2024-03-01T12:00:00Z",
                "updated_at": null,
                "image_url": "/media/reviews/12/photo.jpg"
            }"#,
        )
        .unwrap();
        assert_eq!(review.id, RecordId::Number(12));
        assert_eq!(review.display_name(), "Maria Silva");
        assert_eq!(review.rating, 5);
        assert_eq!(review.updated_at, None);
    }

    #[test]
    fn parse_sparse_review() {
        let review = Review::try_from_json(r#"{ "id": "r-1", "comment": "ok" }"#).unwrap();
        assert_eq!(review.id, RecordId::Text("r-1".to_string()));
        assert_eq!(review.text(), "ok");
        assert_eq!(review.display_name(), "Usuário");
        assert_eq!(review.raw_image_url(), None);
    }

    #[test]
    fn parse_null_identity() {
        let review = Review::try_from_json(
            r#"{ "id": 3, "user_name": null, "user_email": "jane_doe@example.com" }"#,
        )
        .unwrap();
        assert_eq!(review.display_name(), "Jane Doe");
    }

    #[test]
    fn parse_both_image_keys() {
        let review = Review::try_from_json(
            r#"{ "id": 4, "image": "/a.jpg", "image_url": "https://cdn.example.com/x/a.jpg" }"#,
        )
        .unwrap();
        assert_eq!(
            review.raw_image_url().as_deref(),
            Some("https://cdn.example.com/x/a.jpg")
        );
    }

    #[test]
    fn parse_alternative_image_key() {
        let review =
            Review::try_from_json(r#"{ "id": 4, "image": "/a.jpg", "image_url": "" }"#).unwrap();
        assert_eq!(review.raw_image_url().as_deref(), Some("/a.jpg"));
    }

    #[test]
    fn parse_both_identity_keys() {
        let review = Review::try_from_json(
            r#"{ "id": 5, "name": "", "user_name": "ana souza", "email": "x@y.com", "user_email": "z@y.com" }"#,
        )
        .unwrap();
        assert_eq!(review.display_name(), "Ana Souza");
        assert_eq!(review.raw_email().as_deref(), Some("x@y.com"));
    }

    #[test]
    fn parse_fractional_rating() {
        let review = Review::try_from_json(r#"{ "id": 6, "rating": 4.5 }"#).unwrap();
        assert_eq!(review.rating, 5);
    }

    #[test]
    fn parse_null_content() {
        let review =
            Review::try_from_json(r#"{ "id": 7, "content": null, "comment": "bom" }"#).unwrap();
        assert_eq!(review.text(), "bom");
    }

    #[test]
    fn content_wins_over_comment() {
        let review =
            Review::try_from_json(r#"{ "id": 8, "content": "ótimo", "comment": "bom" }"#).unwrap();
        assert_eq!(review.text(), "ótimo");
    }

    #[test]
    fn parse_rejects_invalid_json() {
        assert!(Review::try_from_json("{ not json").is_err());
    }
}
