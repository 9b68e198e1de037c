const YOUTUBE_MARKER: &str = "youtube.com";
const YOUTUBE_SHORT_MARKER: &str = "youtu.be/";
const YOUTUBE_EMBED_URL: &str = "https://www.youtube.com/embed/";

/// Media referenced by the URL of an exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Media {
    Video { id: String },
    Image { src: String },
}

impl Media {
    /// Links to a video page are embedded as videos, anything else is shown as image.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let id = if url.contains(YOUTUBE_MARKER) {
            query_parameter(url, "v")
        } else if let Some((_, path)) = url.split_once(YOUTUBE_SHORT_MARKER) {
            path.split(['?', '#', '/']).next()
        } else {
            None
        };

        match id {
            Some(id) if !id.is_empty() => Media::Video { id: id.to_string() },
            _ => Media::Image {
                src: url.to_string(),
            },
        }
    }

    #[must_use]
    pub fn embed_url(&self) -> Option<String> {
        match self {
            Media::Video { id } => Some(format!("{YOUTUBE_EMBED_URL}{id}")),
            Media::Image { .. } => None,
        }
    }
}

fn query_parameter<'a>(url: &'a str, key: &str) -> Option<&'a str> {
    let (_, query) = url.split_once('?')?;
    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::watch_page(
        "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
        Media::Video { id: "dQw4w9WgXcQ".to_string() }
    )]
    #[case::additional_parameters(
        "https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ&t=42s",
        Media::Video { id: "dQw4w9WgXcQ".to_string() }
    )]
    #[case::fragment(
        "https://youtube.com/watch?v=dQw4w9WgXcQ#comments",
        Media::Video { id: "dQw4w9WgXcQ".to_string() }
    )]
    #[case::short_link(
        "https://youtu.be/dQw4w9WgXcQ?si=abc",
        Media::Video { id: "dQw4w9WgXcQ".to_string() }
    )]
    #[case::missing_id(
        "https://www.youtube.com/@channel",
        Media::Image { src: "https://www.youtube.com/@channel".to_string() }
    )]
    #[case::empty_id(
        "https://www.youtube.com/watch?v=",
        Media::Image { src: "https://www.youtube.com/watch?v=".to_string() }
    )]
    #[case::image(
        "https://v2.exercisedb.io/image/0001.gif",
        Media::Image { src: "https://v2.exercisedb.io/image/0001.gif".to_string() }
    )]
    #[case::empty("", Media::Image { src: String::new() })]
    fn test_media_from_url(#[case] url: &str, #[case] expected: Media) {
        assert_eq!(Media::from_url(url), expected);
    }

    #[test]
    fn test_media_embed_url() {
        assert_eq!(
            Media::Video {
                id: "dQw4w9WgXcQ".to_string()
            }
            .embed_url(),
            Some("https://www.youtube.com/embed/dQw4w9WgXcQ".to_string())
        );
        assert_eq!(
            Media::Image {
                src: "a.gif".to_string()
            }
            .embed_url(),
            None
        );
    }
}
