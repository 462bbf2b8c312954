//! Caption parser: raw caption text plus entity spans in, `{title, tags, url}` out.

use crate::types::{CaptionEntity, EntityKind};

/// Derived caption parts. `title` is the cleaned first line, `tags` the raw
/// hashtag texts in source order, `url` the first detected link (or empty).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCaption {
    pub title: String,
    pub tags: Vec<String>,
    pub url: String,
}

/// Parses a caption. Mentions (`@` through end of line) and the `♡` / `☆`
/// glyphs are stripped from the title seed; each url or hashtag entity is
/// captured and its literal text removed from the title. The title is then
/// truncated to its first line and trimmed. An empty caption yields empty
/// outputs.
pub fn parse_caption(caption: &str, entities: &[CaptionEntity]) -> ParsedCaption {
    if caption.is_empty() {
        return ParsedCaption::default();
    }

    let mut title = strip_decorations(caption);
    let mut tags = Vec::new();
    let mut url = String::new();

    for entity in entities {
        let Some(text) = slice_utf16(caption, entity.offset, entity.length) else {
            continue;
        };
        match entity.kind {
            EntityKind::Url => {
                title = title.replacen(&text, "", 1);
                if url.is_empty() {
                    url = text;
                }
            }
            EntityKind::Hashtag => {
                let tag = text.strip_prefix('#').unwrap_or(&text).to_string();
                title = title.replacen(&format!("#{tag}"), "", 1);
                tags.push(tag);
            }
            EntityKind::Other => {}
        }
    }

    let title = title.lines().next().unwrap_or("").trim().to_string();
    ParsedCaption { title, tags, url }
}

/// Removes `@mention` (to end of line) and the heart/star glyphs.
fn strip_decorations(caption: &str) -> String {
    let mut out = String::with_capacity(caption.len());
    for line in caption.split_inclusive('\n') {
        let (body, newline) = match line.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (line, false),
        };
        let body = match body.find('@') {
            Some(at) => &body[..at],
            None => body,
        };
        out.extend(body.chars().filter(|c| *c != '♡' && *c != '☆'));
        if newline {
            out.push('\n');
        }
    }
    out
}

/// Slices by UTF-16 code units, the offset convention Telegram entities use.
/// Returns `None` when the span falls outside the caption.
fn slice_utf16(s: &str, offset: usize, length: usize) -> Option<String> {
    let units: Vec<u16> = s.encode_utf16().collect();
    let end = offset.checked_add(length)?;
    if end > units.len() {
        return None;
    }
    String::from_utf16(&units[offset..end]).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(kind: EntityKind, offset: usize, length: usize) -> CaptionEntity {
        CaptionEntity { kind, offset, length }
    }

    #[test]
    fn test_empty_caption() {
        let parsed = parse_caption("", &[]);
        assert_eq!(parsed, ParsedCaption::default());
    }

    #[test]
    fn test_plain_caption_without_entities() {
        let parsed = parse_caption("Evening light", &[]);
        assert_eq!(parsed.title, "Evening light");
        assert!(parsed.tags.is_empty());
        assert!(parsed.url.is_empty());
    }

    #[test]
    fn test_hashtag_and_url() {
        let caption = "Nice #sunset https://x";
        let entities = [
            entity(EntityKind::Hashtag, 5, 7),
            entity(EntityKind::Url, 13, 9),
        ];
        let parsed = parse_caption(caption, &entities);
        assert_eq!(parsed.title, "Nice");
        assert_eq!(parsed.tags, vec!["sunset".to_string()]);
        assert_eq!(parsed.url, "https://x");
    }

    #[test]
    fn test_mention_and_glyphs_stripped() {
        let parsed = parse_caption("♡ Morning walk @somechannel", &[]);
        assert_eq!(parsed.title, "Morning walk");
    }

    #[test]
    fn test_mention_strips_to_end_of_line_only() {
        let parsed = parse_caption("Walk @somechannel\nsecond line", &[]);
        // Second line survives the mention strip but the title is the first line.
        assert_eq!(parsed.title, "Walk");
    }

    #[test]
    fn test_title_is_first_line_trimmed() {
        let caption = "  Winter  \n#snow";
        let entities = [entity(EntityKind::Hashtag, 11, 5)];
        let parsed = parse_caption(caption, &entities);
        assert_eq!(parsed.title, "Winter");
        assert_eq!(parsed.tags, vec!["snow".to_string()]);
    }

    #[test]
    fn test_utf16_offsets_with_cyrillic() {
        // Offsets are UTF-16 units; Cyrillic letters are one unit but two UTF-8 bytes.
        let caption = "Кот #Кот";
        let entities = [entity(EntityKind::Hashtag, 4, 4)];
        let parsed = parse_caption(caption, &entities);
        assert_eq!(parsed.title, "Кот");
        assert_eq!(parsed.tags, vec!["Кот".to_string()]);
    }

    #[test]
    fn test_multiple_tags_in_source_order() {
        let caption = "Walk #spring #park";
        let entities = [
            entity(EntityKind::Hashtag, 5, 7),
            entity(EntityKind::Hashtag, 13, 5),
        ];
        let parsed = parse_caption(caption, &entities);
        assert_eq!(parsed.title, "Walk");
        assert_eq!(
            parsed.tags,
            vec!["spring".to_string(), "park".to_string()]
        );
    }

    #[test]
    fn test_out_of_range_entity_is_ignored() {
        let parsed = parse_caption("short", &[entity(EntityKind::Hashtag, 10, 5)]);
        assert_eq!(parsed.title, "short");
        assert!(parsed.tags.is_empty());
    }

    #[test]
    fn test_only_first_url_is_kept() {
        let caption = "a https://x https://y";
        let entities = [
            entity(EntityKind::Url, 2, 9),
            entity(EntityKind::Url, 12, 9),
        ];
        let parsed = parse_caption(caption, &entities);
        // The first link wins; later ones are still removed from the title.
        assert_eq!(parsed.url, "https://x");
        assert_eq!(parsed.title, "a");
    }
}
