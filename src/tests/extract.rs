use crate::extract::{self, VideoId};

fn ids(text: &str) -> Vec<String> {
    extract::extract(text)
        .into_iter()
        .map(|id| id.to_string())
        .collect()
}

#[test]
pub fn test_supported_url_shapes() {
    let cases = [
        ("https://www.youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("http://youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://m.youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://music.youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://www.youtube.com/embed/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://www.youtube-nocookie.com/embed/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://www.youtube.com/shorts/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://www.youtube.com/live/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://www.youtube.com/v/dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("HTTPS://WWW.YOUTUBE.COM/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://youtu.be/a-b_c-d_e-f", "a-b_c-d_e-f"),
    ];

    for (text, expected) in cases {
        assert_eq!(ids(text), vec![expected.to_string()], "input: {text}");
    }
}

#[test]
pub fn test_query_params_and_fragments() {
    let cases = [
        ("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42s", "dQw4w9WgXcQ"),
        ("https://www.youtube.com/watch?v=dQw4w9WgXcQ&list=PL123#comments", "dQw4w9WgXcQ"),
        ("https://www.youtube.com/watch?feature=share&v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://www.youtube.com/watch?app=desktop&feature=x&v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://youtu.be/dQw4w9WgXcQ?si=abcdef&t=10", "dQw4w9WgXcQ"),
        ("https://youtu.be/dQw4w9WgXcQ#t=1m", "dQw4w9WgXcQ"),
        ("https://www.youtube.com/shorts/dQw4w9WgXcQ?feature=share", "dQw4w9WgXcQ"),
        ("https://www.youtube.com/embed/dQw4w9WgXcQ/", "dQw4w9WgXcQ"),
        ("https://www.youtube.com/watch?feature=x&amp;v=dQw4w9WgXcQ", "dQw4w9WgXcQ"),
        ("https://www.youtube.com/watch?v=dQw4w9WgXcQ&amp;t=42", "dQw4w9WgXcQ"),
    ];

    for (text, expected) in cases {
        assert_eq!(ids(text), vec![expected.to_string()], "input: {text}");
    }
}

#[test]
pub fn test_surrounding_punctuation() {
    let cases = [
        "(https://youtu.be/dQw4w9WgXcQ)",
        "<https://youtu.be/dQw4w9WgXcQ>",
        "\"https://youtu.be/dQw4w9WgXcQ\"",
        "see https://youtu.be/dQw4w9WgXcQ.",
        "see https://youtu.be/dQw4w9WgXcQ, then",
        "[video](https://www.youtube.com/watch?v=dQw4w9WgXcQ)",
        "<a href=\"https://www.youtube.com/embed/dQw4w9WgXcQ\">",
        "url=https://youtu.be/dQw4w9WgXcQ;",
        "看这个https://youtu.be/dQw4w9WgXcQ",
        "voilàhttps://youtu.be/dQw4w9WgXcQ",
        "看这个 youtu.be/dQw4w9WgXcQ",
    ];

    for text in cases {
        assert_eq!(ids(text), vec!["dQw4w9WgXcQ".to_string()], "input: {text}");
    }
}

#[test]
pub fn test_non_matches() {
    let cases = [
        "",
        "no links here",
        "dQw4w9WgXcQ",
        "https://example.com/watch?v=dQw4w9WgXcQ",
        "https://notyoutube.com/watch?v=dQw4w9WgXcQ",
        "https://youtube.com.evil/watch?v=dQw4w9WgXcQ",
        "https://youtu.be/short",
        "https://youtu.be/dQw4w9WgXcQX",
        "https://www.youtube.com/watch?v=dQw4w9WgXc",
        "https://www.youtube.com/watch?vv=dQw4w9WgXcQ",
        "https://www.youtube.com/channel/UCuAXFkgsw1L7xaCfnd5JJOw",
        "https://www.youtube.com/playlist?list=PLFgquLnL59alCl_2TQvOiD5Vgm1hCaGSI",
    ];

    for text in cases {
        assert!(ids(text).is_empty(), "matched: {text}");
    }
}

#[test]
pub fn test_many_urls_deduplicated_in_order() {
    let text = "
        first https://youtu.be/aaaaaaaaaaa and https://youtu.be/bbbbbbbbbbb
        again https://www.youtube.com/watch?v=aaaaaaaaaaa&t=1
        https://www.youtube.com/shorts/ccccccccccc https://youtu.be/bbbbbbbbbbb
    ";

    assert_eq!(ids(text), vec!["aaaaaaaaaaa", "bbbbbbbbbbb", "ccccccccccc"]);
}

#[test]
pub fn test_adjacent_urls_without_whitespace() {
    let text = "https://youtu.be/aaaaaaaaaaa,https://youtu.be/bbbbbbbbbbb|youtu.be/ccccccccccc";
    assert_eq!(ids(text), vec!["aaaaaaaaaaa", "bbbbbbbbbbb", "ccccccccccc"]);
}

#[test]
pub fn test_same_id_across_shapes() {
    let text = "Check https://youtu.be/dQw4w9WgXcQ and http://youtube.com/watch?v=dQw4w9WgXcQ";
    assert_eq!(ids(text), vec!["dQw4w9WgXcQ"]);
}

#[test]
pub fn test_ids_are_case_sensitive() {
    let text = "https://youtu.be/abcdefghijk https://youtu.be/ABCDEFGHIJK";
    assert_eq!(ids(text), vec!["abcdefghijk", "ABCDEFGHIJK"]);
}

#[test]
pub fn test_extract_is_deterministic() {
    let text = "a https://youtu.be/bbbbbbbbbbb b https://youtu.be/aaaaaaaaaaa c https://youtu.be/bbbbbbbbbbb";
    let first = extract::extract(text);
    let second = extract::extract(text);
    assert_eq!(first, second);

    // re-extracting from the rendered short urls is a fixed point
    let rendered = first
        .iter()
        .map(VideoId::short_url)
        .collect::<Vec<_>>()
        .join(" ");
    assert_eq!(extract::extract(&rendered), first);
}

#[test]
pub fn test_merge_keeps_first_occurrence_across_inputs() {
    let merged = extract::merge(vec![
        extract::extract("https://youtu.be/bbbbbbbbbbb https://youtu.be/aaaaaaaaaaa"),
        extract::extract("https://youtu.be/ccccccccccc https://youtu.be/bbbbbbbbbbb"),
    ]);

    let merged: Vec<String> = merged.iter().map(|id| id.to_string()).collect();
    assert_eq!(merged, vec!["bbbbbbbbbbb", "aaaaaaaaaaa", "ccccccccccc"]);
}

#[test]
pub fn test_video_id_parse() {
    assert!(VideoId::parse("dQw4w9WgXcQ").is_some());
    assert!(VideoId::parse("dQw4w9WgXc").is_none());
    assert!(VideoId::parse("dQw4w9WgXcQQ").is_none());
    assert!(VideoId::parse("dQw4w9WgXc!").is_none());
    assert_eq!(
        VideoId::parse("dQw4w9WgXcQ").unwrap().short_url(),
        "https://youtu.be/dQw4w9WgXcQ"
    );
}
