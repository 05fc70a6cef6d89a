//! Test fixtures
//!
//! Factory functions for posts, feed bodies and README documents.

use crate::config::{Config, Markers};
use crate::domain::Post;

/// `count` posts titled `Post {i}` linking to `https://medium.com/@writer/post-{i}`
pub fn test_posts(count: usize) -> Vec<Post> {
    (0..count)
        .map(|i| Post::new(format!("Post {}", i), format!("https://medium.com/@writer/post-{}", i)))
        .collect()
}

/// Config with a fixed seed so renders are reproducible
pub fn test_config() -> Config {
    Config {
        username: "writer".to_string(),
        seed: Some("2024-01-15".to_string()),
        card_base_url: "https://cards.example/medium".to_string(),
        ..Config::default()
    }
}

/// RSS document with one `<item>` per `(title, link)` pair
pub fn feed_xml(items: &[(&str, &str)]) -> String {
    let items: Vec<String> = items
        .iter()
        .map(|(title, link)| {
            format!(
                "<item><title><![CDATA[{}]]></title><link>{}</link><guid isPermaLink=\"false\">{}</guid></item>",
                title, link, link
            )
        })
        .collect();
    let refs: Vec<&str> = items.iter().map(String::as_str).collect();
    feed_xml_with_items(&refs)
}

/// RSS document wrapping raw `<item>` markup, shaped like Medium's feed
pub fn feed_xml_with_items(items: &[&str]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<rss xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:content="http://purl.org/rss/1.0/modules/content/" xmlns:atom="http://www.w3.org/2005/Atom" version="2.0">
<channel>
<title><![CDATA[Stories by Writer on Medium]]></title>
<link>https://medium.com/@writer?source=rss-writer------2</link>
<atom:link href="https://medium.com/@writer/feed" rel="self" type="application/rss+xml"/>
{}
</channel>
</rss>"#,
        items.join("\n")
    )
}

/// README with the default markers around `body`
pub fn readme_with(body: &str) -> String {
    let markers = Markers::default();
    format!(
        "# Hi there\n\nSome intro.\n\n## Latest posts\n\n{}\n{}\n{}\n\n## Footer\n",
        markers.start, body, markers.end
    )
}
