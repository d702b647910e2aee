//! HTML templates. Each template is a plain record of named fields with a
//! `render` method that interpolates them into markup. Nothing here escapes
//! its input: hrefs, link text, and tag ids are emitted verbatim, so callers
//! must pass already-safe strings.

/// Renders an anchor tag, e.g. `<a href="post.html">Post</a>`.
pub fn link(href: &str, text: &str) -> String {
    format!("<a href=\"{}\">{}</a>", href, text)
}

/// The document head, banner, and navigation shared by every page.
pub struct Head<'a> {
    pub domain_name: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub nav_links: &'a str,
}

impl Head<'_> {
    pub fn render(&self) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{domain_name} | {title}</title>
</head>
<style>
html {{
    font-size: 1.25em;
    line-height: 1.25;
    margin: auto;
    max-width: 70ch;
}}
</style>
<body>
<h1>{domain_name}</h1>
<nav>
{nav_links}
</nav>
<hr/>
<div><i>{description}</i></div>
<hr/>
"#,
            domain_name = self.domain_name,
            title = self.title,
            nav_links = self.nav_links,
            description = self.description,
        )
    }
}

/// A collapsible `<details>` block.
pub struct Details<'a> {
    /// Inline CSS for the `<details>` element. May be empty.
    pub style: &'a str,
    pub summary: &'a str,
    pub contents: &'a str,
}

impl Details<'_> {
    pub fn render(&self) -> String {
        format!(
            "<details style=\"{}\">\n<summary>\n{}\n</summary>\n{}\n</details>\n",
            self.style, self.summary, self.contents
        )
    }
}

/// One post's teaser on the home page.
pub struct PostSummary<'a> {
    pub title_link: &'a str,
    pub pretty_date: &'a str,
    pub description: &'a str,
    pub read_more_link: &'a str,
}

impl PostSummary<'_> {
    pub fn render(&self) -> String {
        format!(
            "<h2>{}</h2>\n<i>{}</i>\n<p>\n{} {}\n</p>\n",
            self.title_link, self.pretty_date, self.description, self.read_more_link
        )
    }
}

/// Renders `items` as an unordered list, one `<li>` per item. When `id` is
/// given it becomes the list's `id` attribute verbatim.
pub fn list<I, S>(id: Option<&str>, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = match id {
        Some(id) => format!("<ul id=\"{}\">\n", id),
        None => String::from("<ul>\n"),
    };
    for item in items {
        out.push_str("<li>");
        out.push_str(item.as_ref());
        out.push_str("</li>\n");
    }
    out.push_str("</ul>");
    out
}

/// The footer and closing tags shared by every page.
pub const BOTTOM: &str = r##"<hr/>
<footer>
<a href="#">Back to the top</a>
</footer>
</body>
</html>"##;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_link() {
        assert_eq!(r#"<a href="about.html">About</a>"#, link("about.html", "About"));
    }

    #[test]
    fn test_link_does_not_escape() {
        assert_eq!(
            r#"<a href="a"b.html">Tom & Jerry</a>"#,
            link(r#"a"b.html"#, "Tom & Jerry")
        );
    }

    #[test]
    fn test_details() {
        let details = Details {
            style: "margin-left: 1em;",
            summary: "rust",
            contents: "<ul>\n</ul>",
        };
        assert_eq!(
            "<details style=\"margin-left: 1em;\">\n<summary>\nrust\n</summary>\n<ul>\n</ul>\n</details>\n",
            details.render()
        );
    }

    #[test]
    fn test_list() {
        assert_eq!("<ul>\n</ul>", list(None, Vec::<String>::new()));
        assert_eq!(
            "<ul id=\"rust\">\n<li>a</li>\n<li>b</li>\n</ul>",
            list(Some("rust"), vec!["a", "b"])
        );
    }

    #[test]
    fn test_head_interpolates_fields() {
        let head = Head {
            domain_name: "example.org",
            title: "Home",
            description: "A blog",
            nav_links: "NAV",
        }
        .render();
        assert!(head.starts_with("<!DOCTYPE html>\n"));
        assert!(head.contains("<title>example.org | Home</title>"));
        assert!(head.contains("<h1>example.org</h1>"));
        assert!(head.contains("<nav>\nNAV\n</nav>"));
        assert!(head.contains("<div><i>A blog</i></div>"));
        assert!(head.contains("max-width: 70ch;\n}"));
        assert!(head.ends_with("<hr/>\n"));
    }
}
