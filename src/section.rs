//! The sections shared by every HTML document: the top (head, banner and
//! navigation), the middle (a content fragment copied verbatim from the input
//! directory), and the bottom (footer).

use crate::config::BlogInfo;
use crate::html::{link, Head, BOTTOM};
use crate::page::Headline;
use crate::render::{Error, Result};
use tracing::debug;

/// The navigation bar: one link per page, separated by ` | `.
pub fn nav_links(info: &BlogInfo) -> String {
    info.pages
        .iter()
        .map(|page| link(&page.file, &page.title))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Renders everything up to the page-specific content for `doc`.
pub fn top(info: &BlogInfo, doc: &dyn Headline) -> String {
    Head {
        domain_name: &info.domain_name,
        title: doc.title(),
        description: doc.description(),
        nav_links: &nav_links(info),
    }
    .render()
}

/// Returns the raw contents of `{input_dir}/{file}` for `doc`. Fragments must
/// be valid UTF-8; anything else is reported as [`Error::Io`].
pub fn middle(info: &BlogInfo, doc: &dyn Headline) -> Result<String> {
    let path = info.input_dir.join(doc.file());
    debug!(path = %path.display(), "reading content fragment");
    std::fs::read_to_string(&path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => Error::NotFound { path, err },
        _ => Error::Io { path, err },
    })
}

pub fn bottom() -> &'static str {
    BOTTOM
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::config::fixtures::*;

    #[test]
    fn test_nav_links() {
        let info = info(
            vec![
                page("index.html", "Home"),
                page("archive.html", "Archive"),
                page("about.html", "About"),
            ],
            vec![],
        );
        assert_eq!(
            r#"<a href="index.html">Home</a> | <a href="archive.html">Archive</a> | <a href="about.html">About</a>"#,
            nav_links(&info)
        );
    }

    #[test]
    fn test_nav_links_single_and_empty() {
        let single = info(vec![page("index.html", "Home")], vec![]);
        assert_eq!(r#"<a href="index.html">Home</a>"#, nav_links(&single));
        assert_eq!("", nav_links(&info(vec![], vec![])));
    }

    #[test]
    fn test_top_uses_document_headline() {
        let posts = posts(1);
        let info = info(vec![page("index.html", "Home")], posts.clone());
        let top = top(&info, &posts[0]);
        assert!(top.contains("<title>example.org | Title of post0.html</title>"));
        assert!(top.contains("<div><i>Description of post0.html</i></div>"));
        assert!(top.contains(r#"<nav>
<a href="index.html">Home</a>
</nav>"#));
    }

    #[test]
    fn test_middle_is_verbatim() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let contents = "<p>Hello &amp; welcome</p>\n\n<!-- raw -->\n";
        std::fs::write(dir.path().join("about.html"), contents)?;

        let mut info = info(vec![page("about.html", "About")], vec![]);
        info.input_dir = dir.path().to_owned();
        assert_eq!(contents, middle(&info, &info.pages[0])?);
        Ok(())
    }

    #[test]
    fn test_middle_missing_fragment() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let mut info = info(vec![page("about.html", "About")], vec![]);
        info.input_dir = dir.path().to_owned();
        match middle(&info, &info.pages[0]) {
            Err(Error::NotFound { path, .. }) => assert_eq!(dir.path().join("about.html"), path),
            other => panic!("wanted not-found error; found {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_middle_rejects_non_utf8() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("about.html"), [0x3c, 0x70, 0x3e, 0xff, 0xfe])?;

        let mut info = info(vec![page("about.html", "About")], vec![]);
        info.input_dir = dir.path().to_owned();
        match middle(&info, &info.pages[0]) {
            Err(Error::Io { path, err }) => {
                assert_eq!(dir.path().join("about.html"), path);
                assert_eq!(std::io::ErrorKind::InvalidData, err.kind());
            }
            other => panic!("wanted I/O error; found {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_bottom() {
        assert!(bottom().starts_with("<hr/>\n<footer>"));
        assert!(bottom().ends_with("</body>\n</html>"));
    }
}
