//! Page registry.
//!
//! A [`Catalog`] is a fixed table of named pages, built once and never mutated. Two
//! shapes exist: the full catalog with the blog, and a smaller one without it. Which
//! one the binary uses is decided at build time by the `blog` Cargo feature.

mod about;
mod blog;
mod github;
mod native;

use std::fmt;
use std::io::{self, Write};

/// Renders a page body onto the given output.
pub type RenderFn = fn(&mut dyn Write) -> io::Result<()>;

/// Renders a single blog post, identified by its post id.
pub type RenderPostFn = fn(&mut dyn Write, u32) -> io::Result<()>;

/// A named page that can be shown by typing its name.
#[derive(Clone, Copy)]
pub struct Page {
    pub name: &'static str,
    render: RenderFn,
}

impl Page {
    pub const fn new(name: &'static str, render: RenderFn) -> Self {
        Self { name, render }
    }

    pub fn render(&self, out: &mut dyn Write) -> io::Result<()> {
        (self.render)(out)
    }
}

/// The blog page: an overview shown for a bare `blog`, plus per-post rendering.
#[derive(Clone, Copy)]
pub struct BlogPage {
    pub overview: Page,
    post: RenderPostFn,
}

impl BlogPage {
    pub const fn new(overview: Page, post: RenderPostFn) -> Self {
        Self { overview, post }
    }

    pub fn render_post(&self, out: &mut dyn Write, post_id: u32) -> io::Result<()> {
        (self.post)(out, post_id)
    }
}

impl fmt::Debug for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Page").field("name", &self.name).finish()
    }
}

impl fmt::Debug for BlogPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlogPage")
            .field("overview", &self.overview)
            .finish()
    }
}

const SIMPLE_PAGES: &[Page] = &[
    Page::new("about", about::render),
    Page::new("native", native::render),
    Page::new("github", github::render),
];

const BLOG: BlogPage = BlogPage::new(Page::new("blog", blog::render), blog::render_post);

/// Read-only mapping from page name to render action.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    pages: &'static [Page],
    blog: Option<BlogPage>,
}

impl Catalog {
    pub const fn new(pages: &'static [Page], blog: Option<BlogPage>) -> Self {
        Self { pages, blog }
    }

    /// about, native, github and blog.
    pub const fn with_blog() -> Self {
        Self::new(SIMPLE_PAGES, Some(BLOG))
    }

    /// about, native and github.
    pub const fn without_blog() -> Self {
        Self::new(SIMPLE_PAGES, None)
    }

    /// The catalog selected by the `blog` feature.
    pub const fn configured() -> Self {
        if cfg!(feature = "blog") {
            Self::with_blog()
        } else {
            Self::without_blog()
        }
    }

    /// Find a simple page whose name equals `name` exactly.
    pub fn find(&self, name: &[u8]) -> Option<&Page> {
        self.pages.iter().find(|page| page.name.as_bytes() == name)
    }

    pub fn pages(&self) -> &[Page] {
        self.pages
    }

    pub fn blog(&self) -> Option<&BlogPage> {
        self.blog.as_ref()
    }

    /// Write the page listing printed by the `list` command.
    pub fn write_listing(&self, out: &mut dyn Write) -> io::Result<()> {
        let mut names: Vec<String> = self
            .pages
            .iter()
            .map(|page| format!("'{}'", page.name))
            .collect();
        if let Some(blog) = &self.blog {
            names.push(format!("'{} [post id]'", blog.overview.name));
        }

        write!(out, "\nPages: {}", names.join(", "))?;
        if self.blog.is_some() {
            write!(
                out,
                "\n\nNote: the 'post id' of a blog post is the number in square brackets listed on the blog page.\
                 \nTo view the blog page itself and not a specific post, omit the post id."
            )?;
        }
        writeln!(out)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::configured()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(catalog: &Catalog) -> String {
        let mut out = Vec::new();
        catalog.write_listing(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn find_requires_exact_name() {
        let catalog = Catalog::with_blog();
        assert_eq!(catalog.find(b"about").map(|p| p.name), Some("about"));
        assert!(catalog.find(b"abou").is_none());
        assert!(catalog.find(b"About").is_none());
        assert!(catalog.find(b"about ").is_none());
    }

    #[test]
    fn blog_is_not_a_simple_page() {
        assert!(Catalog::with_blog().find(b"blog").is_none());
        assert!(Catalog::with_blog().blog().is_some());
        assert!(Catalog::without_blog().blog().is_none());
    }

    #[test]
    fn listing_with_blog_matches_banner_text() {
        assert_eq!(
            listing(&Catalog::with_blog()),
            "\nPages: 'about', 'native', 'github', 'blog [post id]'\
             \n\nNote: the 'post id' of a blog post is the number in square brackets listed on the blog page.\
             \nTo view the blog page itself and not a specific post, omit the post id.\n"
        );
    }

    #[test]
    fn listing_without_blog_has_no_note() {
        assert_eq!(
            listing(&Catalog::without_blog()),
            "\nPages: 'about', 'native', 'github'\n"
        );
    }

    #[test]
    fn configured_follows_blog_feature() {
        assert_eq!(
            Catalog::configured().blog().is_some(),
            cfg!(feature = "blog")
        );
    }

    #[test]
    fn every_page_renders_something() {
        let catalog = Catalog::with_blog();
        let blog = catalog.blog().unwrap();
        for page in catalog.pages().iter().chain([&blog.overview]) {
            let mut out = Vec::new();
            page.render(&mut out).unwrap();
            assert!(!out.is_empty(), "page {} rendered nothing", page.name);
        }
    }

    #[test]
    fn blog_post_receives_its_id() {
        let mut out = Vec::new();
        Catalog::with_blog()
            .blog()
            .unwrap()
            .render_post(&mut out, 42)
            .unwrap();
        assert_eq!(out, b"Displaying post 42\n");
    }
}
