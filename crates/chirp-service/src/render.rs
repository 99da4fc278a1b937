//! Markdown-like text output for the home directory and profile pages.

use chirp_store::{Post, Profile};

/// Exact text returned for a profile that does not exist.
pub const NOT_FOUND: &str = "not found";

/// Result of looking up a profile page.
///
/// `NotFound` is an ordinary outcome, not an error; callers branch on it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProfileView {
    NotFound,
    Found { profile: Profile, posts: Vec<Post> },
}

impl ProfileView {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// `"not found"`, or the profile header followed by each post body.
    pub fn render(&self) -> String {
        match self {
            Self::NotFound => NOT_FOUND.to_string(),
            Self::Found { profile, posts } => {
                let mut out = format!(
                    "# {}\n{}\n{}[{}]\n\n",
                    profile.name, profile.bio, profile.href, profile.href
                );
                for post in posts {
                    out.push_str(&post.body);
                    out.push_str("\n\n");
                }
                out
            }
        }
    }
}

/// One `* <name>` line per profile, in the order given.
pub fn render_home<'a>(profiles: impl IntoIterator<Item = &'a Profile>) -> String {
    let mut out = String::new();
    for profile in profiles {
        out.push_str(&format!("* {}\n", profile.name));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chirp_types::Identity;

    fn profile(id: &str, name: &str) -> Profile {
        Profile {
            identity: Identity::parse(id).unwrap(),
            name: name.into(),
            bio: "bio".into(),
            href: "https://example.org".into(),
        }
    }

    fn post(author: &str, body: &str) -> Post {
        Post {
            author: Identity::parse(author).unwrap(),
            created_at: String::new(),
            body: body.into(),
        }
    }

    #[test]
    fn not_found_text_is_exact() {
        assert_eq!(ProfileView::NotFound.render(), "not found");
        assert!(!ProfileView::NotFound.is_found());
    }

    #[test]
    fn header_layout() {
        let view = ProfileView::Found {
            profile: profile("A", "Ann"),
            posts: vec![],
        };
        assert_eq!(
            view.render(),
            "# Ann\nbio\nhttps://example.org[https://example.org]\n\n"
        );
    }

    #[test]
    fn posts_follow_header_separated_by_blank_lines() {
        let view = ProfileView::Found {
            profile: profile("A", "Ann"),
            posts: vec![post("A", "first"), post("A", "second")],
        };
        let text = view.render();
        assert!(text.ends_with("[https://example.org]\n\nfirst\n\nsecond\n\n"));
    }

    #[test]
    fn home_lists_names() {
        let profiles = [profile("A", "Ann"), profile("B", "Ben")];
        assert_eq!(render_home(&profiles), "* Ann\n* Ben\n");
    }

    #[test]
    fn empty_home_is_empty() {
        assert_eq!(render_home(std::iter::empty()), "");
    }
}
