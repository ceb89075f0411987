//! Hand-rolled path dispatcher.
//!
//! Two links, one remembered `Page`, no routing library. A click takes the
//! last `/`-delimited segment of the href and maps it into the closed
//! `Page` set; the fragment whose variant matches is the only thing
//! rendered. Unrecognized tokens land in `Page::Unknown`, which renders no
//! fragment and gets flagged in the log.

use pergola_core::prelude::*;
use pergola_ui::*;

/// The closed set of pages this dispatcher knows, plus an explicit
/// variant for everything it does not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Home,
    About,
    Unknown(String),
}

impl Page {
    /// The last `/`-delimited segment of the href names the page. An empty
    /// token means the site root, which is home.
    pub fn from_href(href: &str) -> Page {
        let token = href.rsplit('/').next().unwrap_or("");
        match token {
            "" | "home" => Page::Home,
            "about" => Page::About,
            other => Page::Unknown(other.to_string()),
        }
    }
}

/// The fragment shown for `page`, or `None` when no fragment matches.
fn fragment(page: &Page) -> Option<View> {
    match page {
        Page::Home => Some(Column(Modifier::new().padding(4.0)).child((
            Text("Homepage!").size(18.0),
            Text("This is the homepage."),
        ))),
        Page::About => Some(Column(Modifier::new().padding(4.0)).child((
            Text("About!").size(18.0),
            Text("All about us!"),
        ))),
        Page::Unknown(_) => None,
    }
}

pub fn screen() -> View {
    let current = remember(|| signal(Page::Home));

    let goto = {
        let current = current.clone();
        move |href: &str| {
            let page = Page::from_href(href);
            if let Page::Unknown(token) = &page {
                log::warn!("no page registered for '{token}'");
            }
            current.set(page);
        }
    };

    let mut kids = vec![
        Text("Welcome to our Website").size(24.0),
        Link("Homepage", "home", {
            let goto = goto.clone();
            move |href| goto(href)
        }),
        Link("About", "about", move |href| goto(href)),
    ];
    if let Some(section) = fragment(&current.get()) {
        kids.push(section);
    }

    Column(Modifier::new().padding(8.0)).child(kids)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn href_tokens_map_into_the_closed_set() {
        assert_eq!(Page::from_href("home"), Page::Home);
        assert_eq!(Page::from_href("http://localhost:3000/about"), Page::About);
        assert_eq!(Page::from_href("site/home"), Page::Home);
        assert_eq!(Page::from_href(""), Page::Home);
        assert_eq!(
            Page::from_href("site/basement"),
            Page::Unknown("basement".into())
        );
    }

    #[test]
    fn unknown_pages_render_no_fragment() {
        assert!(fragment(&Page::Home).is_some());
        assert!(fragment(&Page::About).is_some());
        assert!(fragment(&Page::Unknown("basement".into())).is_none());
    }
}
