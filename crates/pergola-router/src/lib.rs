#![allow(non_snake_case)]
//! Declarative routing.
//!
//! A `Routes` table maps path patterns to view builders; a `Router` owns
//! the current location and navigates it. Matching is first-match-wins in
//! registration order, so specific patterns go first and a trailing `*`
//! catch-all picks up everything else:
//!
//! ```rust
//! use pergola_router::Routes;
//! use pergola_ui::Text;
//!
//! let routes = Routes::new()
//!     .route("/", |_| Text("home"))
//!     .route("/about", |_| Text("about"))
//!     .route("/pokemon/:pokemonId", |m| {
//!         Text(format!("#{}", m.param("pokemonId").unwrap_or("?")))
//!     })
//!     .route("*", |_| Text("not found"));
//! assert_eq!(routes.len(), 4);
//! ```
//!
//! The router travels to descendants through a composition local:
//! `with_router` provides it, `Link` and `RouterHost` read it back. A
//! `Link` composed outside any provider degrades to a logged no-op rather
//! than a crash.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use pergola_core::*;
use pergola_ui::{Box as VBox, Link as AnchorLink};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// `*` may only appear as the final segment.
    #[error("catch-all segment must be last in '{0}'")]
    CatchAllNotLast(String),
    /// `:` with nothing after it.
    #[error("empty parameter name in '{0}'")]
    EmptyParam(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll,
}

/// A parsed path template: static segments, `:name` parameters, and an
/// optional trailing `*` catch-all.
#[derive(Clone, Debug)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn parse(raw: &str) -> Result<Pattern, PatternError> {
        let mut segments = Vec::new();
        for part in raw.split('/').filter(|s| !s.is_empty()) {
            if segments.last() == Some(&Segment::CatchAll) {
                return Err(PatternError::CatchAllNotLast(raw.to_string()));
            }
            if part == "*" {
                segments.push(Segment::CatchAll);
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::EmptyParam(raw.to_string()));
                }
                segments.push(Segment::Param(name.to_string()));
            } else {
                segments.push(Segment::Static(part.to_string()));
            }
        }
        Ok(Pattern {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Match `path` against this pattern. Static segments must equal,
    /// parameters bind one segment each, and a catch-all swallows the
    /// remainder (possibly empty). Anything left over fails the match.
    pub fn matches(&self, path: &str) -> Option<RouteMatch> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut params = HashMap::new();
        let mut i = 0;
        for seg in &self.segments {
            match seg {
                Segment::Static(s) => {
                    if parts.get(i).copied() != Some(s.as_str()) {
                        return None;
                    }
                    i += 1;
                }
                Segment::Param(name) => {
                    let part = parts.get(i)?;
                    params.insert(name.clone(), (*part).to_string());
                    i += 1;
                }
                Segment::CatchAll => {
                    return Some(RouteMatch {
                        params,
                        rest: Some(parts[i..].join("/")),
                    });
                }
            }
        }
        if i == parts.len() {
            Some(RouteMatch { params, rest: None })
        } else {
            None
        }
    }
}

/// The outcome of a successful match: bound parameters plus whatever a
/// trailing catch-all swallowed.
#[derive(Clone, Debug, Default)]
pub struct RouteMatch {
    pub params: HashMap<String, String>,
    pub rest: Option<String>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

pub type RouteBuilder = Rc<dyn Fn(&RouteMatch) -> View>;

/// Ordered route table. Evaluation is first-match-wins in registration
/// order.
#[derive(Clone, Default)]
pub struct Routes {
    entries: Vec<(Pattern, RouteBuilder)>,
}

impl Routes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, pattern: &str, f: impl Fn(&RouteMatch) -> View + 'static) -> Self {
        match Pattern::parse(pattern) {
            Ok(p) => self.entries.push((p, Rc::new(f))),
            Err(e) => log::error!("routes: skipping unparsable pattern: {e}"),
        }
        self
    }

    /// Register a group of routes under a shared prefix.
    pub fn nest(mut self, prefix: &str, build: impl FnOnce(Routes) -> Routes) -> Self {
        let sub = build(Routes::new());
        for (p, b) in sub.entries {
            let joined = join_paths(prefix, &p.raw);
            match Pattern::parse(&joined) {
                Ok(p) => self.entries.push((p, b)),
                Err(e) => log::error!("routes: skipping unparsable nested pattern: {e}"),
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve(&self, path: &str) -> Option<(RouteBuilder, RouteMatch)> {
        for (p, b) in &self.entries {
            if let Some(m) = p.matches(path) {
                return Some((b.clone(), m));
            }
        }
        None
    }

    /// Resolve `path` and build the matched view. With no match (and no
    /// catch-all to take it), nothing renders; that silence is flagged at
    /// debug level so a missing catch-all is discoverable.
    pub fn render(&self, path: &str) -> View {
        match self.resolve(path) {
            Some((build, m)) => build(&m),
            None => {
                log::debug!("routes: no pattern matched '{path}'");
                VBox(Modifier::new())
            }
        }
    }
}

fn join_paths(prefix: &str, rest: &str) -> String {
    format!(
        "/{}/{}",
        prefix.trim_matches('/'),
        rest.trim_start_matches('/')
    )
}

#[derive(Serialize, Deserialize)]
struct SavedRouter {
    location: String,
    history: Vec<String>,
}

/// Owns the current location and the visited-location stack. Cloning gives
/// another handle onto the same state.
#[derive(Clone)]
pub struct Router {
    location: Signal<String>,
    history: Rc<RefCell<Vec<String>>>,
}

impl Router {
    pub fn new(start: impl Into<String>) -> Self {
        Self {
            location: signal(start.into()),
            history: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn location(&self) -> String {
        self.location.get()
    }

    /// Go to `to`. An absolute target (leading `/`) replaces the location;
    /// a relative one resolves against the current location, the way a
    /// relative link in a route list does.
    pub fn navigate(&self, to: impl Into<String>) {
        let to = to.into();
        let current = self.location.get();
        let target = if to.starts_with('/') {
            to
        } else {
            format!("{}/{}", current.trim_end_matches('/'), to)
        };
        if target == current {
            return;
        }
        self.history.borrow_mut().push(current);
        self.location.set(target);
    }

    /// Return to the previously visited location, if any.
    pub fn back(&self) -> bool {
        let prev = self.history.borrow_mut().pop();
        match prev {
            Some(p) => {
                self.location.set(p);
                true
            }
            None => false,
        }
    }

    pub fn to_json(&self) -> String {
        let saved = SavedRouter {
            location: self.location.get(),
            history: self.history.borrow().clone(),
        };
        serde_json::to_string(&saved).unwrap_or_else(|_| "{}".into())
    }

    pub fn restore_json(&self, json: &str) {
        if let Ok(saved) = serde_json::from_str::<SavedRouter>(json) {
            *self.history.borrow_mut() = saved.history;
            self.location.set(saved.location);
        }
    }
}

/// The channel through which a mounted router reaches its descendants.
pub static ROUTER: Local<Option<Router>> = Local::new("router", || None);

pub fn with_router<R>(router: Router, f: impl FnOnce() -> R) -> R {
    ROUTER.provide(Some(router), f)
}

pub fn use_router() -> Option<Router> {
    ROUTER.get()
}

/// Render the table entry matching the provided router's current location.
pub fn RouterHost(routes: &Routes) -> View {
    match use_router() {
        Some(router) => routes.render(&router.location()),
        None => {
            log::warn!("RouterHost composed outside with_router; rendering nothing");
            VBox(Modifier::new())
        }
    }
}

/// A link that navigates the provided router. Outside a provider it
/// degrades to a logged no-op.
pub fn Link(label: impl Into<String>, to: impl Into<String>) -> View {
    let router = use_router();
    AnchorLink(label, to, move |to| match &router {
        Some(r) => r.navigate(to),
        None => log::warn!("link to '{to}' activated outside with_router; ignoring"),
    })
}

/// Programmatic navigation from a button.
pub fn NavigateButton(label: impl Into<String>, to: impl Into<String>) -> View {
    let router = use_router();
    let to = to.into();
    pergola_ui::Button(label, move || match &router {
        Some(r) => r.navigate(to.clone()),
        None => log::warn!("navigate to '{to}' requested outside with_router; ignoring"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pergola_ui::Text;

    #[test]
    fn parse_rejects_misplaced_catch_all_and_empty_params() {
        assert!(Pattern::parse("/a/*/b").is_err());
        assert!(Pattern::parse("/a/:").is_err());
        assert!(Pattern::parse("/a/:id").is_ok());
        assert!(Pattern::parse("*").is_ok());
        assert_eq!(Pattern::parse("/a/:id").unwrap().raw(), "/a/:id");
    }

    #[test]
    fn static_patterns_match_exactly() {
        let p = Pattern::parse("/grocery-list/monday").unwrap();
        assert!(p.matches("/grocery-list/monday").is_some());
        assert!(p.matches("/grocery-list").is_none());
        assert!(p.matches("/grocery-list/monday/extra").is_none());
    }

    #[test]
    fn root_pattern_matches_the_empty_location() {
        let p = Pattern::parse("/").unwrap();
        assert!(p.matches("/").is_some());
        assert!(p.matches("").is_some());
        assert!(p.matches("/about").is_none());
    }

    #[test]
    fn params_bind_one_segment() {
        let p = Pattern::parse("/plant-pokemon/:pokemonId").unwrap();
        let m = p.matches("/plant-pokemon/2").unwrap();
        assert_eq!(m.param("pokemonId"), Some("2"));
        assert!(p.matches("/plant-pokemon").is_none());
    }

    #[test]
    fn catch_all_swallows_the_remainder() {
        let p = Pattern::parse("/plant-pokemon/*").unwrap();
        assert_eq!(
            p.matches("/plant-pokemon/0").unwrap().rest.as_deref(),
            Some("0")
        );
        assert_eq!(
            p.matches("/plant-pokemon").unwrap().rest.as_deref(),
            Some("")
        );

        let any = Pattern::parse("*").unwrap();
        assert_eq!(
            any.matches("/no/such/page").unwrap().rest.as_deref(),
            Some("no/such/page")
        );
    }

    #[test]
    fn first_match_wins_in_registration_order() {
        let routes = Routes::new()
            .route("/about", |_| Text("specific"))
            .route("*", |_| Text("fallback"));

        let (build, m) = routes.resolve("/about").unwrap();
        let v = build(&m);
        match v.kind {
            ViewKind::Text { text, .. } => assert_eq!(text, "specific"),
            _ => panic!("expected text"),
        }

        let (build, m) = routes.resolve("/missing").unwrap();
        match build(&m).kind {
            ViewKind::Text { text, .. } => assert_eq!(text, "fallback"),
            _ => panic!("expected text"),
        }
    }

    #[test]
    fn nested_routes_share_their_prefix() {
        let routes = Routes::new().nest("/grocery-list", |r| {
            r.route("monday", |_| Text("mon"))
                .route("tuesday", |_| Text("tue"))
        });
        assert_eq!(routes.len(), 2);
        assert!(routes.resolve("/grocery-list/monday").is_some());
        assert!(routes.resolve("/grocery-list/tuesday").is_some());
        assert!(routes.resolve("/grocery-list").is_none());
    }

    #[test]
    fn navigate_resolves_relative_targets() {
        let router = Router::new("/plant-pokemon");
        router.navigate("2");
        assert_eq!(router.location(), "/plant-pokemon/2");

        router.navigate("/about");
        assert_eq!(router.location(), "/about");
    }

    #[test]
    fn back_walks_the_history_stack() {
        let router = Router::new("/");
        router.navigate("/about");
        router.navigate("/plant-pokemon");

        assert!(router.back());
        assert_eq!(router.location(), "/about");
        assert!(router.back());
        assert_eq!(router.location(), "/");
        assert!(!router.back());
    }

    #[test]
    fn location_round_trips_through_json() {
        let router = Router::new("/");
        router.navigate("/about");

        let json = router.to_json();
        let restored = Router::new("/elsewhere");
        restored.restore_json(&json);
        assert_eq!(restored.location(), "/about");
        assert!(restored.back());
        assert_eq!(restored.location(), "/");
    }

    #[test]
    fn host_outside_a_provider_renders_nothing() {
        let routes = Routes::new().route("/", |_| Text("home"));
        let v = RouterHost(&routes);
        assert!(matches!(v.kind, ViewKind::Box));
    }

    #[test]
    fn host_inside_a_provider_renders_the_match() {
        let routes = Routes::new().route("/about", |_| Text("about"));
        let router = Router::new("/about");
        let v = with_router(router, || RouterHost(&routes));
        match v.kind {
            ViewKind::Text { text, .. } => assert_eq!(text, "about"),
            _ => panic!("expected text"),
        }
    }
}
